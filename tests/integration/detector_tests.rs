//! Integration tests for each detector
//!
//! These tests load serialized compilation units from `tests/fixtures` and
//! verify where each check reports.

use javachecks::analysis::detectors::{
    Detector, HostnameVerifierDetector, NullCheckWithInstanceofDetector,
};
use javachecks::{Analyzer, Config, FileFinder, Issue, IssueKind, Severity, SourceUnit};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load one fixture unit
fn load_unit(dir: &str, filename: &str) -> SourceUnit {
    let path = fixtures_path().join(dir).join(filename);
    if !path.exists() {
        panic!("Fixture not found: {:?}", path);
    }
    SourceUnit::from_file(&path).expect("Failed to load fixture")
}

/// Run a single detector over a unit
fn run_detector(detector: Box<dyn Detector>, unit: &SourceUnit) -> Vec<Issue> {
    Analyzer::new(vec![detector]).analyze_unit(unit)
}

/// (line, column) of each issue
fn positions(issues: &[Issue]) -> Vec<(usize, usize)> {
    issues.iter().map(|i| (i.span.line, i.span.column)).collect()
}

// ============================================================================
// Redundant Null Check Tests (S4201)
// ============================================================================

mod null_check_tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let unit = load_unit("null_checks", "NullChecks.tree.json");
        assert!(unit.semantic);
        assert_eq!(unit.unit.types.len(), 1);
        assert_eq!(unit.unit.types[0].members.len(), 6);
    }

    #[test]
    fn test_reports_each_redundant_check() {
        let unit = load_unit("null_checks", "NullChecks.tree.json");
        let issues = run_detector(Box::new(NullCheckWithInstanceofDetector::new()), &unit);

        // andForm, orForm, reversed (anchored inside the parentheses), nested
        assert_eq!(positions(&issues), vec![(5, 16), (9, 16), (13, 44), (25, 24)]);
    }

    #[test]
    fn test_issue_record() {
        let unit = load_unit("null_checks", "NullChecks.tree.json");
        let issues = run_detector(Box::new(NullCheckWithInstanceofDetector::new()), &unit);

        let first = &issues[0];
        assert_eq!(first.kind, IssueKind::RedundantNullCheck);
        assert_eq!(first.kind.code(), "S4201");
        assert_eq!(first.severity, Severity::Info);
        assert_eq!(first.message, "Remove this unnecessary null check; \"instanceof\" returns false for nulls.");
        assert!(first.file.ends_with("NullChecks.java"));
    }

    #[test]
    fn test_silent_without_semantic_model() {
        let unit = load_unit("no_semantic", "Unresolved.tree.json");
        assert!(!unit.semantic);
        let issues = run_detector(Box::new(NullCheckWithInstanceofDetector::new()), &unit);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_semantic_override_enables_check() {
        let unit = load_unit("no_semantic", "Unresolved.tree.json");
        let issues = Analyzer::default()
            .with_semantic_override(Some(true))
            .analyze_unit(&unit);
        assert_eq!(positions(&issues), vec![(5, 16)]);
    }
}

// ============================================================================
// Hostname Verifier Tests (S3510)
// ============================================================================

mod hostname_verifier_tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let unit = load_unit("hostname", "Verifiers.tree.json");
        assert_eq!(unit.unit.types.len(), 4);
        assert_eq!(unit.types.len(), 5);
    }

    #[test]
    fn test_reports_trust_all_verifiers() {
        let unit = load_unit("hostname", "Verifiers.tree.json");
        let issues = run_detector(Box::new(HostnameVerifierDetector::new()), &unit);

        // nested-block method, expression lambda, block lambda,
        // parenthesized lambda body, anonymous class
        assert_eq!(
            positions(&issues),
            vec![(8, 13), (27, 59), (28, 61), (30, 49), (33, 17)]
        );
    }

    #[test]
    fn test_issue_record() {
        let unit = load_unit("hostname", "Verifiers.tree.json");
        let issues = run_detector(Box::new(HostnameVerifierDetector::new()), &unit);

        for issue in &issues {
            assert_eq!(issue.kind, IssueKind::AlwaysTrueHostnameVerifier);
            assert_eq!(issue.severity, Severity::Error);
            assert_eq!(
                issue.message,
                "Do not unconditionally return true in this method."
            );
        }
    }

    #[test]
    fn test_conditional_and_foreign_verify_ignored() {
        let unit = load_unit("hostname", "Verifiers.tree.json");
        let issues = run_detector(Box::new(HostnameVerifierDetector::new()), &unit);

        // Strict (line 14), NotAVerifier (line 21), the equals lambda (29)
        // and the BiPredicate lambda (36) stay silent
        let lines: Vec<usize> = issues.iter().map(|i| i.span.line).collect();
        for line in [14, 15, 21, 29, 36] {
            assert!(!lines.contains(&line), "unexpected issue on line {}", line);
        }
    }
}

// ============================================================================
// Statement Form Tests
// ============================================================================

mod statement_forms_tests {
    use super::*;

    fn load() -> SourceUnit {
        load_unit("statements", "Statements.tree.json")
    }

    #[test]
    fn test_fixture_loads() {
        let unit = load();
        assert_eq!(unit.unit.types[0].members.len(), 5);
    }

    #[test]
    fn test_null_checks_in_loops_ternary_and_try() {
        let issues = run_detector(Box::new(NullCheckWithInstanceofDetector::new()), &load());

        // while condition, if inside for-each, ternary condition, if inside try
        assert_eq!(positions(&issues), vec![(11, 16), (15, 17), (23, 16), (28, 17)]);
    }

    #[test]
    fn test_verifiers_in_initializers_and_catch() {
        let issues = run_detector(Box::new(HostnameVerifierDetector::new()), &load());

        // field initializer lambda, static initializer block lambda, catch block lambda
        assert_eq!(positions(&issues), vec![(4, 56), (7, 38), (32, 48)]);
    }

    #[test]
    fn test_both_rules_in_source_order() {
        let issues = Analyzer::default().analyze_unit(&load());
        let codes: Vec<&str> = issues.iter().map(|i| i.kind.code()).collect();
        assert_eq!(
            codes,
            vec!["S3510", "S3510", "S4201", "S4201", "S4201", "S4201", "S3510"]
        );
    }
}

// ============================================================================
// Whole-Run Tests
// ============================================================================

mod analyzer_tests {
    use super::*;

    fn load_all() -> Vec<SourceUnit> {
        let config = Config {
            exclude: vec!["broken".to_string()],
            ..Config::default()
        };
        let finder = FileFinder::new(&config).unwrap();
        finder
            .find_files(&fixtures_path())
            .iter()
            .map(|path| SourceUnit::from_file(path).unwrap())
            .collect()
    }

    #[test]
    fn test_discovers_fixtures() {
        assert_eq!(load_all().len(), 4);
    }

    #[test]
    fn test_all_rules_over_fixtures() {
        let issues = Analyzer::default().analyze(&load_all());

        let count = |kind| issues.iter().filter(|i| i.kind == kind).count();
        assert_eq!(count(IssueKind::RedundantNullCheck), 8);
        assert_eq!(count(IssueKind::AlwaysTrueHostnameVerifier), 8);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let units = load_all();
        let parallel = Analyzer::default().analyze(&units);
        let sequential = Analyzer::default().with_parallel(false).analyze(&units);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_repeated_runs_identical() {
        let units = load_all();
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.analyze(&units), analyzer.analyze(&units));
    }

    #[test]
    fn test_disabled_rule() {
        let config = Config {
            disabled_rules: vec!["S3510".to_string()],
            ..Config::default()
        };
        let issues = Analyzer::from_config(&config).analyze(&load_all());
        assert!(issues.iter().all(|i| i.kind == IssueKind::RedundantNullCheck));
        assert_eq!(issues.len(), 8);
    }

    #[test]
    fn test_broken_fixture_fails_to_load() {
        let path = fixtures_path().join("broken/Broken.tree.json");
        assert!(SourceUnit::from_file(&path).is_err());
    }
}
