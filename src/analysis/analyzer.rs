// Runs the detectors over a set of compilation units
//
// Units are independent: each one is walked on its own with the shared,
// immutable detector set. Results are merged and sorted by position.

use super::detectors::{self, Detector};
use super::{AnalysisContext, Issue, IssueKind, TreeWalker};
use crate::config::Config;
use crate::tree::SourceUnit;
use rayon::prelude::*;
use tracing::{debug, info};

pub struct Analyzer {
    detectors: Vec<Box<dyn Detector>>,
    /// Replaces each unit's own semantic flag when set
    semantic_override: Option<bool>,
    /// Use parallel processing
    parallel: bool,
}

impl Analyzer {
    pub fn new(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self {
            detectors,
            semantic_override: None,
            parallel: true,
        }
    }

    /// Every detector enabled
    pub fn with_all_detectors() -> Self {
        Self::new(detectors::all_detectors())
    }

    /// Detectors enabled by `config`, with its semantic override applied
    pub fn from_config(config: &Config) -> Self {
        let detectors = IssueKind::ALL
            .into_iter()
            .filter(|kind| config.is_rule_enabled(*kind))
            .map(detectors::detector_for)
            .collect();
        Self::new(detectors).with_semantic_override(config.assume_semantic)
    }

    pub fn with_semantic_override(mut self, semantic: Option<bool>) -> Self {
        self.semantic_override = semantic;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn enabled_rules(&self) -> Vec<IssueKind> {
        self.detectors.iter().map(|d| d.kind()).collect()
    }

    fn walker(&self) -> TreeWalker<'_> {
        TreeWalker::new(self.detectors.iter().map(|d| &**d as &dyn Detector))
    }

    /// Analyze a single compilation unit
    pub fn analyze_unit(&self, unit: &SourceUnit) -> Vec<Issue> {
        let mut issues = self.run_unit(&self.walker(), unit);
        sort_issues(&mut issues);
        issues
    }

    fn run_unit(&self, walker: &TreeWalker<'_>, unit: &SourceUnit) -> Vec<Issue> {
        let semantic = self.semantic_override.unwrap_or(unit.semantic);
        let ctx = AnalysisContext::new(&unit.path, semantic, &unit.types);
        let issues = walker.walk(&unit.unit, &ctx);
        debug!(
            "{}: {} issues (semantic: {})",
            unit.path.display(),
            issues.len(),
            semantic
        );
        issues
    }

    /// Analyze all units and return their issues sorted by file and position
    pub fn analyze(&self, units: &[SourceUnit]) -> Vec<Issue> {
        info!(
            "Analyzing {} compilation units with {} rules...",
            units.len(),
            self.detectors.len()
        );

        let walker = self.walker();
        let mut issues: Vec<Issue> = if self.parallel {
            units
                .par_iter()
                .flat_map_iter(|unit| self.run_unit(&walker, unit))
                .collect()
        } else {
            units
                .iter()
                .flat_map(|unit| self.run_unit(&walker, unit))
                .collect()
        };

        sort_issues(&mut issues);
        info!("Found {} issues", issues.len());
        issues
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_all_detectors()
    }
}

fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.span.line.cmp(&b.span.line))
            .then(a.span.column.cmp(&b.span.column))
            .then(a.kind.cmp(&b.kind))
    });
}
