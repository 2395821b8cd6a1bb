mod analyzer;
pub mod detectors;
pub mod matcher;
pub mod syntax;
mod walker;

pub use analyzer::Analyzer;
pub use walker::{Node, NodeKind, TreeWalker};

use crate::tree::{Span, TypeHierarchy};
use std::path::{Path, PathBuf};

/// Read-only state available to a detector while it visits one node
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    /// Source file of the unit being walked
    pub file: &'a Path,
    /// Whether symbols and types were resolved for this unit
    pub semantic: bool,
    pub types: &'a dyn TypeHierarchy,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(file: &'a Path, semantic: bool, types: &'a dyn TypeHierarchy) -> Self {
        Self {
            file,
            semantic,
            types,
        }
    }
}

impl std::fmt::Debug for AnalysisContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("file", &self.file)
            .field("semantic", &self.semantic)
            .finish_non_exhaustive()
    }
}

/// A diagnostic raised by one of the checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub file: PathBuf,
    /// Position of the reported node
    pub span: Span,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, file: &Path, span: Span) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            file: file.to_path_buf(),
            span,
            message: kind.message().to_string(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// The checks this crate implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueKind {
    /// `x != null && x instanceof T`, or `x == null || !(x instanceof T)`
    RedundantNullCheck,

    /// `HostnameVerifier.verify` implementation that always returns `true`
    AlwaysTrueHostnameVerifier,
}

impl IssueKind {
    pub const ALL: [IssueKind; 2] = [
        IssueKind::RedundantNullCheck,
        IssueKind::AlwaysTrueHostnameVerifier,
    ];

    pub fn default_severity(&self) -> Severity {
        match self {
            IssueKind::RedundantNullCheck => Severity::Info,
            IssueKind::AlwaysTrueHostnameVerifier => Severity::Error,
        }
    }

    /// Fixed diagnostic text
    pub fn message(&self) -> &'static str {
        match self {
            IssueKind::RedundantNullCheck => {
                "Remove this unnecessary null check; \"instanceof\" returns false for nulls."
            }
            IssueKind::AlwaysTrueHostnameVerifier => {
                "Do not unconditionally return true in this method."
            }
        }
    }

    /// Stable rule id
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::RedundantNullCheck => "S4201",
            IssueKind::AlwaysTrueHostnameVerifier => "S3510",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Severity levels for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
