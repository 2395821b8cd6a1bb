// Structural detectors run against resolved syntax trees

mod hostname_verifier;
mod null_check_instanceof;

pub use hostname_verifier::HostnameVerifierDetector;
pub use null_check_instanceof::NullCheckWithInstanceofDetector;

use super::walker::{Node, NodeKind};
use super::{AnalysisContext, Issue, IssueKind};

/// Trait for tree detectors
///
/// Implementations hold only configuration built at construction time, so a
/// single instance can serve every thread of a parallel run.
pub trait Detector: Send + Sync {
    /// The issue this detector raises
    fn kind(&self) -> IssueKind;

    /// Node kinds the walker should hand to [`Detector::visit`]
    fn nodes_to_visit(&self) -> &'static [NodeKind];

    /// Inspect one node and return any issues anchored in it
    fn visit(&self, node: Node<'_>, ctx: &AnalysisContext<'_>) -> Vec<Issue>;
}

/// One instance of every detector, in rule-id order
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(HostnameVerifierDetector::new()),
        Box::new(NullCheckWithInstanceofDetector::new()),
    ]
}

/// Detector raising the given issue kind
pub fn detector_for(kind: IssueKind) -> Box<dyn Detector> {
    match kind {
        IssueKind::RedundantNullCheck => Box::new(NullCheckWithInstanceofDetector::new()),
        IssueKind::AlwaysTrueHostnameVerifier => Box::new(HostnameVerifierDetector::new()),
    }
}
