//! Hostname Verifier Detector
//!
//! Detects `HostnameVerifier.verify` implementations that accept every host,
//! which silently disables TLS hostname verification.
//!
//! ## Detection Algorithm
//!
//! 1. Declared methods: `verify(String, SSLSession)` on a `HostnameVerifier`
//!    subtype (anonymous classes included)
//! 2. Lambdas passed as call or constructor arguments whose inferred type is
//!    a `HostnameVerifier` and whose parameters are `(String, SSLSession)`
//! 3. Unwrap nested single-statement blocks; the innermost block must be
//!    exactly `return true;`
//! 4. Expression lambdas must be exactly `true` (parentheses allowed)
//!
//! ## Examples Detected
//!
//! ```java
//! public boolean verify(String host, SSLSession session) {
//!     return true;                                   // ALWAYS TRUE
//! }
//! conn.setHostnameVerifier((host, session) -> true); // ALWAYS TRUE
//! ```
//!
//! ## Not Detected
//!
//! ```java
//! public boolean verify(String host, SSLSession session) {
//!     if (trusted(host)) return true;
//!     return false;
//! }
//! ```

use super::Detector;
use crate::analysis::matcher::{MethodMatcher, SignatureCandidate, TypeCriteria};
use crate::analysis::syntax::{innermost_block, is_true_literal};
use crate::analysis::walker::{Node, NodeKind};
use crate::analysis::{AnalysisContext, Issue, IssueKind};
use crate::tree::{Block, Expr, LambdaBody, Stmt};
use tracing::trace;

const HOSTNAME_VERIFIER: &str = "javax.net.ssl.HostnameVerifier";
const STRING: &str = "java.lang.String";
const SSL_SESSION: &str = "javax.net.ssl.SSLSession";

const NODES: &[NodeKind] = &[
    NodeKind::Method,
    NodeKind::MethodInvocation,
    NodeKind::NewClass,
];

/// Detector for hostname verifiers that always return `true`
#[derive(Debug)]
pub struct HostnameVerifierDetector {
    verify: MethodMatcher,
}

impl HostnameVerifierDetector {
    pub fn new() -> Self {
        Self {
            verify: MethodMatcher::new(TypeCriteria::subtype_of(HOSTNAME_VERIFIER))
                .name("verify")
                .add_parameter(TypeCriteria::is(STRING))
                .add_parameter(TypeCriteria::is(SSL_SESSION)),
        }
    }

    /// `return true;` as the only statement of the innermost block
    fn check_block(&self, block: &Block, ctx: &AnalysisContext<'_>) -> Option<Issue> {
        match innermost_block(block).statements.as_slice() {
            [Stmt::Return(ret)] if ret.expr.as_ref().is_some_and(is_true_literal) => {
                trace!(line = ret.span.line, "hostname verifier always returns true");
                Some(Issue::new(self.kind(), ctx.file, ret.span))
            }
            _ => None,
        }
    }

    fn check_argument(&self, arg: &Expr, ctx: &AnalysisContext<'_>) -> Option<Issue> {
        let Expr::Lambda(lambda) = arg else {
            return None;
        };
        if !self
            .verify
            .matches(SignatureCandidate::Function(lambda), ctx.types)
        {
            return None;
        }

        match &lambda.body {
            LambdaBody::Block(block) => self.check_block(block, ctx),
            LambdaBody::Expr(body) => is_true_literal(body).then(|| {
                trace!(line = body.span().line, "hostname verifier lambda is `true`");
                Issue::new(self.kind(), ctx.file, body.span())
            }),
        }
    }

    fn check_arguments(&self, args: &[Expr], ctx: &AnalysisContext<'_>) -> Vec<Issue> {
        args.iter()
            .filter_map(|arg| self.check_argument(arg, ctx))
            .collect()
    }
}

impl Default for HostnameVerifierDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for HostnameVerifierDetector {
    fn kind(&self) -> IssueKind {
        IssueKind::AlwaysTrueHostnameVerifier
    }

    fn nodes_to_visit(&self) -> &'static [NodeKind] {
        NODES
    }

    fn visit(&self, node: Node<'_>, ctx: &AnalysisContext<'_>) -> Vec<Issue> {
        match node {
            Node::Method(method) => method
                .body
                .as_ref()
                .filter(|_| {
                    self.verify
                        .matches(SignatureCandidate::Method(method), ctx.types)
                })
                .and_then(|body| self.check_block(body, ctx))
                .into_iter()
                .collect(),
            Node::MethodInvocation(call) => self.check_arguments(&call.args, ctx),
            Node::NewClass(new) => self.check_arguments(&new.args, ctx),
            Node::Binary(_) => Vec::new(),
        }
    }
}
