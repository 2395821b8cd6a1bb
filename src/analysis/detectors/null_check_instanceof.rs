//! Null Check With Instanceof Detector
//!
//! Detects null checks made redundant by an adjacent `instanceof` test.
//!
//! ## Detection Algorithm
//!
//! 1. Visit every `&&` and `||` expression (only with resolved semantics)
//! 2. Strip parentheses from both operands
//! 3. Find the null comparison, trying the left operand before the right
//! 4. Require the other operand to be `x instanceof T` under `&&`, or
//!    `!(x instanceof T)` under `||`
//! 5. Require `!=` under `&&` and `==` under `||`, and the compared
//!    expression to be syntactically the instanceof subject
//! 6. Report the null comparison
//!
//! ## Examples Detected
//!
//! ```java
//! if (x != null && x instanceof String) { }       // REDUNDANT: x != null
//! if (x == null || !(x instanceof String)) { }    // REDUNDANT: x == null
//! if (!(x instanceof String) || x == null) { }    // REDUNDANT: x == null
//! ```
//!
//! ## Not Detected
//!
//! ```java
//! if (x == null || !(y instanceof String)) { }    // different subjects
//! if (x == null || x instanceof String) { }       // not negated under ||
//! if (x != (null) && x instanceof String) { }     // null literal in parentheses
//! ```

use super::Detector;
use crate::analysis::syntax::{are_equivalent, skip_parentheses};
use crate::analysis::walker::{Node, NodeKind};
use crate::analysis::{AnalysisContext, Issue, IssueKind};
use crate::tree::{BinaryExpr, BinaryOp, Expr, UnaryOp};
use tracing::trace;

const NODES: &[NodeKind] = &[
    NodeKind::Binary(BinaryOp::And),
    NodeKind::Binary(BinaryOp::Or),
];

/// Detector for null checks subsumed by `instanceof`
#[derive(Debug, Default)]
pub struct NullCheckWithInstanceofDetector;

impl NullCheckWithInstanceofDetector {
    pub fn new() -> Self {
        Self
    }

    /// The redundant null comparison in `binary`, if any
    fn find_redundant_check<'a>(binary: &'a BinaryExpr) -> Option<&'a Expr> {
        let required = match binary.op {
            BinaryOp::And => BinaryOp::NotEqual,
            BinaryOp::Or => BinaryOp::Equal,
            _ => return None,
        };

        let left = skip_parentheses(&binary.left);
        let right = skip_parentheses(&binary.right);

        let (check, other) = NullComparison::parse(left)
            .map(|check| (check, right))
            .or_else(|| NullComparison::parse(right).map(|check| (check, left)))?;

        if check.op != required {
            return None;
        }

        let subject = type_test_subject(other, binary.op)?;
        are_equivalent(check.compared, subject).then_some(check.node)
    }
}

/// `expr == null`, `null != expr` and friends
struct NullComparison<'a> {
    node: &'a Expr,
    op: BinaryOp,
    /// The non-null side
    compared: &'a Expr,
}

impl<'a> NullComparison<'a> {
    fn parse(node: &'a Expr) -> Option<Self> {
        let Expr::Binary(binary) = node else {
            return None;
        };
        if !matches!(binary.op, BinaryOp::Equal | BinaryOp::NotEqual) {
            return None;
        }

        let compared = match (is_null(&binary.left), is_null(&binary.right)) {
            (true, false) => binary.right.as_ref(),
            (false, true) => binary.left.as_ref(),
            _ => return None,
        };

        Some(Self {
            node,
            op: binary.op,
            compared,
        })
    }
}

/// Only a bare `null` operand counts; `(null)` does not.
fn is_null(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(lit) if lit.is_null())
}

/// Subject of the type test paired with the null check.
///
/// Under `&&` the operand must be a bare `instanceof`; under `||` it must
/// be a negated one.
fn type_test_subject(expr: &Expr, outer: BinaryOp) -> Option<&Expr> {
    match (outer, expr) {
        (BinaryOp::And, _) => instanceof_subject(expr),
        (BinaryOp::Or, Expr::Unary(unary)) if unary.op == UnaryOp::Not => {
            instanceof_subject(skip_parentheses(&unary.operand))
        }
        _ => None,
    }
}

fn instanceof_subject(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::InstanceOf(test) => Some(test.operand.as_ref()),
        _ => None,
    }
}

impl Detector for NullCheckWithInstanceofDetector {
    fn kind(&self) -> IssueKind {
        IssueKind::RedundantNullCheck
    }

    fn nodes_to_visit(&self) -> &'static [NodeKind] {
        NODES
    }

    fn visit(&self, node: Node<'_>, ctx: &AnalysisContext<'_>) -> Vec<Issue> {
        if !ctx.semantic {
            return Vec::new();
        }
        let Node::Binary(binary) = node else {
            return Vec::new();
        };

        match Self::find_redundant_check(binary) {
            Some(check) => {
                trace!(line = check.span().line, "redundant null check before instanceof");
                vec![Issue::new(self.kind(), ctx.file, check.span())]
            }
            None => Vec::new(),
        }
    }
}
