//! Structural helpers shared by the checks
//!
//! Everything here is a pure function over borrowed tree nodes.

use crate::tree::{Block, Expr, LambdaBody, Parameter, Stmt, SwitchBlock};

/// Strip any number of redundant parentheses around `expr`
pub fn skip_parentheses(mut expr: &Expr) -> &Expr {
    while let Expr::Parenthesized(paren) = expr {
        expr = paren.inner.as_ref();
    }
    expr
}

/// Whether `expr` is the boolean literal `true`, ignoring parentheses.
/// No constant folding: `!false` or `1 == 1` are not `true` here.
pub fn is_true_literal(expr: &Expr) -> bool {
    matches!(skip_parentheses(expr), Expr::Literal(lit) if lit.is_true())
}

/// Descend through blocks whose only statement is another block
pub fn innermost_block(mut block: &Block) -> &Block {
    while let [Stmt::Block(inner)] = block.statements.as_slice() {
        block = inner;
    }
    block
}

/// Syntactic equivalence of two expressions.
///
/// Same node kinds, operators and leaf text at every level, ignoring
/// parentheses and source positions. Identifiers are compared by name
/// only and operand order is significant.
pub fn are_equivalent(left: &Expr, right: &Expr) -> bool {
    match (skip_parentheses(left), skip_parentheses(right)) {
        (Expr::Identifier(a), Expr::Identifier(b)) => a.name == b.name,
        (Expr::Literal(a), Expr::Literal(b)) => a.kind == b.kind && a.value == b.value,
        (Expr::Binary(a), Expr::Binary(b)) => {
            a.op == b.op && are_equivalent(&a.left, &b.left) && are_equivalent(&a.right, &b.right)
        }
        (Expr::Unary(a), Expr::Unary(b)) => a.op == b.op && are_equivalent(&a.operand, &b.operand),
        (Expr::InstanceOf(a), Expr::InstanceOf(b)) => {
            a.tested == b.tested && are_equivalent(&a.operand, &b.operand)
        }
        (Expr::Cast(a), Expr::Cast(b)) => a.ty == b.ty && are_equivalent(&a.expr, &b.expr),
        (Expr::MemberSelect(a), Expr::MemberSelect(b)) => {
            a.name == b.name && are_equivalent(&a.receiver, &b.receiver)
        }
        (Expr::ArrayAccess(a), Expr::ArrayAccess(b)) => {
            are_equivalent(&a.array, &b.array) && are_equivalent(&a.index, &b.index)
        }
        (Expr::Call(a), Expr::Call(b)) => {
            are_equivalent(&a.target, &b.target) && all_equivalent(&a.args, &b.args)
        }
        // Anonymous class bodies are never compared member by member
        (Expr::New(a), Expr::New(b)) => {
            a.ty == b.ty
                && a.class_body.is_none()
                && b.class_body.is_none()
                && all_equivalent(&a.args, &b.args)
        }
        (Expr::Lambda(a), Expr::Lambda(b)) => {
            params_equivalent(&a.params, &b.params)
                && match (&a.body, &b.body) {
                    (LambdaBody::Expr(x), LambdaBody::Expr(y)) => are_equivalent(x, y),
                    (LambdaBody::Block(x), LambdaBody::Block(y)) => blocks_equivalent(x, y),
                    _ => false,
                }
        }
        (Expr::Assignment(a), Expr::Assignment(b)) => {
            a.op == b.op && are_equivalent(&a.target, &b.target) && are_equivalent(&a.value, &b.value)
        }
        (Expr::Conditional(a), Expr::Conditional(b)) => {
            are_equivalent(&a.condition, &b.condition)
                && are_equivalent(&a.then_expr, &b.then_expr)
                && are_equivalent(&a.else_expr, &b.else_expr)
        }
        (Expr::NewArray(a), Expr::NewArray(b)) => {
            a.element_type == b.element_type
                && all_equivalent(&a.dimensions, &b.dimensions)
                && match (&a.initializer, &b.initializer) {
                    (Some(x), Some(y)) => all_equivalent(x, y),
                    (None, None) => true,
                    _ => false,
                }
        }
        (Expr::MethodReference(a), Expr::MethodReference(b)) => {
            a.name == b.name && are_equivalent(&a.receiver, &b.receiver)
        }
        (Expr::Switch(a), Expr::Switch(b)) => switches_equivalent(a, b),
        _ => false,
    }
}

fn all_equivalent(left: &[Expr], right: &[Expr]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| are_equivalent(a, b))
}

fn opt_equivalent(left: Option<&Expr>, right: Option<&Expr>) -> bool {
    match (left, right) {
        (Some(a), Some(b)) => are_equivalent(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn params_equivalent(left: &[Parameter], right: &[Parameter]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(p, q)| p.name == q.name && p.ty == q.ty)
}

fn blocks_equivalent(left: &Block, right: &Block) -> bool {
    all_stmts_equivalent(&left.statements, &right.statements)
}

fn all_stmts_equivalent(left: &[Stmt], right: &[Stmt]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| stmts_equivalent(a, b))
}

fn switches_equivalent(left: &SwitchBlock, right: &SwitchBlock) -> bool {
    are_equivalent(&left.selector, &right.selector)
        && left.cases.len() == right.cases.len()
        && left.cases.iter().zip(&right.cases).all(|(a, b)| {
            all_equivalent(&a.labels, &b.labels)
                && opt_equivalent(a.guard.as_ref(), b.guard.as_ref())
                && all_stmts_equivalent(&a.body, &b.body)
        })
}

fn stmts_equivalent(left: &Stmt, right: &Stmt) -> bool {
    match (left, right) {
        (Stmt::Block(a), Stmt::Block(b)) => blocks_equivalent(a, b),
        (Stmt::Return(a), Stmt::Return(b)) => opt_equivalent(a.expr.as_ref(), b.expr.as_ref()),
        (Stmt::Expr(a), Stmt::Expr(b))
        | (Stmt::Throw(a), Stmt::Throw(b))
        | (Stmt::Yield(a), Stmt::Yield(b)) => are_equivalent(&a.expr, &b.expr),
        (Stmt::If(a), Stmt::If(b)) => {
            are_equivalent(&a.condition, &b.condition)
                && stmts_equivalent(&a.then_branch, &b.then_branch)
                && match (&a.else_branch, &b.else_branch) {
                    (Some(x), Some(y)) => stmts_equivalent(x, y),
                    (None, None) => true,
                    _ => false,
                }
        }
        (Stmt::LocalVar(a), Stmt::LocalVar(b)) => {
            a.name == b.name
                && a.ty == b.ty
                && opt_equivalent(a.initializer.as_ref(), b.initializer.as_ref())
        }
        (Stmt::While(a), Stmt::While(b)) | (Stmt::DoWhile(a), Stmt::DoWhile(b)) => {
            are_equivalent(&a.condition, &b.condition) && stmts_equivalent(&a.body, &b.body)
        }
        (Stmt::For(a), Stmt::For(b)) => {
            all_stmts_equivalent(&a.init, &b.init)
                && opt_equivalent(a.condition.as_ref(), b.condition.as_ref())
                && all_equivalent(&a.update, &b.update)
                && stmts_equivalent(&a.body, &b.body)
        }
        (Stmt::ForEach(a), Stmt::ForEach(b)) => {
            params_equivalent(std::slice::from_ref(&a.var), std::slice::from_ref(&b.var))
                && are_equivalent(&a.iterable, &b.iterable)
                && stmts_equivalent(&a.body, &b.body)
        }
        (Stmt::Try(a), Stmt::Try(b)) => {
            all_stmts_equivalent(&a.resources, &b.resources)
                && blocks_equivalent(&a.block, &b.block)
                && a.catches.len() == b.catches.len()
                && a.catches.iter().zip(&b.catches).all(|(x, y)| {
                    params_equivalent(std::slice::from_ref(&x.param), std::slice::from_ref(&y.param))
                        && blocks_equivalent(&x.body, &y.body)
                })
                && match (&a.finally, &b.finally) {
                    (Some(x), Some(y)) => blocks_equivalent(x, y),
                    (None, None) => true,
                    _ => false,
                }
        }
        (Stmt::Switch(a), Stmt::Switch(b)) => switches_equivalent(a, b),
        (Stmt::Synchronized(a), Stmt::Synchronized(b)) => {
            are_equivalent(&a.lock, &b.lock) && blocks_equivalent(&a.body, &b.body)
        }
        (Stmt::Labeled(a), Stmt::Labeled(b)) => {
            a.label == b.label && stmts_equivalent(&a.body, &b.body)
        }
        (Stmt::Break(a), Stmt::Break(b)) | (Stmt::Continue(a), Stmt::Continue(b)) => {
            a.label == b.label
        }
        (Stmt::Assert(a), Stmt::Assert(b)) => {
            are_equivalent(&a.condition, &b.condition)
                && opt_equivalent(a.detail.as_ref(), b.detail.as_ref())
        }
        (Stmt::Empty { .. }, Stmt::Empty { .. }) => true,
        // Local classes are never compared member by member
        _ => false,
    }
}
