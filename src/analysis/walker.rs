//! Source-order traversal that feeds nodes to subscribed detectors

use super::detectors::Detector;
use super::{AnalysisContext, Issue};
use crate::tree::{
    BinaryExpr, BinaryOp, Block, CallExpr, ClassDecl, CompilationUnit, Expr, LambdaBody, Member,
    MethodDecl, NewExpr, Stmt, SwitchBlock,
};
use std::collections::HashMap;

/// Node kinds a detector can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Method,
    Binary(BinaryOp),
    MethodInvocation,
    NewClass,
}

/// Borrowed view of a dispatchable node
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Method(&'a MethodDecl),
    Binary(&'a BinaryExpr),
    MethodInvocation(&'a CallExpr),
    NewClass(&'a NewExpr),
}

impl Node<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Method(_) => NodeKind::Method,
            Node::Binary(expr) => NodeKind::Binary(expr.op),
            Node::MethodInvocation(_) => NodeKind::MethodInvocation,
            Node::NewClass(_) => NodeKind::NewClass,
        }
    }
}

/// Walks compilation units and dispatches nodes to detectors.
///
/// The subscription table is computed once; walking holds no state beyond
/// the issues collected for the current unit.
pub struct TreeWalker<'d> {
    subscriptions: HashMap<NodeKind, Vec<&'d dyn Detector>>,
}

impl<'d> TreeWalker<'d> {
    pub fn new<I>(detectors: I) -> Self
    where
        I: IntoIterator<Item = &'d dyn Detector>,
    {
        let mut subscriptions: HashMap<NodeKind, Vec<&'d dyn Detector>> = HashMap::new();
        for detector in detectors {
            for kind in detector.nodes_to_visit() {
                subscriptions.entry(*kind).or_default().push(detector);
            }
        }
        Self { subscriptions }
    }

    pub fn is_subscribed(&self, kind: NodeKind) -> bool {
        self.subscriptions.contains_key(&kind)
    }

    pub fn walk(&self, unit: &CompilationUnit, ctx: &AnalysisContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        for class in &unit.types {
            self.walk_class(class, ctx, &mut issues);
        }
        issues
    }

    fn dispatch(&self, node: Node<'_>, ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        if let Some(detectors) = self.subscriptions.get(&node.kind()) {
            for detector in detectors {
                issues.extend(detector.visit(node, ctx));
            }
        }
    }

    fn walk_class(&self, class: &ClassDecl, ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        self.walk_members(&class.members, ctx, issues);
    }

    fn walk_members(&self, members: &[Member], ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        for member in members {
            match member {
                Member::Method(method) => {
                    self.dispatch(Node::Method(method), ctx, issues);
                    if let Some(body) = &method.body {
                        self.walk_block(body, ctx, issues);
                    }
                }
                Member::Field(field) => {
                    if let Some(init) = &field.initializer {
                        self.walk_expr(init, ctx, issues);
                    }
                }
                Member::Class(class) => self.walk_class(class, ctx, issues),
                Member::Initializer(init) => self.walk_block(&init.body, ctx, issues),
            }
        }
    }

    fn walk_block(&self, block: &Block, ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        self.walk_stmts(&block.statements, ctx, issues);
    }

    fn walk_stmts(&self, stmts: &[Stmt], ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        for stmt in stmts {
            self.walk_stmt(stmt, ctx, issues);
        }
    }

    fn walk_exprs(&self, exprs: &[Expr], ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        for expr in exprs {
            self.walk_expr(expr, ctx, issues);
        }
    }

    fn walk_opt_expr(
        &self,
        expr: Option<&Expr>,
        ctx: &AnalysisContext<'_>,
        issues: &mut Vec<Issue>,
    ) {
        if let Some(expr) = expr {
            self.walk_expr(expr, ctx, issues);
        }
    }

    fn walk_stmt(&self, stmt: &Stmt, ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        match stmt {
            Stmt::Block(block) => self.walk_block(block, ctx, issues),
            Stmt::Return(ret) => self.walk_opt_expr(ret.expr.as_ref(), ctx, issues),
            Stmt::Expr(stmt) | Stmt::Throw(stmt) | Stmt::Yield(stmt) => {
                self.walk_expr(&stmt.expr, ctx, issues)
            }
            Stmt::If(stmt) => {
                self.walk_expr(&stmt.condition, ctx, issues);
                self.walk_stmt(&stmt.then_branch, ctx, issues);
                if let Some(else_branch) = &stmt.else_branch {
                    self.walk_stmt(else_branch, ctx, issues);
                }
            }
            Stmt::LocalVar(var) => self.walk_opt_expr(var.initializer.as_ref(), ctx, issues),
            Stmt::LocalClass(class) => self.walk_class(class, ctx, issues),
            Stmt::While(stmt) => {
                self.walk_expr(&stmt.condition, ctx, issues);
                self.walk_stmt(&stmt.body, ctx, issues);
            }
            // Source order: the body precedes the condition
            Stmt::DoWhile(stmt) => {
                self.walk_stmt(&stmt.body, ctx, issues);
                self.walk_expr(&stmt.condition, ctx, issues);
            }
            Stmt::For(stmt) => {
                self.walk_stmts(&stmt.init, ctx, issues);
                self.walk_opt_expr(stmt.condition.as_ref(), ctx, issues);
                self.walk_exprs(&stmt.update, ctx, issues);
                self.walk_stmt(&stmt.body, ctx, issues);
            }
            Stmt::ForEach(stmt) => {
                self.walk_expr(&stmt.iterable, ctx, issues);
                self.walk_stmt(&stmt.body, ctx, issues);
            }
            Stmt::Try(stmt) => {
                self.walk_stmts(&stmt.resources, ctx, issues);
                self.walk_block(&stmt.block, ctx, issues);
                for catch in &stmt.catches {
                    self.walk_block(&catch.body, ctx, issues);
                }
                if let Some(finally) = &stmt.finally {
                    self.walk_block(finally, ctx, issues);
                }
            }
            Stmt::Switch(switch) => self.walk_switch(switch, ctx, issues),
            Stmt::Synchronized(stmt) => {
                self.walk_expr(&stmt.lock, ctx, issues);
                self.walk_block(&stmt.body, ctx, issues);
            }
            Stmt::Labeled(stmt) => self.walk_stmt(&stmt.body, ctx, issues),
            Stmt::Assert(stmt) => {
                self.walk_expr(&stmt.condition, ctx, issues);
                self.walk_opt_expr(stmt.detail.as_ref(), ctx, issues);
            }
            Stmt::Break(_) | Stmt::Continue(_) | Stmt::Empty { .. } => {}
        }
    }

    fn walk_switch(
        &self,
        switch: &SwitchBlock,
        ctx: &AnalysisContext<'_>,
        issues: &mut Vec<Issue>,
    ) {
        self.walk_expr(&switch.selector, ctx, issues);
        for case in &switch.cases {
            self.walk_exprs(&case.labels, ctx, issues);
            self.walk_opt_expr(case.guard.as_ref(), ctx, issues);
            self.walk_stmts(&case.body, ctx, issues);
        }
    }

    fn walk_expr(&self, expr: &Expr, ctx: &AnalysisContext<'_>, issues: &mut Vec<Issue>) {
        match expr {
            Expr::Identifier(_) | Expr::Literal(_) => {}
            Expr::Parenthesized(paren) => self.walk_expr(&paren.inner, ctx, issues),
            Expr::Binary(binary) => {
                self.dispatch(Node::Binary(binary), ctx, issues);
                self.walk_expr(&binary.left, ctx, issues);
                self.walk_expr(&binary.right, ctx, issues);
            }
            Expr::Unary(unary) => self.walk_expr(&unary.operand, ctx, issues),
            Expr::InstanceOf(test) => self.walk_expr(&test.operand, ctx, issues),
            Expr::Cast(cast) => self.walk_expr(&cast.expr, ctx, issues),
            Expr::MemberSelect(select) => self.walk_expr(&select.receiver, ctx, issues),
            Expr::ArrayAccess(access) => {
                self.walk_expr(&access.array, ctx, issues);
                self.walk_expr(&access.index, ctx, issues);
            }
            Expr::Call(call) => {
                self.dispatch(Node::MethodInvocation(call), ctx, issues);
                self.walk_expr(&call.target, ctx, issues);
                self.walk_exprs(&call.args, ctx, issues);
            }
            Expr::New(new) => {
                self.dispatch(Node::NewClass(new), ctx, issues);
                self.walk_exprs(&new.args, ctx, issues);
                if let Some(body) = &new.class_body {
                    self.walk_members(body, ctx, issues);
                }
            }
            Expr::Lambda(lambda) => match &lambda.body {
                LambdaBody::Block(block) => self.walk_block(block, ctx, issues),
                LambdaBody::Expr(body) => self.walk_expr(body, ctx, issues),
            },
            Expr::Assignment(assign) => {
                self.walk_expr(&assign.target, ctx, issues);
                self.walk_expr(&assign.value, ctx, issues);
            }
            Expr::Conditional(cond) => {
                self.walk_expr(&cond.condition, ctx, issues);
                self.walk_expr(&cond.then_expr, ctx, issues);
                self.walk_expr(&cond.else_expr, ctx, issues);
            }
            Expr::NewArray(array) => {
                self.walk_exprs(&array.dimensions, ctx, issues);
                if let Some(init) = &array.initializer {
                    self.walk_exprs(init, ctx, issues);
                }
            }
            Expr::MethodReference(reference) => self.walk_expr(&reference.receiver, ctx, issues),
            Expr::Switch(switch) => self.walk_switch(switch, ctx, issues),
        }
    }
}
