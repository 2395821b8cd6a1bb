//! Resolved Java syntax tree
//!
//! The tree is produced by a host front-end (lexing, parsing and symbol
//! resolution happen elsewhere) and handed to the checks read-only. Node
//! shapes are a closed set of enums so every consumer matches exhaustively.
//!
//! Trees deserialize from JSON; see [`SourceUnit`] for the file envelope.

mod types;
mod unit;

pub use types::{TypeHierarchy, TypeRef, TypeTable, JAVA_LANG_OBJECT};
pub use unit::{LoadError, SourceUnit};

use serde::{Deserialize, Serialize};

/// Source position of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
    #[serde(default)]
    pub start_byte: usize,
    #[serde(default)]
    pub end_byte: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            start_byte: 0,
            end_byte: 0,
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Root of one source file's tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    pub types: Vec<ClassDecl>,
}

/// Class, interface, enum or record declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: TypeRef,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Method(MethodDecl),
    Field(FieldDecl),
    Class(ClassDecl),
    /// Instance or `static` initializer block
    Initializer(InitializerDecl),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerDecl {
    #[serde(default, rename = "static")]
    pub is_static: bool,
    pub body: Block,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub initializer: Option<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Type declaring the method (an anonymous class's resolved type included)
    pub owner: TypeRef,
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// `None` for abstract and native methods
    #[serde(default)]
    pub body: Option<Block>,
    #[serde(default)]
    pub span: Span,
}

/// Formal parameter of a method or lambda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Declared or inferred type, `None` when unresolved
    #[serde(default)]
    pub ty: Option<TypeRef>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Option<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub statements: Vec<Stmt>,
    #[serde(default)]
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self {
            statements,
            span: Span::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    Block(Block),
    Return(ReturnStmt),
    Expr(ExprStmt),
    If(IfStmt),
    LocalVar(LocalVarStmt),
    /// Class declared inside a method body
    LocalClass(ClassDecl),
    While(WhileStmt),
    DoWhile(WhileStmt),
    For(ForStmt),
    ForEach(ForEachStmt),
    Try(TryStmt),
    Throw(ExprStmt),
    Switch(SwitchBlock),
    Synchronized(SynchronizedStmt),
    Labeled(LabeledStmt),
    Break(JumpStmt),
    Continue(JumpStmt),
    /// `yield` inside a switch expression
    Yield(ExprStmt),
    Assert(AssertStmt),
    Empty {
        #[serde(default)]
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub expr: Option<Expr>,
    #[serde(default)]
    pub span: Span,
}

/// Expression statement; also the shape of `throw` and `yield`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Expr,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    #[serde(default)]
    pub else_branch: Option<Box<Stmt>>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVarStmt {
    pub name: String,
    #[serde(default)]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub initializer: Option<Expr>,
    #[serde(default)]
    pub span: Span,
}

/// `while (cond) body` and `do body while (cond);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub init: Vec<Stmt>,
    /// `None` for `for (;;)`
    #[serde(default)]
    pub condition: Option<Expr>,
    #[serde(default)]
    pub update: Vec<Expr>,
    pub body: Box<Stmt>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForEachStmt {
    pub var: Parameter,
    pub iterable: Expr,
    pub body: Box<Stmt>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStmt {
    /// try-with-resources declarations, in order
    #[serde(default)]
    pub resources: Vec<Stmt>,
    pub block: Block,
    #[serde(default)]
    pub catches: Vec<CatchClause>,
    #[serde(default)]
    pub finally: Option<Block>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    /// Caught exception; multi-catch resolves to the union's lub
    pub param: Parameter,
    pub body: Block,
    #[serde(default)]
    pub span: Span,
}

/// Selector and cases of a `switch` statement or expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchBlock {
    pub selector: Box<Expr>,
    #[serde(default)]
    pub cases: Vec<SwitchCase>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// Empty for `default`
    #[serde(default)]
    pub labels: Vec<Expr>,
    /// `when` guard of a pattern label
    #[serde(default)]
    pub guard: Option<Expr>,
    /// Statements of a `case X:` group, or the single arrow-case body
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynchronizedStmt {
    pub lock: Expr,
    pub body: Block,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    pub label: String,
    pub body: Box<Stmt>,
    #[serde(default)]
    pub span: Span,
}

/// `break` / `continue` with an optional label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpStmt {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertStmt {
    pub condition: Expr,
    #[serde(default)]
    pub detail: Option<Expr>,
    #[serde(default)]
    pub span: Span,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Identifier(Identifier),
    Literal(Literal),
    Parenthesized(ParenthesizedExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    InstanceOf(InstanceOfExpr),
    Cast(CastExpr),
    MemberSelect(MemberSelectExpr),
    ArrayAccess(ArrayAccessExpr),
    Call(CallExpr),
    New(NewExpr),
    Lambda(LambdaExpr),
    /// `=` and compound assignment
    Assignment(AssignmentExpr),
    /// `cond ? a : b`
    Conditional(ConditionalExpr),
    /// `new T[n]`, `new T[] {..}` and bare array initializers
    NewArray(NewArrayExpr),
    /// `Type::name`, `expr::name`, `Type::new`
    MethodReference(MethodReferenceExpr),
    /// `switch` expression
    Switch(SwitchBlock),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(expr) => expr.span,
            Expr::Literal(expr) => expr.span,
            Expr::Parenthesized(expr) => expr.span,
            Expr::Binary(expr) => expr.span,
            Expr::Unary(expr) => expr.span,
            Expr::InstanceOf(expr) => expr.span,
            Expr::Cast(expr) => expr.span,
            Expr::MemberSelect(expr) => expr.span,
            Expr::ArrayAccess(expr) => expr.span,
            Expr::Call(expr) => expr.span,
            Expr::New(expr) => expr.span,
            Expr::Lambda(expr) => expr.span,
            Expr::Assignment(expr) => expr.span,
            Expr::Conditional(expr) => expr.span,
            Expr::NewArray(expr) => expr.span,
            Expr::MethodReference(expr) => expr.span,
            Expr::Switch(expr) => expr.span,
        }
    }

    fn span_mut(&mut self) -> &mut Span {
        match self {
            Expr::Identifier(expr) => &mut expr.span,
            Expr::Literal(expr) => &mut expr.span,
            Expr::Parenthesized(expr) => &mut expr.span,
            Expr::Binary(expr) => &mut expr.span,
            Expr::Unary(expr) => &mut expr.span,
            Expr::InstanceOf(expr) => &mut expr.span,
            Expr::Cast(expr) => &mut expr.span,
            Expr::MemberSelect(expr) => &mut expr.span,
            Expr::ArrayAccess(expr) => &mut expr.span,
            Expr::Call(expr) => &mut expr.span,
            Expr::New(expr) => &mut expr.span,
            Expr::Lambda(expr) => &mut expr.span,
            Expr::Assignment(expr) => &mut expr.span,
            Expr::Conditional(expr) => &mut expr.span,
            Expr::NewArray(expr) => &mut expr.span,
            Expr::MethodReference(expr) => &mut expr.span,
            Expr::Switch(expr) => &mut expr.span,
        }
    }

    /// Builder-style span assignment, used when constructing trees by hand
    pub fn at(mut self, span: Span) -> Self {
        *self.span_mut() = span;
        self
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier {
            name: name.into(),
            span: Span::default(),
        })
    }

    pub fn null() -> Self {
        Expr::Literal(Literal::new(LiteralKind::Null, "null"))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Literal(Literal::new(
            LiteralKind::Boolean,
            if value { "true" } else { "false" },
        ))
    }

    pub fn int(value: i64) -> Self {
        Expr::Literal(Literal::new(LiteralKind::Int, value.to_string()))
    }

    pub fn parens(inner: Expr) -> Self {
        Expr::Parenthesized(ParenthesizedExpr {
            inner: Box::new(inner),
            span: Span::default(),
        })
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span: Span::default(),
        })
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op: UnaryOp::Not,
            operand: Box::new(operand),
            span: Span::default(),
        })
    }

    pub fn instance_of(operand: Expr, tested: TypeRef) -> Self {
        Expr::InstanceOf(InstanceOfExpr {
            operand: Box::new(operand),
            tested,
            span: Span::default(),
        })
    }

    pub fn select(receiver: Expr, name: impl Into<String>) -> Self {
        Expr::MemberSelect(MemberSelectExpr {
            receiver: Box::new(receiver),
            name: name.into(),
            span: Span::default(),
        })
    }

    pub fn call(target: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            target: Box::new(target),
            args,
            span: Span::default(),
        })
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assignment(AssignmentExpr {
            op: AssignOp::Assign,
            target: Box::new(target),
            value: Box::new(value),
            span: Span::default(),
        })
    }

    pub fn conditional(condition: Expr, then_expr: Expr, else_expr: Expr) -> Self {
        Expr::Conditional(ConditionalExpr {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
            span: Span::default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Boolean,
    Null,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    #[serde(rename = "literal")]
    pub kind: LiteralKind,
    /// Token text as written in source
    pub value: String,
    #[serde(default)]
    pub span: Span,
}

impl Literal {
    pub fn new(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            span: Span::default(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind == LiteralKind::Null
    }

    pub fn is_true(&self) -> bool {
        self.kind == LiteralKind::Boolean && self.value == "true"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpr {
    pub inner: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Times,
    Divide,
    Remainder,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// `!`
    Not,
    Minus,
    Plus,
    /// `~`
    BitNot,
    /// `++x`
    PreIncrement,
    /// `--x`
    PreDecrement,
    /// `x++`
    PostIncrement,
    /// `x--`
    PostDecrement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceOfExpr {
    pub operand: Box<Expr>,
    pub tested: TypeRef,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastExpr {
    pub ty: TypeRef,
    pub expr: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSelectExpr {
    pub receiver: Box<Expr>,
    pub name: String,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayAccessExpr {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

/// Method invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub target: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    #[serde(default)]
    pub span: Span,
}

/// Instance creation, optionally with an anonymous class body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpr {
    pub ty: TypeRef,
    #[serde(default)]
    pub args: Vec<Expr>,
    #[serde(default)]
    pub class_body: Option<Vec<Member>>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpr {
    #[serde(default)]
    pub params: Vec<Parameter>,
    pub body: LambdaBody,
    /// Functional interface the lambda was resolved against
    #[serde(default)]
    pub inferred_type: Option<TypeRef>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LambdaBody {
    Block(Block),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOp {
    /// `=`
    #[default]
    Assign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    RemainderAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    UnsignedShiftRightAssign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpr {
    #[serde(default)]
    pub op: AssignOp,
    pub target: Box<Expr>,
    pub value: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArrayExpr {
    /// Element type; `None` for a bare `{..}` initializer
    #[serde(default)]
    pub element_type: Option<TypeRef>,
    /// Explicit dimension expressions, outermost first
    #[serde(default)]
    pub dimensions: Vec<Expr>,
    #[serde(default)]
    pub initializer: Option<Vec<Expr>>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodReferenceExpr {
    /// Type name or receiver expression left of `::`
    pub receiver: Box<Expr>,
    /// Method name, or `new` for constructor references
    pub name: String,
    #[serde(default)]
    pub inferred_type: Option<TypeRef>,
    #[serde(default)]
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_span_builder() {
        let expr = Expr::ident("x").at(Span::new(3, 7));
        assert_eq!(expr.span(), Span::new(3, 7));
    }

    #[test]
    fn test_literal_predicates() {
        assert!(Literal::new(LiteralKind::Boolean, "true").is_true());
        assert!(!Literal::new(LiteralKind::Boolean, "false").is_true());
        assert!(!Literal::new(LiteralKind::String, "true").is_true());
        assert!(Literal::new(LiteralKind::Null, "null").is_null());
    }

    #[test]
    fn test_deserialize_null_check() {
        let json = r#"{
            "kind": "binary",
            "op": "not_equal",
            "left": {"kind": "identifier", "name": "x"},
            "right": {"kind": "literal", "literal": "null", "value": "null"},
            "span": {"line": 4, "column": 9}
        }"#;
        let expr: Expr = serde_json::from_str(json).unwrap();
        assert_eq!(
            expr,
            Expr::binary(BinaryOp::NotEqual, Expr::ident("x"), Expr::null()).at(Span::new(4, 9))
        );
    }

    #[test]
    fn test_deserialize_lambda_bodies() {
        let json = r#"{
            "kind": "lambda",
            "params": [{"name": "h", "ty": "java.lang.String"}],
            "body": {"expr": {"kind": "literal", "literal": "boolean", "value": "true"}}
        }"#;
        let expr: Expr = serde_json::from_str(json).unwrap();
        match expr {
            Expr::Lambda(lambda) => {
                assert_eq!(lambda.params.len(), 1);
                assert!(lambda.inferred_type.is_none());
                assert!(matches!(lambda.body, LambdaBody::Expr(_)));
            }
            other => panic!("expected lambda, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_statements() {
        let json = r#"{
            "statements": [
                {"kind": "block", "statements": [{"kind": "empty"}]},
                {"kind": "return", "expr": {"kind": "identifier", "name": "ok"}}
            ]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.statements.len(), 2);
        assert!(matches!(block.statements[1], Stmt::Return(_)));
    }

    #[test]
    fn test_deserialize_loops_and_jumps() {
        let json = r#"{
            "statements": [
                {"kind": "while",
                 "condition": {"kind": "identifier", "name": "running"},
                 "body": {"kind": "block", "statements": [{"kind": "break"}]}},
                {"kind": "do_while",
                 "condition": {"kind": "literal", "literal": "boolean", "value": "false"},
                 "body": {"kind": "continue", "label": "outer"}},
                {"kind": "for",
                 "init": [{"kind": "local_var", "name": "i", "ty": "int"}],
                 "update": [{"kind": "unary", "op": "post_increment",
                             "operand": {"kind": "identifier", "name": "i"}}],
                 "body": {"kind": "empty"}},
                {"kind": "for_each",
                 "var": {"name": "s", "ty": "java.lang.String"},
                 "iterable": {"kind": "identifier", "name": "names"},
                 "body": {"kind": "empty"}}
            ]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(matches!(block.statements[0], Stmt::While(_)));
        assert!(matches!(&block.statements[1], Stmt::DoWhile(stmt)
            if matches!(stmt.body.as_ref(), Stmt::Continue(jump) if jump.label.as_deref() == Some("outer"))));
        assert!(matches!(&block.statements[2], Stmt::For(stmt) if stmt.condition.is_none()));
        assert!(matches!(block.statements[3], Stmt::ForEach(_)));
    }

    #[test]
    fn test_deserialize_try_switch_and_throw() {
        let json = r#"{
            "statements": [
                {"kind": "try",
                 "block": {"statements": [{"kind": "throw",
                     "expr": {"kind": "new", "ty": "java.lang.IllegalStateException"}}]},
                 "catches": [{"param": {"name": "e", "ty": "java.lang.RuntimeException"},
                              "body": {"statements": []}}],
                 "finally": {"statements": []}},
                {"kind": "switch",
                 "selector": {"kind": "identifier", "name": "mode"},
                 "cases": [{"labels": [{"kind": "literal", "literal": "int", "value": "1"}],
                            "body": [{"kind": "break"}]},
                           {"body": [{"kind": "return"}]}]},
                {"kind": "synchronized",
                 "lock": {"kind": "identifier", "name": "this"},
                 "body": {"statements": []}}
            ]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        match &block.statements[0] {
            Stmt::Try(stmt) => {
                assert_eq!(stmt.catches.len(), 1);
                assert!(stmt.finally.is_some());
                assert!(matches!(stmt.block.statements[0], Stmt::Throw(_)));
            }
            other => panic!("expected try, got {:?}", other),
        }
        assert!(matches!(&block.statements[1], Stmt::Switch(switch)
            if switch.cases.len() == 2 && switch.cases[1].labels.is_empty()));
        assert!(matches!(block.statements[2], Stmt::Synchronized(_)));
    }

    #[test]
    fn test_deserialize_assignment_and_conditional() {
        let json = r#"{
            "kind": "assignment",
            "target": {"kind": "identifier", "name": "ok"},
            "value": {"kind": "conditional",
                      "condition": {"kind": "identifier", "name": "c"},
                      "then_expr": {"kind": "literal", "literal": "boolean", "value": "true"},
                      "else_expr": {"kind": "literal", "literal": "boolean", "value": "false"}}
        }"#;
        let expr: Expr = serde_json::from_str(json).unwrap();
        assert_eq!(
            expr,
            Expr::assign(
                Expr::ident("ok"),
                Expr::conditional(Expr::ident("c"), Expr::boolean(true), Expr::boolean(false)),
            )
        );
    }

    #[test]
    fn test_deserialize_arrays_and_method_references() {
        let array: Expr = serde_json::from_str(
            r#"{"kind": "new_array", "element_type": "int",
                "dimensions": [{"kind": "literal", "literal": "int", "value": "4"}]}"#,
        )
        .unwrap();
        assert!(matches!(array, Expr::NewArray(ref a) if a.dimensions.len() == 1 && a.initializer.is_none()));

        let reference: Expr = serde_json::from_str(
            r#"{"kind": "method_reference",
                "receiver": {"kind": "identifier", "name": "String"}, "name": "valueOf"}"#,
        )
        .unwrap();
        assert!(matches!(reference, Expr::MethodReference(ref r) if r.name == "valueOf"));
    }

    #[test]
    fn test_deserialize_static_initializer() {
        let member: Member = serde_json::from_str(
            r#"{"kind": "initializer", "static": true, "body": {"statements": []}}"#,
        )
        .unwrap();
        assert!(matches!(member, Member::Initializer(ref init) if init.is_static));
    }
}
