//! Syntax tree produced by the parser and walked by the evaluator.
//!
//! Every node keeps the token that began it. `Display` renders the
//! canonical, fully parenthesized form used to check parser structure.

use std::fmt;
use std::sync::Arc;

use crate::token::Token;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    ExpressionStmt(ExpressionStatement),
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let(stmt) => &stmt.token.literal,
            Self::Return(stmt) => &stmt.token.literal,
            Self::ExpressionStmt(stmt) => &stmt.token.literal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Ident(Identifier),
    IntLiteral(IntegerLiteral),
    Boolean(BooleanLiteral),
    PrefixExpr(PrefixExpression),
    InfixExpr(InfixExpression),
    IfExpr(IfExpression),
    FnLiteral(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Self::Ident(e) => &e.token,
            Self::IntLiteral(e) => &e.token,
            Self::Boolean(e) => &e.token,
            Self::PrefixExpr(e) => &e.token,
            Self::InfixExpr(e) => &e.token,
            Self::IfExpr(e) => &e.token,
            Self::FnLiteral(e) => &e.token,
            Self::Call(e) => &e.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Self { token, name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefix {
    Minus,
    Bang,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Infix {
    Eq,
    Neq,
    Lt,
    Gt,
    Plus,
    Minus,
    Slash,
    Asterisk,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: Prefix,
    pub operand: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: Infix,
    pub right: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// Parameters and body are shared with every function value evaluated
/// from this literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Arc<[Identifier]>,
    pub body: Arc<BlockStatement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
    pub token: Token,
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(stmt) => write!(f, "{} {} = {};", stmt.token.literal, stmt.name, stmt.value),
            Self::Return(stmt) => match &stmt.value {
                Some(value) => write!(f, "{} {};", stmt.token.literal, value),
                None => write!(f, "{} ;", stmt.token.literal),
            },
            Self::ExpressionStmt(stmt) => write!(f, "{}", stmt.expression),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minus => "-",
            Self::Bang => "!",
        })
    }
}

impl fmt::Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Asterisk => "*",
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(ident) => write!(f, "{ident}"),
            Self::IntLiteral(lit) => f.write_str(&lit.token.literal),
            Self::Boolean(lit) => f.write_str(&lit.token.literal),
            Self::PrefixExpr(expr) => write!(f, "({}{})", expr.operator, expr.operand),
            Self::InfixExpr(expr) => {
                write!(f, "({} {} {})", expr.left, expr.operator, expr.right)
            }
            Self::IfExpr(expr) => {
                write!(f, "if{} {}", expr.condition, expr.consequence)?;
                if let Some(alternative) = &expr.alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Self::FnLiteral(lit) => write!(
                f,
                "{}({}) {}",
                lit.token.literal,
                join(lit.parameters.iter()),
                lit.body
            ),
            Self::Call(call) => write!(f, "{}({})", call.callee, join(call.arguments.iter())),
        }
    }
}

pub(crate) fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
