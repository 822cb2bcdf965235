use std::sync::Arc;

use tracing::trace;

use crate::ast::{
    BlockStatement, BooleanLiteral, CallExpression, Expression, ExpressionStatement,
    FunctionLiteral, Identifier, IfExpression, Infix, InfixExpression, IntegerLiteral,
    LetStatement, Prefix, PrefixExpression, Program, ReturnStatement, Statement,
};
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Anything that can feed tokens to the parser.
///
/// Exhausted sources must keep answering with an `Eof` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<I: Iterator<Item = Token>> TokenSource for I {
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(Token::eof)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -X or !X
    Call,        // myFunction(X)
}

impl Precedence {
    /// Binding power of `kind` in infix position.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::Neq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Self::Product,
            TokenKind::Lparen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

pub struct Parser<T: TokenSource = Lexer> {
    tokens: T,
    curr_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
    block_depth: usize,
}

impl Parser<Lexer> {
    pub fn from_source(input: &str) -> Self {
        Self::new(Lexer::new(input))
    }
}

impl<T: TokenSource> Parser<T> {
    pub fn new(tokens: T) -> Self {
        let mut parser = Parser {
            tokens,
            curr_token: Token::eof(),
            peek_token: Token::eof(),
            errors: vec![],
            block_depth: 0,
        };

        parser.next_token();
        parser.next_token();

        parser
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn next_token(&mut self) {
        self.curr_token = std::mem::replace(&mut self.peek_token, self.tokens.next_token());
    }

    /// Parses until end of input. Statements that fail are reported through
    /// [`Parser::errors`] and left out of the program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.curr_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => self.synchronize(),
            }

            self.next_token();
        }

        program
    }

    // Skips the rest of a broken statement, stepping over balanced braces.
    // Stops on its `;`, just before a `let` or `return` that starts the next
    // statement, or inside a block at (or just before) the `}` that closes it.
    fn synchronize(&mut self) {
        let mut depth = 0usize;

        loop {
            match self.curr_token.kind {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::Rbrace if depth == 0 && self.block_depth > 0 => return,
                TokenKind::Lbrace => depth += 1,
                TokenKind::Rbrace => depth = depth.saturating_sub(1),
                _ => {}
            }

            if depth == 0
                && (self.peek_token_is(TokenKind::Let)
                    || self.peek_token_is(TokenKind::Return)
                    || (self.block_depth > 0 && self.peek_token_is(TokenKind::Rbrace)))
            {
                return;
            }

            self.next_token();
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        trace!(token = %self.curr_token.literal, "parse_let_statement");
        let token = self.curr_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.curr_token.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        trace!(token = %self.curr_token.literal, "parse_return_statement");
        let token = self.curr_token.clone();

        let value = if self.peek_token_is(TokenKind::Semicolon)
            || self.peek_token_is(TokenKind::Rbrace)
            || self.peek_token_is(TokenKind::Eof)
        {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        trace!(token = %self.curr_token.literal, "parse_expression_statement");
        let token = self.curr_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::ExpressionStmt(ExpressionStatement { token, expression }))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, ?precedence, "parse_expression");
        let mut left = self.parse_prefix()?;

        // Strict `<`: an operator of equal precedence ends this operand,
        // which makes every binary operator left-associative.
        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.curr_token.kind {
            TokenKind::Ident => Some(Expression::Ident(Identifier::new(self.curr_token.clone()))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(Expression::Boolean(BooleanLiteral {
                token: self.curr_token.clone(),
                value: self.curr_token_is(TokenKind::True),
            })),
            TokenKind::Bang => self.parse_prefix_expression(Prefix::Bang),
            TokenKind::Minus => self.parse_prefix_expression(Prefix::Minus),
            TokenKind::Lparen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.errors.push(ParseError::NoPrefixParseFn(kind));
                None
            }
        }
    }

    // Only reached for kinds whose precedence is above `Lowest`.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        let operator = match self.curr_token.kind {
            TokenKind::Lparen => return self.parse_call_expression(left),
            TokenKind::Eq => Infix::Eq,
            TokenKind::Neq => Infix::Neq,
            TokenKind::Lt => Infix::Lt,
            TokenKind::Gt => Infix::Gt,
            TokenKind::Plus => Infix::Plus,
            TokenKind::Minus => Infix::Minus,
            TokenKind::Slash => Infix::Slash,
            TokenKind::Asterisk => Infix::Asterisk,
            _ => return Some(left),
        };

        self.parse_infix_expression(operator, left)
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, "parse_integer_literal");
        match self.curr_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntLiteral(IntegerLiteral {
                token: self.curr_token.clone(),
                value,
            })),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidInteger(self.curr_token.literal.clone()));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self, operator: Prefix) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, "parse_prefix_expression");
        let token = self.curr_token.clone();

        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::PrefixExpr(PrefixExpression {
            token,
            operator,
            operand: Box::new(operand),
        }))
    }

    fn parse_infix_expression(&mut self, operator: Infix, left: Expression) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, "parse_infix_expression");
        let token = self.curr_token.clone();
        let precedence = self.curr_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::InfixExpr(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Rparen)?;

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, "parse_if_expression");
        let token = self.curr_token.clone();

        self.expect_peek(TokenKind::Lparen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::Rparen)?;
        self.expect_peek(TokenKind::Lbrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::Lbrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::IfExpr(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    // Entered with `{` as the current token, leaves `}` (or `Eof`) current.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.curr_token.clone();
        let mut statements = vec![];

        self.block_depth += 1;
        self.next_token();

        while !self.curr_token_is(TokenKind::Rbrace) && !self.curr_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => {
                    self.synchronize();
                    if self.curr_token_is(TokenKind::Rbrace) {
                        break;
                    }
                }
            }

            self.next_token();
        }

        self.block_depth -= 1;
        BlockStatement { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, "parse_function_literal");
        let token = self.curr_token.clone();

        self.expect_peek(TokenKind::Lparen)?;
        let parameters = self.parse_list(TokenKind::Rparen, Self::parse_parameter)?;

        self.expect_peek(TokenKind::Lbrace)?;
        let body = self.parse_block_statement();

        Some(Expression::FnLiteral(FunctionLiteral {
            token,
            parameters: parameters.into(),
            body: Arc::new(body),
        }))
    }

    fn parse_parameter(&mut self) -> Option<Identifier> {
        if self.curr_token_is(TokenKind::Ident) {
            Some(Identifier::new(self.curr_token.clone()))
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                got: self.curr_token.kind,
            });
            None
        }
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        trace!(token = %self.curr_token.literal, "parse_call_expression");
        let token = self.curr_token.clone();
        let arguments = self.parse_list(TokenKind::Rparen, |p| {
            p.parse_expression(Precedence::Lowest)
        })?;

        Some(Expression::Call(CallExpression {
            token,
            callee: Box::new(callee),
            arguments,
        }))
    }

    /// Comma separated items up to `end`, entered with the opening token current.
    fn parse_list<I>(
        &mut self,
        end: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Option<I>,
    ) -> Option<Vec<I>> {
        let mut items = vec![];

        if self.peek_token_is(end) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(end)?;

        Some(items)
    }

    fn curr_token_is(&self, kind: TokenKind) -> bool {
        self.curr_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances when the lookahead is `kind`, otherwise records the mismatch.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected: kind,
                got: self.peek_token.kind,
            });
            None
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn curr_precedence(&self) -> Precedence {
        Precedence::of(self.curr_token.kind)
    }
}

/// Parses `input` in one pass, returning the program and every syntax error found.
pub fn parse(input: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::from_source(input);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_ok(input: &str) -> Program {
        let (program, errors) = parse(input);
        assert!(errors.is_empty(), "parser errors for {input:?}: {errors:?}");
        program
    }

    fn single_expression(input: &str) -> Expression {
        let program = parse_ok(input);
        assert_eq!(program.len(), 1, "program: {program}");
        match &program.statements[0] {
            Statement::ExpressionStmt(stmt) => stmt.expression.clone(),
            other => panic!("not an expression statement: {other:?}"),
        }
    }

    fn error_messages(input: &str) -> Vec<String> {
        let (_, errors) = parse(input);
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_let_statements() {
        let input = "let x = 5;
            let y = 10;
            let foobar = 838383;";

        let program = parse_ok(input);

        if program.len() != 3 {
            panic!("program statemens doesn't contain 3 elements, got {}", program.len());
        }

        let expected = [("x", "5"), ("y", "10"), ("foobar", "838383")];

        for (i, (ident, value)) in expected.iter().enumerate() {
            let statement = &program.statements[i];
            assert_eq!(statement.token_literal(), "let");
            match statement {
                Statement::Let(stmt) => {
                    assert_eq!(stmt.name.name, *ident);
                    assert_eq!(stmt.value.to_string(), *value);
                }
                other => panic!("not a let statement: {other:?}"),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let input = "return 5;
            return 10;
            return 993322;
            return;";

        let program = parse_ok(input);

        assert_eq!(program.len(), 4);
        for statement in &program.statements[..3] {
            match statement {
                Statement::Return(stmt) => assert!(stmt.value.is_some()),
                other => panic!("not a return statement: {other:?}"),
            }
        }
        assert_eq!(program.statements[3].to_string(), "return ;");
    }

    #[test]
    fn test_identifier_expression() {
        match single_expression("foobar;") {
            Expression::Ident(ident) => {
                assert_eq!(ident.name, "foobar");
                assert_eq!(ident.token.literal, "foobar");
            }
            other => panic!("not an identifier: {other:?}"),
        }
    }

    #[test]
    fn test_integer_literal_expression() {
        match single_expression("5;") {
            Expression::IntLiteral(lit) => {
                assert_eq!(lit.value, 5);
                assert_eq!(lit.token.literal, "5");
            }
            other => panic!("not an integer literal: {other:?}"),
        }
    }

    #[test]
    fn test_boolean_expression() {
        for (input, expected) in [("true;", true), ("false;", false)] {
            match single_expression(input) {
                Expression::Boolean(lit) => assert_eq!(lit.value, expected),
                other => panic!("not a boolean: {other:?}"),
            }
        }
    }

    #[test]
    fn test_prefix_expressions() {
        let tests = vec![("!5;", Prefix::Bang, "5"), ("-15", Prefix::Minus, "15")];

        for (input, operator, operand) in tests {
            match single_expression(input) {
                Expression::PrefixExpr(expr) => {
                    assert_eq!(expr.operator, operator);
                    assert_eq!(expr.operand.to_string(), operand);
                }
                other => panic!("not a prefix expression: {other:?}"),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let tests = vec![
            ("5 + 5;", Infix::Plus),
            ("5 - 5;", Infix::Minus),
            ("5 * 5;", Infix::Asterisk),
            ("5 / 5;", Infix::Slash),
            ("5 > 5;", Infix::Gt),
            ("5 < 5;", Infix::Lt),
            ("5 == 5;", Infix::Eq),
            ("5 != 5;", Infix::Neq),
        ];

        for (input, operator) in tests {
            match single_expression(input) {
                Expression::InfixExpr(expr) => {
                    assert_eq!(expr.operator, operator);
                    assert_eq!(expr.left.to_string(), "5");
                    assert_eq!(expr.right.to_string(), "5");
                }
                other => panic!("not an infix expression: {other:?}"),
            }
        }
    }

    #[test]
    fn test_operator_precedence_parsing() {
        let tests = vec![
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c", "(a + (b * c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
        ];

        for (input, expected) in tests {
            let program = parse_ok(input);

            assert_eq!(program.to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_if_expression() {
        match single_expression("if (x < y) { x }") {
            Expression::IfExpr(expr) => {
                assert_eq!(expr.condition.to_string(), "(x < y)");
                assert_eq!(expr.consequence.statements.len(), 1);
                assert_eq!(expr.consequence.to_string(), "x");
                assert!(expr.alternative.is_none());
            }
            other => panic!("not an if expression: {other:?}"),
        }
    }

    #[test]
    fn test_if_else_expression() {
        let expr = single_expression("if (x < y) { x } else { y }");

        match &expr {
            Expression::IfExpr(if_expr) => {
                let alternative = if_expr.alternative.as_ref().expect("alternative");
                assert_eq!(alternative.to_string(), "y");
            }
            other => panic!("not an if expression: {other:?}"),
        }
        assert_eq!(expr.to_string(), "if(x < y) xelse y");
    }

    #[test]
    fn test_function_literal_parsing() {
        match single_expression("fn(x, y) { x + y; }") {
            Expression::FnLiteral(lit) => {
                let names: Vec<&str> = lit.parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["x", "y"]);
                assert_eq!(lit.body.to_string(), "(x + y)");
            }
            other => panic!("not a function literal: {other:?}"),
        }
    }

    #[test]
    fn test_function_parameter_parsing() {
        let tests: Vec<(&str, Vec<&str>)> = vec![
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];

        for (input, expected) in tests {
            match single_expression(input) {
                Expression::FnLiteral(lit) => {
                    let names: Vec<&str> =
                        lit.parameters.iter().map(|p| p.name.as_str()).collect();
                    assert_eq!(names, expected);
                }
                other => panic!("not a function literal: {other:?}"),
            }
        }
    }

    #[test]
    fn test_call_expression_parsing() {
        match single_expression("add(1, 2 * 3, 4 + 5);") {
            Expression::Call(call) => {
                assert_eq!(call.callee.to_string(), "add");
                let args: Vec<String> = call.arguments.iter().map(ToString::to_string).collect();
                assert_eq!(args, vec!["1", "(2 * 3)", "(4 + 5)"]);
            }
            other => panic!("not a call expression: {other:?}"),
        }
    }

    #[test]
    fn test_let_errors_accumulate() {
        let (program, errors) = parse("let = 5; let y 10;");

        assert_eq!(
            errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec![
                "expected next token to be IDENT, got = instead",
                "expected next token to be =, got INT instead",
            ]
        );
        assert!(program.is_empty());
    }

    #[test]
    fn test_let_errors_accumulate_without_semicolons() {
        assert_eq!(
            error_messages("let = 5\nlet y 10"),
            vec![
                "expected next token to be IDENT, got = instead",
                "expected next token to be =, got INT instead",
            ]
        );

        let (program, errors) = parse("let = 5\nlet y = 10;\ny");
        assert_eq!(errors.len(), 1);
        assert_eq!(program.to_string(), "let y = 10;y");

        let (program, errors) = parse("fn() { let = 1\nreturn 2 }");
        assert_eq!(errors.len(), 1);
        assert_eq!(program.to_string(), "fn() return 2;");
    }

    #[test]
    fn test_errors_keep_valid_statements() {
        let (program, errors) = parse("let x = 1; let = 2; x + 3;");

        assert_eq!(errors.len(), 1);
        assert_eq!(program.to_string(), "let x = 1;(x + 3)");
    }

    #[test]
    fn test_no_prefix_parse_function() {
        assert_eq!(
            error_messages("let x = ;"),
            vec!["no prefix parse function for ; found"]
        );
        assert_eq!(error_messages("+5"), vec!["no prefix parse function for + found"]);
        assert_eq!(
            error_messages("5 @"),
            vec!["no prefix parse function for ILLEGAL found"]
        );
    }

    #[test]
    fn test_missing_closing_tokens() {
        assert_eq!(
            error_messages("(1 + 2"),
            vec!["expected next token to be ), got EOF instead"]
        );
        assert_eq!(
            error_messages("if (x { 1 }"),
            vec!["expected next token to be ), got { instead"]
        );
        assert_eq!(
            error_messages("fn(x, 1) { x }"),
            vec!["expected next token to be IDENT, got INT instead"]
        );
    }

    #[test]
    fn test_error_inside_block_is_recovered() {
        let (program, errors) = parse("if (true) { let = 1; 5 }; 7");

        assert_eq!(errors.len(), 1);
        assert_eq!(program.to_string(), "if true 57");
    }

    #[test]
    fn test_error_at_block_end_keeps_block() {
        let (program, errors) = parse("if (x) { 1 + } 5");

        assert_eq!(errors.len(), 1);
        assert_eq!(program.to_string(), "if x 5");
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(
            error_messages("99999999999999999999"),
            vec![r#"could not parse "99999999999999999999" as integer"#]
        );
    }

    #[test]
    fn test_parse_from_token_vector() {
        let tokens = vec![
            Token::new(TokenKind::Int, "1"),
            Token::new(TokenKind::Plus, "+"),
            Token::new(TokenKind::Int, "2"),
        ];

        let mut parser = Parser::new(tokens.into_iter());
        let program = parser.parse_program();

        assert!(parser.errors().is_empty());
        assert_eq!(program.to_string(), "(1 + 2)");
    }

    #[test]
    fn test_token_source_stops_at_eof() {
        let tokens = vec![
            Token::new(TokenKind::Int, "1"),
            Token::eof(),
            Token::new(TokenKind::Int, "2"),
        ];

        let mut parser = Parser::new(tokens.into_iter());
        let program = parser.parse_program();

        assert!(parser.errors().is_empty());
        assert_eq!(program.to_string(), "1");
    }

    #[test]
    fn test_malformed_input_reports_errors() {
        let inputs = [
            "fn(",
            "if",
            "let x = fn(a,",
            "}}}",
            "(((",
            "a(,)",
            "let",
            "return (",
            "fn(x) { if (",
            "1 + * 2",
            "let x 5 let y",
        ];

        for input in inputs {
            let (_, errors) = parse(input);
            assert!(!errors.is_empty(), "no errors for {input:?}");
        }
    }
}
