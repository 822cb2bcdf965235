use crate::token::{self, Token, TokenKind};

#[derive(Clone, Debug)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,      // current position in input (point to current char)
    read_position: usize, // current reading position in input (after current char)
    ch: Option<char>,     // current char under examination
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut l = Lexer {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
        };

        l.read_char();
        l
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    /// Returns the next token, or `Eof` on every call once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            Some('=') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            Some('!') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Neq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            Some(';') => Token::new(TokenKind::Semicolon, ";"),
            Some('(') => Token::new(TokenKind::Lparen, "("),
            Some(')') => Token::new(TokenKind::Rparen, ")"),
            Some(',') => Token::new(TokenKind::Comma, ","),
            Some('+') => Token::new(TokenKind::Plus, "+"),
            Some('{') => Token::new(TokenKind::Lbrace, "{"),
            Some('}') => Token::new(TokenKind::Rbrace, "}"),
            Some('-') => Token::new(TokenKind::Minus, "-"),
            Some('*') => Token::new(TokenKind::Asterisk, "*"),
            Some('/') => Token::new(TokenKind::Slash, "/"),
            Some('<') => Token::new(TokenKind::Lt, "<"),
            Some('>') => Token::new(TokenKind::Gt, ">"),
            None => return Token::eof(),
            Some(c) => {
                if is_letter(Some(c)) {
                    let ident = self.read_identifier();
                    Token::new(token::lookup_ident(&ident), ident)
                } else if is_digit(Some(c)) {
                    Token::new(TokenKind::Int, self.read_number())
                } else {
                    Token::new(TokenKind::Illegal, c.to_string())
                }
            }
        };

        self.read_char();
        token
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.peek_char()) {
            self.read_char();
        }
        self.input[position..=self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char()
        }
    }

    // Range checking happens in the parser so overflow surfaces as a diagnostic.
    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_digit(self.peek_char()) {
            self.read_char();
        }
        self.input[position..=self.position].iter().collect()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

fn is_digit(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_digit())
}
