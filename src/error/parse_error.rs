use crate::token::TokenKind;

/// A syntax error. The `Display` text is stable and matched by tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lookahead token was not the one the grammar requires here.
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },

    /// Nothing can start an expression with this token kind.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// Integer literal does not fit in 64 bits.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}
