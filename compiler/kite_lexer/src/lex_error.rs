//! Typed view of scanning errors.
//!
//! The scanner itself never fails: bad input is encoded in-band as
//! [`TokenKind::Illegal`](crate::TokenKind::Illegal). Callers that report
//! diagnostics convert those tokens with [`Token::error`](crate::Token::error).

use thiserror::Error;

use crate::Position;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A byte that matches no lexical rule.
    #[error("{pos}: illegal character '{}'", .byte.escape_ascii())]
    IllegalCharacter { byte: u8, pos: Position },
}

impl LexError {
    /// Where the error occurred.
    pub fn pos(&self) -> Position {
        match self {
            LexError::IllegalCharacter { pos, .. } => *pos,
        }
    }
}
