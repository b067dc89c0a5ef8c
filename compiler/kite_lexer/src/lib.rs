//! Lexical scanner for the Kite scripting language.
//!
//! Converts raw source bytes into [`Token`]s, one per call to
//! [`Scanner::next_token`]. The scanner borrows its input for its whole
//! lifetime; identifier and string payloads are sub-slices of that input, so
//! producing a token never allocates.
//!
//! ```
//! use kite_lexer::{Keyword, Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new(b"let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Keyword(Keyword::Let));
//! assert_eq!(scanner.next_token().kind, TokenKind::Identifier(b"five"));
//! ```
//!
//! # Errors
//!
//! Scanning is total. Bytes that match no lexical rule become
//! [`TokenKind::Illegal`] tokens and scanning continues after them. Callers
//! that want a typed error use [`Token::error`].

mod cursor;
mod keywords;
mod lex_error;
mod position;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use keywords::Keyword;
pub use lex_error::LexError;
pub use position::Position;
pub use scanner::{tokenize, Scanner};
pub use token::{Symbol, Token, TokenKind};
