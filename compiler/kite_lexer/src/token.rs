//! Token model.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Position`] of its first byte.
//! Payloads borrow from the scanned source.

use std::fmt;

use crate::{Keyword, LexError, Position};

/// Single-byte operators and punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `=`
    Assign,
    /// `!`
    Bang,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Symbol; 17] = [
        Symbol::Assign,
        Symbol::Bang,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Asterisk,
        Symbol::Slash,
        Symbol::Less,
        Symbol::Greater,
        Symbol::Comma,
        Symbol::Semicolon,
        Symbol::Colon,
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::LeftBrace,
        Symbol::RightBrace,
    ];

    /// The symbol spelled by `byte`, if any.
    pub const fn from_byte(byte: u8) -> Option<Symbol> {
        Some(match byte {
            b'=' => Symbol::Assign,
            b'!' => Symbol::Bang,
            b'+' => Symbol::Plus,
            b'-' => Symbol::Minus,
            b'*' => Symbol::Asterisk,
            b'/' => Symbol::Slash,
            b'<' => Symbol::Less,
            b'>' => Symbol::Greater,
            b',' => Symbol::Comma,
            b';' => Symbol::Semicolon,
            b':' => Symbol::Colon,
            b'(' => Symbol::LeftParen,
            b')' => Symbol::RightParen,
            b'[' => Symbol::LeftBracket,
            b']' => Symbol::RightBracket,
            b'{' => Symbol::LeftBrace,
            b'}' => Symbol::RightBrace,
            _ => return None,
        })
    }

    /// Source spelling of the symbol.
    pub const fn lexeme(self) -> &'static str {
        match self {
            Symbol::Assign => "=",
            Symbol::Bang => "!",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Asterisk => "*",
            Symbol::Slash => "/",
            Symbol::Less => "<",
            Symbol::Greater => ">",
            Symbol::Comma => ",",
            Symbol::Semicolon => ";",
            Symbol::Colon => ":",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
        }
    }
}

/// What a token is, plus its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind<'a> {
    /// End of input. Repeats forever once reached.
    EndOfInput,
    /// A byte that matches no lexical rule.
    Illegal(u8),
    Symbol(Symbol),
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// Bytes between the quotes, verbatim. No escape processing.
    StringLiteral(&'a [u8]),
    /// Value of a decimal digit run. Digit runs beyond `i64` wrap.
    IntegerLiteral(i64),
    /// A run of ASCII letters and underscores that is not a keyword.
    Identifier(&'a [u8]),
    Keyword(Keyword),
}

impl TokenKind<'_> {
    /// Short human-readable name of the kind, without payload.
    pub const fn display_name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "eof",
            TokenKind::Illegal(_) => "illegal",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::StringLiteral(_) => "string",
            TokenKind::IntegerLiteral(_) => "int",
            TokenKind::Identifier(_) => "ident",
            TokenKind::Keyword(_) => "keyword",
        }
    }
}

/// A classified lexeme and the position of its first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub pos: Position,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind<'a>, pos: Position) -> Self {
        Token { kind, pos }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// The error this token encodes, if it is an [`Illegal`](TokenKind::Illegal)
    /// token.
    pub fn error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Illegal(byte) => Some(LexError::IllegalCharacter {
                byte,
                pos: self.pos,
            }),
            _ => None,
        }
    }
}

/// Debug rendering used by the REPL and the `lex` command.
///
/// Data-carrying tokens print as `line:col: kind "payload"`, operators as
/// `line:col: lexeme`, and the end marker as a bare `eof`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.pos;
        match self.kind {
            TokenKind::EndOfInput => f.write_str("eof"),
            TokenKind::Illegal(byte) => write!(f, "{pos}: illegal \"{}\"", byte.escape_ascii()),
            TokenKind::Symbol(symbol) => write!(f, "{pos}: {}", symbol.lexeme()),
            TokenKind::Equal => write!(f, "{pos}: =="),
            TokenKind::NotEqual => write!(f, "{pos}: !="),
            TokenKind::StringLiteral(bytes) => {
                write!(f, "{pos}: string \"{}\"", bytes.escape_ascii())
            }
            TokenKind::IntegerLiteral(value) => write!(f, "{pos}: int \"{value}\""),
            TokenKind::Identifier(bytes) => write!(f, "{pos}: ident \"{}\"", bytes.escape_ascii()),
            TokenKind::Keyword(keyword) => write!(f, "{pos}: keyword \"{keyword}\""),
        }
    }
}
