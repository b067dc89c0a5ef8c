//! Reserved words.
//!
//! Keyword lookup runs on every identifier, so it buckets by length first:
//! anything outside the 2-6 byte range is rejected without a comparison.

use std::fmt;

/// A reserved word. Spellings are case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `fn`
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 7] = [
        Keyword::Function,
        Keyword::Let,
        Keyword::True,
        Keyword::False,
        Keyword::If,
        Keyword::Else,
        Keyword::Return,
    ];

    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Function => "fn",
            Keyword::Let => "let",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
        }
    }

    /// Look up a keyword by its exact spelling.
    ///
    /// Returns `None` for ordinary identifiers, including differently-cased
    /// spellings such as `Let`.
    #[inline]
    pub fn lookup(text: &[u8]) -> Option<Keyword> {
        match text.len() {
            2 => match text {
                b"fn" => Some(Keyword::Function),
                b"if" => Some(Keyword::If),
                _ => None,
            },
            3 => match text {
                b"let" => Some(Keyword::Let),
                _ => None,
            },
            4 => match text {
                b"true" => Some(Keyword::True),
                b"else" => Some(Keyword::Else),
                _ => None,
            },
            5 => match text {
                b"false" => Some(Keyword::False),
                _ => None,
            },
            6 => match text {
                b"return" => Some(Keyword::Return),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
