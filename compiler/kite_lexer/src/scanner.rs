//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor past the lexeme and builds the token. The scanner
//! keeps no mode between calls: every call starts from the cursor alone, so
//! the token stream is a pure function of the input bytes.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::{Keyword, Position, Symbol, Token, TokenKind};

/// Lazy scanner over a borrowed source buffer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the first byte of `source`, 1:1.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Position the next token scan will start from (before whitespace
    /// skipping).
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::EndOfInput`] when the source is exhausted.
    /// Subsequent calls after that keep returning it without advancing.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_whitespace();
        let pos = self.cursor.position();
        let kind = match self.cursor.current() {
            0 if self.cursor.is_eof() => TokenKind::EndOfInput,
            b'"' => self.string(),
            b'=' => self.with_equal(TokenKind::Equal, Symbol::Assign),
            b'!' => self.with_equal(TokenKind::NotEqual, Symbol::Bang),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.integer(),
            byte => match Symbol::from_byte(byte) {
                Some(symbol) => self.single(symbol),
                None => self.illegal(byte, pos),
            },
        };
        trace!(
            line = pos.line,
            column = pos.column,
            kind = kind.display_name(),
            "token"
        );
        Token::new(kind, pos)
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn single(&mut self, symbol: Symbol) -> TokenKind<'a> {
        self.cursor.advance();
        TokenKind::Symbol(symbol)
    }

    /// `=`/`==` and `!`/`!=`: one byte of lookahead picks the longer
    /// operator when the next byte is `=`.
    fn with_equal(&mut self, double: TokenKind<'a>, single: Symbol) -> TokenKind<'a> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            double
        } else {
            self.single(single)
        }
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    /// Letters and underscores only: digits end the run, so `a1` scans as
    /// `a` followed by `1`.
    fn identifier(&mut self) -> TokenKind<'a> {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_ident_byte);
        let text = self.cursor.slice_from(start);
        match Keyword::lookup(text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(text),
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    /// Accumulates left to right, wrapping on `i64` overflow.
    fn integer(&mut self) -> TokenKind<'a> {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let value = self
            .cursor
            .slice_from(start)
            .iter()
            .fold(0i64, |acc, &digit| {
                acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
            });
        TokenKind::IntegerLiteral(value)
    }

    /// Everything up to the closing quote, or to end of input when the
    /// literal is unterminated.
    fn string(&mut self) -> TokenKind<'a> {
        self.cursor.advance(); // opening '"'
        let start = self.cursor.pos();
        self.cursor.eat_until(b'"');
        let content = self.cursor.slice_from(start);
        self.cursor.advance(); // closing '"', no-op at EOF
        TokenKind::StringLiteral(content)
    }

    // ─── Error tokens ──────────────────────────────────────────────

    fn illegal(&mut self, byte: u8, pos: Position) -> TokenKind<'a> {
        debug!(byte, %pos, "illegal character");
        self.cursor.advance();
        TokenKind::Illegal(byte)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, [`TokenKind::EndOfInput`].
    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Scan `source` to exhaustion.
///
/// The returned vector always ends with exactly one
/// [`TokenKind::EndOfInput`] token.
pub fn tokenize(source: &[u8]) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        tokens.push(tok);
        if tok.is_eof() {
            break;
        }
    }
    tokens
}
