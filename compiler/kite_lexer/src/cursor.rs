//! Byte cursor with line/column bookkeeping.
//!
//! The cursor reads the borrowed source one byte at a time. Reads past the
//! end of the source return `0x00`; use [`Cursor::is_eof`] to tell the end
//! of input apart from an interior null byte.

use crate::Position;

/// Cursor over a borrowed byte buffer.
///
/// The cursor is [`Copy`], so saving and restoring state is free.
///
/// # Invariant
///
/// `pos <= buf.len()`. Every method that moves the cursor stops at the end
/// of the buffer.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at byte 0, position 1:1.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current without consuming
    /// anything, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Line and column of the current byte.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Advance past one byte on the current line. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
            self.column = self.column.saturating_add(1);
        }
    }

    /// Advance past one line-break byte: the line increments and the
    /// column resets to 1. No-op at EOF.
    #[inline]
    pub fn advance_line(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
            self.line = self.line.saturating_add(1);
            self.column = 1;
        }
    }

    /// Advance by `n` bytes on the current line, clamped to the end of the
    /// source.
    pub fn advance_n(&mut self, n: usize) {
        let n = n.min(self.buf.len() - self.pos);
        self.pos += n;
        self.column = self
            .column
            .saturating_add(u32::try_from(n).unwrap_or(u32::MAX));
    }

    /// Skip spaces, tabs and line breaks.
    ///
    /// Every `\n` and every `\r` counts as its own line break, so `\r\n`
    /// advances the line twice.
    pub fn eat_whitespace(&mut self) {
        while !self.is_eof() {
            match self.current() {
                b' ' | b'\t' => self.advance(),
                b'\n' | b'\r' => self.advance_line(),
                _ => break,
            }
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred` must not match line breaks; the column is advanced once per
    /// consumed byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is left on the found
    /// byte, or at EOF. Line breaks inside the skipped run only advance the
    /// column.
    pub fn eat_until(&mut self, byte: u8) -> usize {
        let remaining = &self.buf[self.pos..];
        let consumed = memchr::memchr(byte, remaining).unwrap_or(remaining.len());
        self.advance_n(consumed);
        consumed
    }

    /// Source bytes from `start` up to the current position.
    ///
    /// # Contract
    ///
    /// `start <= self.pos()`. Offsets handed out by [`pos`](Self::pos)
    /// always satisfy this.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds cursor");
        &self.buf[start..self.pos]
    }
}

#[cfg(test)]
mod tests;
