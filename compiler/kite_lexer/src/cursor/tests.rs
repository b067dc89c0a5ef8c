use super::*;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.position(), Position::START);
}

#[test]
fn advance_moves_forward_and_bumps_column() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.position(), Position::new(1, 2));
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new(b"hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new(b"x");
    cursor.advance();
    let before = cursor.position();
    cursor.advance();
    cursor.advance_line();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.position(), before);
}

#[test]
fn empty_source_starts_at_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

// === Peek ===

#[test]
fn peek_does_not_consume() {
    let cursor = Cursor::new(b"==");
    assert_eq!(cursor.peek(), b'=');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn peek_past_end_returns_zero() {
    let cursor = Cursor::new(b"=");
    assert_eq!(cursor.peek(), 0);
}

// === EOF vs interior null ===

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new(b"\0a");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Whitespace & lines ===

#[test]
fn eat_whitespace_tracks_columns() {
    let mut cursor = Cursor::new(b"  \tx");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.position(), Position::new(1, 4));
}

#[test]
fn eat_whitespace_tracks_lines() {
    let mut cursor = Cursor::new(b"\n\n  y");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'y');
    assert_eq!(cursor.position(), Position::new(3, 3));
}

#[test]
fn carriage_return_counts_as_line_break() {
    let mut cursor = Cursor::new(b"\r\nz");
    cursor.eat_whitespace();
    assert_eq!(cursor.position(), Position::new(3, 1));
}

#[test]
fn eat_whitespace_stops_at_eof() {
    let mut cursor = Cursor::new(b" \t\n ");
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
}

// === Runs ===

#[test]
fn eat_while_and_slice_from() {
    let mut cursor = Cursor::new(b"abc123");
    let start = cursor.pos();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(start), b"abc");
    assert_eq!(cursor.position(), Position::new(1, 4));
}

#[test]
fn eat_until_stops_on_byte() {
    let mut cursor = Cursor::new(b"hello\"rest");
    let consumed = cursor.eat_until(b'"');
    assert_eq!(consumed, 5);
    assert_eq!(cursor.current(), b'"');
    assert_eq!(cursor.position(), Position::new(1, 6));
}

#[test]
fn eat_until_missing_byte_reaches_eof() {
    let mut cursor = Cursor::new(b"abc");
    let consumed = cursor.eat_until(b'"');
    assert_eq!(consumed, 3);
    assert!(cursor.is_eof());
}

#[test]
fn advance_n_clamps_to_end() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.position(), Position::new(1, 3));
}
