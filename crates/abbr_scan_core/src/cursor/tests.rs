use super::BackCursor;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn starts_at_end_of_line() {
    let cursor = BackCursor::new("abc");
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.start(), 0);
    assert!(!cursor.is_at_start());
}

#[test]
fn empty_line_is_at_start() {
    let cursor = BackCursor::new("");
    assert!(cursor.is_at_start());
    assert_eq!(cursor.peek(), None);
}

#[test]
fn start_is_clamped_to_line_length() {
    let cursor = BackCursor::with_start("ab", 10);
    assert_eq!(cursor.start(), 2);
    assert!(cursor.is_at_start());
}

#[test]
fn set_pos_clamps_into_bounds() {
    let mut cursor = BackCursor::with_start("abcdef", 2);
    cursor.set_pos(0);
    assert_eq!(cursor.pos(), 2);
    cursor.set_pos(100);
    assert_eq!(cursor.pos(), 6);
    cursor.set_pos(4);
    assert_eq!(cursor.pos(), 4);
}

// === Peek ===

#[test]
fn peek_reads_byte_behind_cursor() {
    let mut cursor = BackCursor::new("abc");
    assert_eq!(cursor.peek(), Some(b'c'));
    cursor.set_pos(1);
    assert_eq!(cursor.peek(), Some(b'a'));
}

#[test]
fn peek_at_offsets_relative_to_cursor() {
    let mut cursor = BackCursor::new("abcd");
    cursor.set_pos(2);
    assert_eq!(cursor.peek_at(-1), Some(b'a'));
    assert_eq!(cursor.peek_at(0), Some(b'b'));
    assert_eq!(cursor.peek_at(1), Some(b'c'));
    assert_eq!(cursor.peek_at(-2), None);
    assert_eq!(cursor.peek_at(3), None);
}

#[test]
fn peek_ignores_left_boundary() {
    let mut cursor = BackCursor::with_start("a\\b", 2);
    cursor.set_pos(2);
    assert!(cursor.is_at_start());
    assert_eq!(cursor.peek(), Some(b'\\'));
}

// === Prev ===

#[test]
fn prev_steps_back_and_returns_byte() {
    let mut cursor = BackCursor::new("ab");
    assert_eq!(cursor.prev(), Some(b'b'));
    assert_eq!(cursor.prev(), Some(b'a'));
    assert_eq!(cursor.prev(), None);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn prev_stops_at_boundary() {
    let mut cursor = BackCursor::with_start("abc", 2);
    assert_eq!(cursor.prev(), Some(b'c'));
    assert_eq!(cursor.prev(), None);
    assert_eq!(cursor.pos(), 2);
}

// === Eat ===

#[test]
fn eat_consumes_matching_byte() {
    let mut cursor = BackCursor::new("a>");
    assert!(cursor.eat(b'>'));
    assert_eq!(cursor.pos(), 1);
    assert!(!cursor.eat(b'>'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_if_uses_predicate() {
    let mut cursor = BackCursor::new("x1");
    assert!(!cursor.eat_if(|b| b.is_ascii_alphabetic()));
    assert!(cursor.eat_if(|b| b.is_ascii_digit()));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_fails_at_boundary() {
    let mut cursor = BackCursor::with_start("aa", 1);
    assert!(cursor.eat(b'a'));
    assert!(!cursor.eat(b'a'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_while_reports_movement() {
    let mut cursor = BackCursor::new("foo   ");
    assert!(cursor.eat_while(|b| b == b' '));
    assert_eq!(cursor.pos(), 3);
    assert!(!cursor.eat_while(|b| b == b' '));
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.eat_while(|b| b.is_ascii_alphabetic()));
    assert!(cursor.is_at_start());
}

// === Seek ===

#[test]
fn seek_back_past_finds_nearest_occurrence() {
    let mut cursor = BackCursor::new("[a][b]");
    cursor.set_pos(5);
    assert!(cursor.seek_back_past(b'['));
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.seek_back_past(b'['));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn seek_back_past_respects_boundary() {
    let mut cursor = BackCursor::with_start("[ab", 1);
    assert!(!cursor.seek_back_past(b'['));
    assert_eq!(cursor.pos(), 3);
}

// === Slice ===

#[test]
fn slice_returns_text() {
    let mut cursor = BackCursor::new("hello world");
    cursor.set_pos(6);
    assert_eq!(cursor.slice_to(11), Some("world"));
    assert_eq!(cursor.slice(0, 5), Some("hello"));
}

#[test]
fn slice_rejects_split_characters() {
    let cursor = BackCursor::new("тdiv");
    assert_eq!(cursor.slice(1, 6), None);
    assert_eq!(cursor.slice(2, 5), Some("div"));
}

#[test]
fn snapshot_restores_position() {
    let mut cursor = BackCursor::new("abc");
    let snapshot = cursor;
    cursor.prev();
    cursor.prev();
    assert_eq!(cursor.pos(), 1);
    cursor = snapshot;
    assert_eq!(cursor.pos(), 3);
}
