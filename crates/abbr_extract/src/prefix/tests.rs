use super::locate_prefix;
use crate::error::ExtractError;
use pretty_assertions::assert_eq;

/// Helper: locate from the end of the line.
fn locate(line: &str, prefix: &str) -> Result<usize, ExtractError> {
    locate_prefix(line, line.len(), prefix)
}

#[test]
fn empty_prefix_is_line_start() {
    assert_eq!(locate("foo bar", ""), Ok(0));
}

#[test]
fn boundary_is_after_prefix() {
    assert_eq!(locate("foo>>>bar", ">>>"), Ok(6));
    assert_eq!(locate(">>>bar", ">>>"), Ok(3));
}

#[test]
fn nearest_prefix_wins() {
    assert_eq!(locate("<>a <>b", "<>"), Ok(6));
}

#[test]
fn prefix_at_caret() {
    assert_eq!(locate("foo>>>", ">>>"), Ok(6));
}

#[test]
fn prefix_inside_brackets_is_skipped() {
    assert_eq!(locate("<>a[title=<>]", "<>"), Ok(2));
    assert_eq!(locate("<>p{<>}", "<>"), Ok(2));
}

#[test]
fn skips_pairs_before_matching() {
    assert_eq!(locate("foo>>>bar[a b=\"c\"]>baz", ">>>"), Ok(6));
}

#[test]
fn unclosed_bracket_is_not_a_pair() {
    // `]` without `[` is stepped over byte by byte
    assert_eq!(locate("<>a]b", "<>"), Ok(2));
}

#[test]
fn missing_prefix_fails() {
    assert_eq!(
        locate("<foo>bar[a b=\"c\"]>baz", ">>>"),
        Err(ExtractError::PrefixNotFound {
            prefix: ">>>".to_owned(),
            pos: 21,
        })
    );
}

#[test]
fn prefix_after_caret_is_ignored() {
    assert_eq!(
        locate_prefix("abc>>>", 3, ">>>"),
        Err(ExtractError::PrefixNotFound {
            prefix: ">>>".to_owned(),
            pos: 3,
        })
    );
}

#[test]
fn partial_prefix_at_line_start() {
    assert!(locate(">>foo", ">>>").is_err());
}
