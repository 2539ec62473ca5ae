//! Quoted literals, read backward.

use crate::BackCursor;

const SINGLE_QUOTE: u8 = b'\'';
const DOUBLE_QUOTE: u8 = b'"';
const ESCAPE: u8 = b'\\';

/// Returns `true` for `'` and `"`.
#[inline]
pub fn is_quote(b: u8) -> bool {
    b == SINGLE_QUOTE || b == DOUBLE_QUOTE
}

/// Consume a quoted literal that ends right behind the cursor.
///
/// On success the cursor sits on the opening quote. A quote preceded by `\`
/// does not close the literal; only the single byte before it is checked,
/// so `\\"` still counts as escaped.
///
/// On failure (no closing quote behind the cursor, or no opening quote before
/// the boundary) the cursor is left where it was.
pub fn eat_quoted(cursor: &mut BackCursor<'_>) -> bool {
    let start = *cursor;
    if let Some(quote) = cursor.prev().filter(|&b| is_quote(b)) {
        while !cursor.is_at_start() {
            if cursor.prev() == Some(quote) && cursor.peek() != Some(ESCAPE) {
                return true;
            }
        }
    }

    *cursor = start;
    false
}
