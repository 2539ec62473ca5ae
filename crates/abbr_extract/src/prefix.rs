//! Prefix anchoring.
//!
//! Some editors only expand abbreviations written after a marker, e.g.
//! `>>>ul>li`. The locator finds the nearest marker behind the caret and
//! returns the offset right after it; the scan never goes further left.
//! Bracket pairs are skipped whole, so a marker inside `[...]` or `{...}`
//! does not count.

use abbr_scan_core::chars::{CURLY_BRACE_L, CURLY_BRACE_R, SQUARE_BRACE_L, SQUARE_BRACE_R};
use abbr_scan_core::BackCursor;
use tracing::trace;

use crate::error::ExtractError;

/// Left boundary for the scan ending at `pos`.
///
/// With an empty `prefix` this is the start of the line. Otherwise it is the
/// offset just after the nearest occurrence of `prefix`, and a missing prefix
/// fails the whole extraction.
pub(crate) fn locate_prefix(line: &str, pos: usize, prefix: &str) -> Result<usize, ExtractError> {
    if prefix.is_empty() {
        return Ok(0);
    }

    let mut cursor = BackCursor::new(line);
    cursor.set_pos(pos);

    while !cursor.is_at_start() {
        if consume_pair(&mut cursor, SQUARE_BRACE_R, SQUARE_BRACE_L)
            || consume_pair(&mut cursor, CURLY_BRACE_R, CURLY_BRACE_L)
        {
            continue;
        }

        let boundary = cursor.pos();
        if consume_bytes(&mut cursor, prefix.as_bytes()) {
            trace!(boundary, prefix, "found prefix");
            return Ok(boundary);
        }
        cursor.prev();
    }

    Err(ExtractError::PrefixNotFound {
        prefix: prefix.to_owned(),
        pos,
    })
}

/// Consume `close` and everything back to the nearest `open`.
fn consume_pair(cursor: &mut BackCursor<'_>, close: u8, open: u8) -> bool {
    let start = *cursor;
    if cursor.eat(close) && cursor.seek_back_past(open) {
        return true;
    }
    *cursor = start;
    false
}

/// Consume `bytes` ending right behind the cursor, compared right to left.
fn consume_bytes(cursor: &mut BackCursor<'_>, bytes: &[u8]) -> bool {
    let start = *cursor;
    if bytes.iter().rev().all(|&b| cursor.eat(b)) {
        return true;
    }
    *cursor = start;
    false
}

#[cfg(test)]
mod tests;
