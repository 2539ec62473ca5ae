//! Backward bracket scan.
//!
//! Walks left from the caret one byte at a time, classifying each byte into
//! a [`CharClass`] and keeping a stack of pending close brackets. The walk
//! stops at the first byte that cannot belong to the abbreviation, at an
//! unmatched open bracket, at a `>` that closes an HTML tag, or at the left
//! boundary.
//!
//! # Zones
//!
//! - Inside `[...]` (attributes) and `{...}` (text) every byte is accepted
//!   without classification. Brackets still nest there, except inside `{...}`
//!   where only `{` and `}` are tracked so text may contain stray `[` or `(`.
//! - Inside `(...)` (groups) bytes are classified as usual.

use abbr_scan_core::chars::{
    is_abbreviation, matching_close, ANGLE_RIGHT, CURLY_BRACE_L, CURLY_BRACE_R, SQUARE_BRACE_R,
};
use abbr_scan_core::quotes::is_quote;
use abbr_scan_core::{is_at_html_tag, BackCursor};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::ExtractError;
use crate::options::Syntax;

/// Pending close brackets, innermost last.
type BraceStack = SmallVec<[u8; 8]>;

/// What a byte means to the scan, given the current bracket stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Closes a bracket group: push it.
    CloseBrace,
    /// Opens a bracket group: must match the top of the stack.
    OpenBrace,
    /// A `>` that is either the child operator or the end of a tag.
    TagCandidate,
    /// Inside `[...]` or `{...}`: accepted as is.
    OpaqueContent,
    /// Plain abbreviation byte.
    AbbreviationChar,
    /// Cannot be part of an abbreviation.
    Stop,
}

/// Classify `b` against the pending close brackets in `stack`.
pub(crate) fn classify(b: u8, stack: &[u8], syntax: Syntax) -> CharClass {
    if stack.contains(&CURLY_BRACE_R) {
        // text zone: only curly braces are structural
        if b == CURLY_BRACE_R {
            return CharClass::CloseBrace;
        }
        if b != CURLY_BRACE_L {
            return CharClass::OpaqueContent;
        }
    }

    if syntax.is_close_brace(b) {
        CharClass::CloseBrace
    } else if syntax.is_open_brace(b) {
        CharClass::OpenBrace
    } else if stack.contains(&SQUARE_BRACE_R) || stack.contains(&CURLY_BRACE_R) {
        CharClass::OpaqueContent
    } else if b == ANGLE_RIGHT {
        CharClass::TagCandidate
    } else if is_abbreviation(b) {
        CharClass::AbbreviationChar
    } else {
        CharClass::Stop
    }
}

/// Scan left from `end`, never crossing `start`.
///
/// Returns the offset where the raw abbreviation span begins. The span is
/// not trimmed here.
pub(crate) fn scan_back(
    line: &str,
    start: usize,
    end: usize,
    syntax: Syntax,
) -> Result<usize, ExtractError> {
    let mut cursor = BackCursor::with_start(line, start);
    cursor.set_pos(end);
    let mut stack = BraceStack::new();

    while !cursor.is_at_start() {
        let Some(b) = cursor.peek() else {
            break;
        };

        match classify(b, &stack, syntax) {
            CharClass::CloseBrace => stack.push(b),
            CharClass::OpenBrace => {
                if stack.last().copied() != matching_close(b) {
                    trace!(pos = cursor.pos(), "unmatched open bracket");
                    break;
                }
                stack.pop();
            }
            CharClass::TagCandidate => {
                if is_at_html_tag(cursor) {
                    trace!(pos = cursor.pos(), "stopped at tag boundary");
                    break;
                }
            }
            CharClass::OpaqueContent | CharClass::AbbreviationChar => {}
            CharClass::Stop => break,
        }

        cursor.prev();
    }

    if !stack.is_empty() {
        trace!(pending = stack.len(), "unclosed brackets left on stack");
        return Err(ExtractError::Unbalanced { pos: end });
    }
    if cursor.pos() == end {
        return Err(ExtractError::NoAbbreviation { pos: end });
    }
    Ok(cursor.pos())
}

/// Move `pos` right past closers an editor inserted after the caret.
///
/// At most one quote is skipped, and only directly at `pos`; then any run of
/// close brackets valid for `syntax`.
pub(crate) fn offset_past_auto_closed(line: &str, mut pos: usize, syntax: Syntax) -> usize {
    let bytes = line.as_bytes();
    if bytes.get(pos).is_some_and(|&b| is_quote(b)) {
        pos += 1;
    }
    while bytes.get(pos).is_some_and(|&b| syntax.is_close_brace(b)) {
        pos += 1;
    }
    pos
}
