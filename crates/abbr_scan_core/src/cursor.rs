//! Backward cursor over a single line of text.
//!
//! The cursor reads bytes to the *left* of its position: `peek()` returns the
//! byte at `pos - 1`, and every consuming method moves `pos` toward the left
//! boundary (`start`). The boundary is usually `0`, but the prefix locator
//! narrows it so that a scan never crosses a required prefix.
//!
//! Running out of input is never an error. Reads past either end of the line
//! return `None`, and consuming methods at the boundary return `false`.

/// Backward cursor over a line, bounded on the left by `start`.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking:
/// save `let snapshot = cursor;`, try something, and restore with
/// `cursor = snapshot;` on failure.
///
/// # Invariant
///
/// `start <= pos <= line.len()`.
#[derive(Clone, Copy, Debug)]
pub struct BackCursor<'a> {
    line: &'a str,
    /// Left boundary: the cursor never moves below this offset.
    start: usize,
    /// Current position (byte offset). The next byte to read is `pos - 1`.
    pos: usize,
}

impl<'a> BackCursor<'a> {
    /// Create a cursor at the end of `line` with a left boundary of `0`.
    pub fn new(line: &'a str) -> Self {
        Self::with_start(line, 0)
    }

    /// Create a cursor at the end of `line` that stops at `start`.
    ///
    /// A `start` past the end of the line is clamped to the line length.
    pub fn with_start(line: &'a str, start: usize) -> Self {
        let start = start.min(line.len());
        Self {
            line,
            start,
            pos: line.len(),
        }
    }

    /// The line being scanned.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Left boundary of the scan.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Move the cursor to `pos`, clamped into `start..=line.len()`.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.clamp(self.start, self.line.len());
    }

    /// Returns `true` if the cursor sits on its left boundary.
    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.pos == self.start
    }

    /// Returns the byte just behind the cursor (`pos - 1`).
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Returns the byte at `pos - 1 + offset`.
    ///
    /// Reads are bounded by the line, not by `start`: looking one byte past
    /// the boundary is how the quote scanner spots an escape.
    #[inline]
    pub fn peek_at(&self, offset: isize) -> Option<u8> {
        let index = self.pos.checked_add_signed(offset)?.checked_sub(1)?;
        self.line.as_bytes().get(index).copied()
    }

    /// Step back one byte and return the byte now at the position.
    ///
    /// Returns `None` without moving when at the boundary.
    #[inline]
    pub fn prev(&mut self) -> Option<u8> {
        if self.is_at_start() {
            return None;
        }
        self.pos -= 1;
        self.line.as_bytes().get(self.pos).copied()
    }

    /// Consume the byte behind the cursor if it equals `byte`.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        self.eat_if(|b| b == byte)
    }

    /// Consume the byte behind the cursor if it satisfies `pred`.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        if self.is_at_start() {
            return false;
        }
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume bytes while `pred` holds.
    ///
    /// Returns `true` if at least one byte was consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        let start = self.pos;
        while self.eat_if(&pred) {}
        self.pos < start
    }

    /// Move back onto the nearest occurrence of `byte` before the cursor.
    ///
    /// On success the cursor is positioned at the found byte (it has been
    /// consumed). If `byte` does not occur between the boundary and the
    /// cursor, nothing moves and `false` is returned.
    pub fn seek_back_past(&mut self, byte: u8) -> bool {
        let window = &self.line.as_bytes()[self.start..self.pos];
        match memchr::memrchr(byte, window) {
            Some(offset) => {
                self.pos = self.start + offset;
                true
            }
            None => false,
        }
    }

    /// The text between `from` and `to`.
    ///
    /// Returns `None` if the range is out of bounds or splits a character.
    pub fn slice(&self, from: usize, to: usize) -> Option<&'a str> {
        self.line.get(from..to)
    }

    /// The text between the cursor and `end`.
    pub fn slice_to(&self, end: usize) -> Option<&'a str> {
        self.slice(self.pos, end)
    }
}

#[cfg(test)]
mod tests;
