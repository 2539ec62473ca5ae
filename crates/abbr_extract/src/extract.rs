//! Extraction driver: caret normalization, look-ahead, prefix, scan, trim.

use std::ops::Range;

use abbr_scan_core::chars::is_leading_operator;
use tracing::debug;

use crate::error::ExtractError;
use crate::options::ExtractOptions;
use crate::prefix::locate_prefix;
use crate::scan::{offset_past_auto_closed, scan_back};

/// An abbreviation found in a line.
///
/// All offsets are byte offsets into the line and lie on `char` boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extraction<'a> {
    /// The abbreviation text, with leading operators removed.
    pub abbreviation: &'a str,
    /// Where `abbreviation` begins.
    pub location: usize,
    /// Where the replaced region begins: the start of the prefix when one is
    /// configured, `location` otherwise.
    pub start: usize,
    /// The caret after look-ahead; `abbreviation` ends here.
    pub end: usize,
}

impl Extraction<'_> {
    /// Byte range of the abbreviation text.
    pub fn range(&self) -> Range<usize> {
        self.location..self.end
    }

    /// Byte range an editor should replace with the expansion (includes the
    /// prefix).
    pub fn replace_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Extract the abbreviation that ends at `pos` in `line`.
///
/// `pos` defaults to the end of the line and is clamped into it. `options`
/// takes an [`ExtractOptions`], a `bool` (look-ahead shorthand) or a
/// [`Syntax`](crate::Syntax).
///
/// Returns `None` when there is nothing to extract, including when a
/// configured prefix cannot be found. Use [`try_extract`] to learn why.
pub fn extract_abbreviation(
    line: &str,
    pos: Option<usize>,
    options: impl Into<ExtractOptions>,
) -> Option<Extraction<'_>> {
    try_extract(line, pos, &options.into()).ok()
}

/// Like [`extract_abbreviation`], but reports why nothing was found.
pub fn try_extract<'a>(
    line: &'a str,
    pos: Option<usize>,
    options: &ExtractOptions,
) -> Result<Extraction<'a>, ExtractError> {
    let mut end = floor_char_boundary(line, pos.unwrap_or(line.len()));
    if options.look_ahead_enabled() {
        end = offset_past_auto_closed(line, end, options.syntax);
    }

    let boundary = locate_prefix(line, end, &options.prefix)?;
    let left = scan_back(line, boundary, end, options.syntax)?;

    let abbreviation = line
        .get(left..end)
        .map(trim_leading_operators)
        .filter(|abbreviation| !abbreviation.is_empty())
        .ok_or(ExtractError::NoAbbreviation { pos: end })?;

    let location = end - abbreviation.len();
    let start = if options.prefix.is_empty() {
        location
    } else {
        boundary.saturating_sub(options.prefix.len())
    };

    debug!(abbreviation, location, start, end, "extracted abbreviation");
    Ok(Extraction {
        abbreviation,
        location,
        start,
        end,
    })
}

impl ExtractOptions {
    /// Extract from `line` with these options.
    ///
    /// Handy when one configuration serves many lines.
    pub fn extract<'a>(&self, line: &'a str, pos: Option<usize>) -> Option<Extraction<'a>> {
        try_extract(line, pos, self).ok()
    }
}

/// Strip the `*`, `+`, `>`, `^` run an abbreviation cannot start with.
fn trim_leading_operators(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| u8::try_from(c).is_ok_and(is_leading_operator))
}

/// Clamp `pos` into `line` and move it left onto a `char` boundary.
fn floor_char_boundary(line: &str, pos: usize) -> usize {
    let mut pos = pos.min(line.len());
    while !line.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
