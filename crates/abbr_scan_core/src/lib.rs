//! Backward scanning primitives for abbreviation extraction.
//!
//! Everything here reads a single line of text from right to left:
//!
//! - [`BackCursor`]: position + left boundary over a line, stepping backward
//! - [`chars`]: byte class tables (brackets, operators, abbreviation bytes)
//! - [`quotes`]: consuming a quoted literal backward
//! - [`html`]: deciding whether a `>` closes an HTML-like tag
//!
//! The extractor (`abbr_extract`) drives these; nothing in this crate
//! allocates or logs.

pub mod chars;
mod cursor;
pub mod html;
pub mod quotes;

pub use cursor::BackCursor;
pub use html::is_at_html_tag;
pub use quotes::{eat_quoted, is_quote};
