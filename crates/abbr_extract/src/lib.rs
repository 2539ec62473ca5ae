//! Abbreviation extraction for editor integrations.
//!
//! Finds the abbreviation (`ul>li.item*3`, `a[href="#"]{link}`, `p10+m5`)
//! that ends at the caret in one line of text, so an expansion engine can
//! compile it and the editor can replace it in place.
//!
//! ```text
//! <span>.foo[title=bar|]</span>   ->   ".foo[title=bar]" at offset 6
//! ```
//!
//! # Pipeline
//!
//! 1. Clamp the caret into the line.
//! 2. Look ahead past closers the editor auto-inserted after the caret.
//! 3. Find the required prefix, if any ([`ExtractOptions::prefix`]).
//! 4. Scan backward with a bracket stack until the abbreviation ends.
//! 5. Strip leading operators (`*`, `+`, `>`, `^`).
//!
//! Scanning primitives (cursor, quotes, tag detection) live in
//! `abbr_scan_core`.

mod error;
mod extract;
mod options;
mod prefix;
mod scan;

pub use error::{ExtractError, ParseSyntaxError};
pub use extract::{extract_abbreviation, try_extract, Extraction};
pub use options::{ExtractOptions, Syntax};
