//! Extraction options.

use std::fmt;
use std::str::FromStr;

use abbr_scan_core::chars::{
    CURLY_BRACE_L, CURLY_BRACE_R, ROUND_BRACE_L, ROUND_BRACE_R, SQUARE_BRACE_L, SQUARE_BRACE_R,
};

use crate::error::ParseSyntaxError;

/// Which abbreviation language the line is written in.
///
/// The syntax decides which brackets are structural. Markup abbreviations use
/// `[attrs]`, `{text}` and `(group)`; stylesheet abbreviations only group with
/// `( )`, since `{` and `}` delimit rule blocks around them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Syntax {
    #[default]
    Markup,
    Stylesheet,
}

impl Syntax {
    /// Returns `true` if `b` closes a bracket group in this syntax.
    #[inline]
    pub fn is_close_brace(self, b: u8) -> bool {
        match self {
            Syntax::Markup => matches!(b, SQUARE_BRACE_R | ROUND_BRACE_R | CURLY_BRACE_R),
            Syntax::Stylesheet => b == ROUND_BRACE_R,
        }
    }

    /// Returns `true` if `b` opens a bracket group in this syntax.
    #[inline]
    pub fn is_open_brace(self, b: u8) -> bool {
        match self {
            Syntax::Markup => matches!(b, SQUARE_BRACE_L | ROUND_BRACE_L | CURLY_BRACE_L),
            Syntax::Stylesheet => b == ROUND_BRACE_L,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Syntax::Markup => "markup",
            Syntax::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the two canonical names plus common editor language ids
/// (`html`, `jsx`, `css`, `scss`, ...), case-insensitively.
impl FromStr for Syntax {
    type Err = ParseSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup" | "html" | "xml" | "xhtml" | "xsl" | "jsx" | "tsx" | "haml" | "pug"
            | "slim" => Ok(Syntax::Markup),
            "stylesheet" | "css" | "scss" | "sass" | "less" | "sss" | "stylus" => {
                Ok(Syntax::Stylesheet)
            }
            _ => Err(ParseSyntaxError(s.to_owned())),
        }
    }
}

/// Options for a single extraction.
///
/// `Default` gives markup syntax, look-ahead enabled, and no prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ExtractOptions {
    /// Abbreviation language; decides which brackets are structural.
    pub syntax: Syntax,
    /// Skip closers an editor auto-inserted right after the caret.
    /// `None` means enabled.
    pub look_ahead: Option<bool>,
    /// Token that must precede the abbreviation. Empty means no prefix.
    pub prefix: String,
}

impl ExtractOptions {
    /// Set the syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Enable or disable auto-close look-ahead.
    #[must_use]
    pub fn with_look_ahead(mut self, look_ahead: bool) -> Self {
        self.look_ahead = Some(look_ahead);
        self
    }

    /// Require `prefix` before the abbreviation.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Whether auto-close look-ahead is in effect (unset counts as enabled).
    #[inline]
    pub fn look_ahead_enabled(&self) -> bool {
        self.look_ahead.unwrap_or(true)
    }
}

/// Boolean shorthand for `look_ahead`.
impl From<bool> for ExtractOptions {
    fn from(look_ahead: bool) -> Self {
        ExtractOptions::default().with_look_ahead(look_ahead)
    }
}

impl From<Syntax> for ExtractOptions {
    fn from(syntax: Syntax) -> Self {
        ExtractOptions::default().with_syntax(syntax)
    }
}
