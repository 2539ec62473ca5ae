//! Reasons an extraction produced nothing.
//!
//! None of these are faults: [`extract_abbreviation`](crate::extract_abbreviation)
//! folds them all into `None`. [`try_extract`](crate::try_extract) exposes them
//! for callers that want to tell "prefix missing" apart from "nothing to
//! expand here".

use thiserror::Error;

/// Why no abbreviation was found.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A prefix was required but does not occur before the caret.
    #[error("prefix `{prefix}` not found before offset {pos}")]
    PrefixNotFound { prefix: String, pos: usize },
    /// A close bracket behind the caret has no matching open bracket.
    #[error("unbalanced brackets before offset {pos}")]
    Unbalanced { pos: usize },
    /// The text behind the caret does not start an abbreviation.
    #[error("no abbreviation before offset {pos}")]
    NoAbbreviation { pos: usize },
}

/// Unknown syntax name passed to `Syntax::from_str`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown syntax `{0}`, expected `markup` or `stylesheet`")]
pub struct ParseSyntaxError(pub String);
