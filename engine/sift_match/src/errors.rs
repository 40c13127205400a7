//! Error types for match dispatch.
//!
//! `MatchError` is the only error that crosses the public boundary of
//! this crate: it signals that no pattern in a table matched and no
//! default handler was supplied. Factory functions populate both `kind`
//! and `message`. Backend acquisition failures are represented by
//! `BackendError` and never propagate past the selector; they are
//! downgraded to a fallback decision plus a log entry.

use std::fmt;

use sift_value::Value;

/// Result of a dispatch operation.
pub type MatchResult = Result<Value, MatchError>;

/// Typed category for match failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// No entry in the table matched the value.
    NoPatternMatched,
    /// Tag dispatch found a discriminant, but no handler for it.
    UnmatchedTag { tag: String },
    /// Tag dispatch on a value with no `type`, `kind`, or `tag` field.
    MissingDiscriminant,
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPatternMatched => write!(f, "no pattern matched"),
            Self::UnmatchedTag { tag } => write!(f, "no pattern matched for tag: {tag}"),
            Self::MissingDiscriminant => {
                write!(
                    f,
                    "no pattern matched: value has no `type`, `kind`, or `tag` field"
                )
            }
        }
    }
}

/// Error raised when dispatch finds no matching pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchError {
    pub kind: MatchErrorKind,
    pub message: String,
}

impl MatchError {
    fn from_kind(kind: MatchErrorKind) -> Self {
        let message = kind.to_string();
        MatchError { kind, message }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MatchError {}

// Factory functions

/// No entry in the table matched.
pub fn no_pattern_matched() -> MatchError {
    MatchError::from_kind(MatchErrorKind::NoPatternMatched)
}

/// Tag dispatch miss, naming the offending tag.
pub fn unmatched_tag(tag: impl Into<String>) -> MatchError {
    MatchError::from_kind(MatchErrorKind::UnmatchedTag { tag: tag.into() })
}

/// Tag dispatch on a value with no discriminant field.
pub fn missing_discriminant() -> MatchError {
    MatchError::from_kind(MatchErrorKind::MissingDiscriminant)
}

/// Failure to acquire the accelerated backend.
///
/// Caught at the selector boundary: logged, then discarded in favor of
/// the interpreted path. Never observed by matching callers.
#[derive(Clone, Debug)]
pub struct BackendError {
    message: String,
}

impl BackendError {
    /// Create a backend acquisition error.
    pub fn new(message: impl Into<String>) -> Self {
        BackendError {
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BackendError {}
