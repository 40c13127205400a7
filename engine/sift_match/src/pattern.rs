//! The pattern language.
//!
//! A closed set of pattern forms tested against dynamic values:
//! literal equality, caller-supplied predicates, open structural
//! matching over map-shaped values, and the reserved shape tokens that
//! test Option/Result variant membership rather than value equality.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use sift_value::Value;

/// Predicate closure attached to a [`Pattern::Predicate`].
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Field list of a structural pattern.
///
/// Kept as an ordered list, not a map: sub-patterns are evaluated
/// depth-first in listed order with short-circuiting.
pub type FieldPatterns = SmallVec<[(String, Pattern); 4]>;

/// A declarative description tested against a value during dispatch.
///
/// Patterns are immutable and side-effect-free to evaluate, except
/// through attached predicate closures, which are the caller's
/// responsibility.
#[derive(Clone)]
pub enum Pattern {
    /// Matches by strict equality.
    Literal(Value),
    /// Matches when the predicate returns true.
    Predicate(PredicateFn),
    /// Open structural match: every listed field must exist on the
    /// value and recursively match; unlisted fields are ignored.
    Structural(Box<FieldPatterns>),
    /// Matches a Some-Option.
    SomeTok,
    /// Matches a None-Option.
    NoneTok,
    /// Matches an Ok-Result.
    OkTok,
    /// Matches an Err-Result.
    ErrTok,
    /// Matches anything.
    Wildcard,
}

impl Pattern {
    /// Create a literal-equality pattern.
    pub fn literal(value: Value) -> Self {
        Pattern::Literal(value)
    }

    /// Create a predicate pattern from a closure.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Arc::new(f))
    }

    /// Create a structural pattern from field/sub-pattern pairs.
    ///
    /// Field order is preserved and significant: evaluation is
    /// depth-first over the listed fields, short-circuiting on the
    /// first failing field.
    pub fn structural<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Pattern)>,
    {
        Pattern::Structural(Box::new(
            fields.into_iter().map(|(k, p)| (k.into(), p)).collect(),
        ))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(v) => write!(f, "Literal({v})"),
            Pattern::Predicate(_) => write!(f, "Predicate(<fn>)"),
            Pattern::Structural(fields) => {
                write!(f, "Structural({{")?;
                for (i, (key, sub)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {sub}")?;
                }
                write!(f, "}})")
            }
            Pattern::SomeTok => write!(f, "Some"),
            Pattern::NoneTok => write!(f, "None"),
            Pattern::OkTok => write!(f, "Ok"),
            Pattern::ErrTok => write!(f, "Err"),
            Pattern::Wildcard => write!(f, "_"),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
