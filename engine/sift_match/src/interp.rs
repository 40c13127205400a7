//! Interpreted core matcher.
//!
//! The portable implementation of `matches` and `extract`. The
//! accelerated backend, when active, must produce identical results for
//! every value/pattern pair (see `tests/equivalence.rs`).

use sift_value::Value;

use crate::pattern::Pattern;

/// The interpreted matching strategy.
///
/// Stateless: matching reads the value and pattern and nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterpretedMatcher;

impl InterpretedMatcher {
    /// Test a value against a pattern.
    ///
    /// Structural recursion is depth-first over the listed fields and
    /// short-circuits on the first failing field. There is no depth
    /// limit; value trees are acyclic by construction, so unbounded
    /// recursion terminates.
    pub fn matches(self, value: &Value, pattern: &Pattern) -> bool {
        match pattern {
            Pattern::Wildcard => true,
            Pattern::SomeTok => value.is_some(),
            Pattern::NoneTok => value.is_none(),
            Pattern::OkTok => value.is_ok(),
            Pattern::ErrTok => value.is_err(),
            Pattern::Predicate(f) => f(value),
            Pattern::Structural(fields) => {
                let Some(map) = value.as_map() else {
                    return false;
                };
                fields.iter().all(|(key, sub)| {
                    map.get(key).is_some_and(|field| self.matches(field, sub))
                })
            }
            Pattern::Literal(lit) => value == lit,
        }
    }

    /// Project the value a handler should receive for a matched pattern.
    ///
    /// Shape tokens unwrap their variant payload (`Some` and `Ok` yield
    /// the carried value, `Err` yields the error); every other pattern
    /// passes the value through unchanged. Only meaningful after
    /// `matches` returned true for the same pair; for a non-matching
    /// pair this simply returns the value unchanged.
    pub fn extract(self, value: &Value, pattern: &Pattern) -> Value {
        match (pattern, value) {
            (Pattern::SomeTok, Value::Some(inner)) | (Pattern::OkTok, Value::Ok(inner)) => {
                (**inner).clone()
            }
            (Pattern::ErrTok, Value::Err(error)) => (**error).clone(),
            _ => value.clone(),
        }
    }
}
