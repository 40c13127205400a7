//! Type-predicate library.
//!
//! Each predicate classifies a dynamic [`Value`] by category. The
//! original host needed wrapped-vs-raw checks (`str` vs `rawString`,
//! `numeric` vs `rawNumber`); those collapse into the type system here,
//! leaving [`int`]/[`float`] as the exact checks and [`number`] as the
//! generic numeric check. Higher-order constructors ([`equal_to`],
//! [`in_range`], [`predicate`]) build predicates for use in pattern
//! tables.

use crate::value::Value;

/// True for the nullish value.
pub fn nullish(v: &Value) -> bool {
    matches!(v, Value::Null)
}

/// True for string values.
pub fn str_like(v: &Value) -> bool {
    matches!(v, Value::Str(_))
}

/// True for any numeric value (int or float).
pub fn number(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::Float(_))
}

/// True for integer values only.
pub fn int(v: &Value) -> bool {
    matches!(v, Value::Int(_))
}

/// True for float values only.
pub fn float(v: &Value) -> bool {
    matches!(v, Value::Float(_))
}

/// True for boolean values.
pub fn boolean(v: &Value) -> bool {
    matches!(v, Value::Bool(_))
}

/// True for sequence values.
pub fn list(v: &Value) -> bool {
    matches!(v, Value::List(_))
}

/// True for plain attribute-bearing values.
///
/// Excludes sequences and strings: only map-shaped values qualify.
pub fn object(v: &Value) -> bool {
    matches!(v, Value::Map(_))
}

/// True for function values.
pub fn function(v: &Value) -> bool {
    matches!(v, Value::Function(..))
}

/// True for a Some-Option.
pub fn some(v: &Value) -> bool {
    v.is_some()
}

/// True for a None-Option.
pub fn none(v: &Value) -> bool {
    v.is_none()
}

/// True for an Ok-Result.
pub fn ok(v: &Value) -> bool {
    v.is_ok()
}

/// True for an Err-Result.
pub fn err(v: &Value) -> bool {
    v.is_err()
}

/// Emptiness check.
///
/// Nullish values are empty; strings, lists, and maps are empty when
/// they have no content; everything else is non-empty by definition.
pub fn empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Str(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        _ => false,
    }
}

/// Build a predicate matching values equal to `target`.
pub fn equal_to(target: Value) -> impl Fn(&Value) -> bool {
    move |v| *v == target
}

/// Build a predicate matching numeric values in `[min, max]`, inclusive
/// on both ends. Integers are widened to floats for the comparison.
pub fn in_range(min: f64, max: f64) -> impl Fn(&Value) -> bool {
    move |v| v.as_float().is_some_and(|n| n >= min && n <= max)
}

/// Identity on predicates; documents intent at call sites.
pub fn predicate<F: Fn(&Value) -> bool>(f: F) -> F {
    f
}
