//! Sift Match - algebraic `match`-style dispatch over dynamic values.
//!
//! This crate emulates exhaustive pattern matching - including the
//! `Some`/`None`/`Ok`/`Err` sum-type variants of `sift_value` - with a
//! small closed pattern language and a family of dispatch entry points.
//!
//! # Architecture
//!
//! - [`Pattern`] is the pattern language: literal equality, predicate
//!   closures, open structural matching, and reserved shape tokens.
//! - [`InterpretedMatcher`] implements the two primitives, `matches`
//!   and `extract`; everything else is layered on them.
//! - The backend selector ([`engine`], [`register_accelerated`]) picks
//!   between the interpreted matcher and an optional accelerated
//!   [`AcceleratedMatcher`] implementation, once per process.
//! - The dispatch façade ([`match_value`], [`match_pattern`],
//!   [`match_type`], [`match_tag`], [`match_cases`]) provides the
//!   ergonomic entry points; tables are evaluated first-match-wins.
//!
//! # Exhaustiveness is explicit
//!
//! When no case matches and no default handler was supplied, dispatch
//! fails with [`MatchError`] rather than returning a sentinel. Only
//! [`match_cases`] recovers locally, by substituting a caller-supplied
//! default.
//!
//! ```
//! use sift_match::{match_value, CaseTable};
//! use sift_value::Value;
//!
//! let table = CaseTable::keyed()
//!     .on("Ok", |v| match v.as_int() {
//!         Some(n) => Value::Int(n + 1),
//!         None => v,
//!     })
//!     .on("Err", |_| Value::Int(0))
//!     .build();
//!
//! assert_eq!(match_value(&Value::ok(Value::Int(42)), &table), Ok(Value::Int(43)));
//! ```

mod backend;
mod dispatch;
mod errors;
mod interp;
mod pattern;
mod table;

pub use backend::{
    engine, ensure_initialized, register_accelerated, using_accelerated, AcceleratedFactory,
    AcceleratedMatcher, Engine, InterpretedProbe, TypeProbe,
};
pub use dispatch::{
    extract, interpreted_match_value, match_cases, match_pattern, match_tag, match_type,
    match_value, matches, Predicate, TagHandlers, TypeHandlers,
};
pub use errors::{
    missing_discriminant, no_pattern_matched, unmatched_tag, BackendError, MatchError,
    MatchErrorKind, MatchResult,
};
pub use interp::InterpretedMatcher;
pub use pattern::{FieldPatterns, Pattern, PredicateFn};
pub use table::{CaseTable, Handler, KeyedCases, OrderedCases};
