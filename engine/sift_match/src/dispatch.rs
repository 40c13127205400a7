//! Dispatch façade: the five convenience entry points.
//!
//! All entry points are layered on the same primitives (`matches` and
//! `extract`), resolve the backend selector before doing any matching,
//! and share the failure rule: when no case matches and no default was
//! supplied, the call fails with `NoPatternMatched` - the engine never
//! silently substitutes a sentinel for an unmatched case.

use rustc_hash::FxHashMap;

use sift_value::Value;

use crate::backend::{engine, Engine, Strategy};
use crate::errors::{
    missing_discriminant, no_pattern_matched, unmatched_tag, MatchErrorKind, MatchResult,
};
use crate::interp::InterpretedMatcher;
use crate::pattern::Pattern;
use crate::table::{CaseTable, Handler};

/// Predicate used by ordered predicate-list dispatch.
pub type Predicate = Box<dyn Fn(&Value) -> bool>;

/// Handlers for type-classification dispatch, one slot per category.
///
/// Categories are tested in a fixed priority order: str, int, float,
/// number, bool, list, object, null. The exact numeric checks come
/// before the generic `number` check, so an int handler wins over a
/// number handler for the same integer value.
#[derive(Default)]
pub struct TypeHandlers {
    str_like: Option<Handler>,
    int: Option<Handler>,
    float: Option<Handler>,
    number: Option<Handler>,
    boolean: Option<Handler>,
    list: Option<Handler>,
    object: Option<Handler>,
    null: Option<Handler>,
    default: Option<Handler>,
}

macro_rules! type_handler_setter {
    ($(#[$doc:meta] $name:ident => $slot:ident),* $(,)?) => {
        $(
            #[$doc]
            pub fn $name<F>(mut self, handler: F) -> Self
            where
                F: Fn(Value) -> Value + 'static,
            {
                self.$slot = Some(Box::new(handler));
                self
            }
        )*
    };
}

impl TypeHandlers {
    /// Start an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    type_handler_setter! {
        /// Handler for string values.
        on_str => str_like,
        /// Handler for integer values (beats `on_number`).
        on_int => int,
        /// Handler for float values (beats `on_number`).
        on_float => float,
        /// Handler for any numeric value.
        on_number => number,
        /// Handler for boolean values.
        on_bool => boolean,
        /// Handler for sequence values.
        on_list => list,
        /// Handler for map-shaped values.
        on_object => object,
        /// Handler for the nullish value.
        on_null => null,
        /// Fallback when no category handler applies.
        on_default => default,
    }
}

/// Handlers for discriminant-field dispatch, keyed by tag string.
#[derive(Default)]
pub struct TagHandlers {
    handlers: FxHashMap<String, Handler>,
}

impl TagHandlers {
    /// Start an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler for a tag.
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        self.handlers.insert(tag.into(), Box::new(handler));
        self
    }
}

/// Interpreted table dispatch.
///
/// Keyed tables with Option/Result entries take a direct dispatch fast
/// path; everything else is a first-match-wins scan over the lowered
/// pairs. Accelerated backends may reuse this as their reference
/// semantics.
pub fn interpreted_match_value(value: &Value, table: &CaseTable) -> MatchResult {
    let matcher = InterpretedMatcher;

    // Fast paths: direct variant dispatch for keyed Option/Result
    // tables. Observationally identical to the scan below, since no
    // other keyed entry can match an Option or Result value.
    if let Some(shape) = table.keyed_shape() {
        let direct = match value {
            Value::Some(_) => shape.some,
            Value::None => shape.none,
            Value::Ok(_) => shape.ok,
            Value::Err(_) => shape.err,
            _ => None,
        };
        if let Some(index) = direct {
            let (pattern, handler) = &table.entries()[index];
            return Ok(handler(matcher.extract(value, pattern)));
        }
    }

    for (pattern, handler) in table.entries() {
        if matcher.matches(value, pattern) {
            return Ok(handler(matcher.extract(value, pattern)));
        }
    }
    if let Some(default) = table.default_handler() {
        return Ok(default(value.clone()));
    }
    Err(no_pattern_matched())
}

impl Engine {
    /// Keyed-pattern dispatch: scan the table in order, invoke the
    /// first matching case's handler with the extracted value.
    pub fn match_value(&self, value: &Value, table: &CaseTable) -> MatchResult {
        match &self.strategy {
            Strategy::Accelerated(backend) => backend.match_value(value, table),
            Strategy::Interpreted(_) => interpreted_match_value(value, table),
        }
    }

    /// Ordered predicate-list dispatch. The first predicate returning
    /// true wins; its handler receives the value as-is (no extraction).
    pub fn match_pattern(
        &self,
        value: &Value,
        cases: &[(Predicate, Handler)],
        default: Option<&Handler>,
    ) -> MatchResult {
        for (predicate, handler) in cases {
            if predicate(value) {
                return Ok(handler(value.clone()));
            }
        }
        if let Some(fallback) = default {
            return Ok(fallback(value.clone()));
        }
        Err(no_pattern_matched())
    }

    /// Type-classification dispatch over the active type probe.
    pub fn match_type(&self, value: &Value, handlers: &TypeHandlers) -> MatchResult {
        let probe = self.probe();
        let categories = [
            (probe.str_like(value), &handlers.str_like),
            (probe.int(value), &handlers.int),
            (probe.float(value), &handlers.float),
            (probe.number(value), &handlers.number),
            (probe.boolean(value), &handlers.boolean),
            (probe.list(value), &handlers.list),
            (probe.object(value), &handlers.object),
            (probe.nullish(value), &handlers.null),
        ];
        for (in_category, handler) in categories {
            if in_category {
                if let Some(h) = handler {
                    return Ok(h(value.clone()));
                }
            }
        }
        if let Some(fallback) = &handlers.default {
            return Ok(fallback(value.clone()));
        }
        Err(no_pattern_matched())
    }

    /// Discriminant-field dispatch.
    ///
    /// The value's discriminant is the first of `type`, `kind`, `tag`
    /// present; its string keys into the handler table and the handler
    /// receives the whole value. A value with no discriminant field
    /// fails with a dedicated message unless a default is supplied.
    pub fn match_tag(
        &self,
        value: &Value,
        handlers: &TagHandlers,
        default: Option<&Handler>,
    ) -> MatchResult {
        const DISCRIMINANT_FIELDS: [&str; 3] = ["type", "kind", "tag"];

        let Some(discriminant) = DISCRIMINANT_FIELDS
            .iter()
            .find_map(|field| value.field(field))
        else {
            if let Some(fallback) = default {
                return Ok(fallback(value.clone()));
            }
            return Err(missing_discriminant());
        };

        if let Some(tag) = discriminant.as_str() {
            if let Some(handler) = handlers.handlers.get(tag) {
                return Ok(handler(value.clone()));
            }
            if let Some(fallback) = default {
                return Ok(fallback(value.clone()));
            }
            return Err(unmatched_tag(tag));
        }

        // Non-string discriminant: nothing to key on
        if let Some(fallback) = default {
            return Ok(fallback(value.clone()));
        }
        Err(unmatched_tag(discriminant.to_string()))
    }

    /// Resilient keyed dispatch: `match_value`, but a "no pattern
    /// matched" failure is converted into the default case's result
    /// when one is supplied.
    pub fn match_cases(
        &self,
        value: &Value,
        table: &CaseTable,
        default_case: Option<&Handler>,
    ) -> MatchResult {
        match self.match_value(value, table) {
            Err(error) if error.kind == MatchErrorKind::NoPatternMatched => match default_case {
                Some(fallback) => Ok(fallback(value.clone())),
                None => Err(error),
            },
            other => other,
        }
    }
}

// Process-wide convenience entry points

/// Test a value against a pattern on the process-wide engine.
pub fn matches(value: &Value, pattern: &Pattern) -> bool {
    engine().matches(value, pattern)
}

/// Extract the handler argument on the process-wide engine.
pub fn extract(value: &Value, pattern: &Pattern) -> Value {
    engine().extract(value, pattern)
}

/// Keyed-pattern dispatch on the process-wide engine.
pub fn match_value(value: &Value, table: &CaseTable) -> MatchResult {
    engine().match_value(value, table)
}

/// Ordered predicate-list dispatch on the process-wide engine.
pub fn match_pattern(
    value: &Value,
    cases: &[(Predicate, Handler)],
    default: Option<&Handler>,
) -> MatchResult {
    engine().match_pattern(value, cases, default)
}

/// Type-classification dispatch on the process-wide engine.
pub fn match_type(value: &Value, handlers: &TypeHandlers) -> MatchResult {
    engine().match_type(value, handlers)
}

/// Discriminant-field dispatch on the process-wide engine.
pub fn match_tag(value: &Value, handlers: &TagHandlers, default: Option<&Handler>) -> MatchResult {
    engine().match_tag(value, handlers, default)
}

/// Resilient keyed dispatch on the process-wide engine.
pub fn match_cases(
    value: &Value,
    table: &CaseTable,
    default_case: Option<&Handler>,
) -> MatchResult {
    engine().match_cases(value, table, default_case)
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    reason = "tests use expect_err to panic on unexpected success"
)]
