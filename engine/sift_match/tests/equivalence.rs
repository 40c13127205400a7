//! Backend equivalence suite.
//!
//! The accelerated and interpreted strategies are interchangeable: for
//! any value and pattern they must return identical `matches` and
//! `extract` results, and the façade must behave identically through
//! either engine. The mirror backend below is an independent,
//! value-first implementation of the matching rules - not a delegate -
//! so agreement is a real property, not a tautology.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use proptest::prelude::*;

use sift_match::{
    interpreted_match_value, no_pattern_matched, AcceleratedMatcher, CaseTable, Engine, Handler,
    InterpretedMatcher, InterpretedProbe, MatchErrorKind, MatchResult, Pattern, TagHandlers,
    TypeHandlers, TypeProbe,
};
use sift_value::{is, Value};

// -- Mirror backend --

/// Independent matching implementation, structured value-first and with
/// an explicit work list instead of recursion for structural patterns.
#[derive(Default)]
struct MirrorBackend {
    probe: InterpretedProbe,
}

impl AcceleratedMatcher for MirrorBackend {
    fn matches_pattern(&self, value: &Value, pattern: &Pattern) -> bool {
        let mut work = vec![(value.clone(), pattern.clone())];
        while let Some((v, p)) = work.pop() {
            let hit = match p {
                Pattern::Wildcard => true,
                Pattern::SomeTok => matches!(v, Value::Some(_)),
                Pattern::NoneTok => matches!(v, Value::None),
                Pattern::OkTok => matches!(v, Value::Ok(_)),
                Pattern::ErrTok => matches!(v, Value::Err(_)),
                Pattern::Predicate(f) => f(&v),
                Pattern::Literal(lit) => v == lit,
                Pattern::Structural(fields) => {
                    let Some(map) = v.as_map() else { return false };
                    let mut all_present = true;
                    for (key, sub) in *fields {
                        match map.get(&key) {
                            Some(field) => work.push((field.clone(), sub)),
                            None => {
                                all_present = false;
                                break;
                            }
                        }
                    }
                    all_present
                }
            };
            if !hit {
                return false;
            }
        }
        true
    }

    fn extract_value(&self, value: &Value, pattern: &Pattern) -> Value {
        match value {
            Value::Some(inner) if matches!(pattern, Pattern::SomeTok) => (**inner).clone(),
            Value::Ok(inner) if matches!(pattern, Pattern::OkTok) => (**inner).clone(),
            Value::Err(error) if matches!(pattern, Pattern::ErrTok) => (**error).clone(),
            other => other.clone(),
        }
    }

    fn match_value(&self, value: &Value, table: &CaseTable) -> MatchResult {
        // Plain scan, no fast paths: must agree with the interpreted
        // dispatch anyway.
        for (pattern, handler) in table.entries() {
            if self.matches_pattern(value, pattern) {
                return Ok(handler(self.extract_value(value, pattern)));
            }
        }
        if let Some(default) = table.default_handler() {
            return Ok(default(value.clone()));
        }
        Err(no_pattern_matched())
    }

    fn probe(&self) -> &dyn TypeProbe {
        &self.probe
    }
}

fn both_engines() -> [Engine; 2] {
    [
        Engine::interpreted(),
        Engine::accelerated(Arc::new(MirrorBackend::default())),
    ]
}

// -- Strategies --

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(|s| Value::string(s)),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(("[a-z]{1,4}", inner.clone()), 0..4)
                .prop_map(|entries| Value::map(entries)),
            inner.clone().prop_map(Value::some),
            inner.clone().prop_map(Value::ok),
            inner.prop_map(Value::err),
        ]
    })
}

/// Deterministic predicates drawn from the `is` library, so generated
/// predicate patterns are reproducible under shrinking.
fn predicate_strategy() -> impl Strategy<Value = Pattern> {
    prop_oneof![
        Just(Pattern::predicate(is::int)),
        Just(Pattern::predicate(is::number)),
        Just(Pattern::predicate(is::str_like)),
        Just(Pattern::predicate(is::empty)),
        Just(Pattern::predicate(is::some)),
        Just(Pattern::predicate(is::err)),
    ]
}

fn pattern_strategy() -> impl Strategy<Value = Pattern> {
    let leaf = prop_oneof![
        Just(Pattern::Wildcard),
        Just(Pattern::SomeTok),
        Just(Pattern::NoneTok),
        Just(Pattern::OkTok),
        Just(Pattern::ErrTok),
        value_strategy().prop_map(Pattern::literal),
        predicate_strategy(),
    ];
    leaf.prop_recursive(3, 12, 3, |inner| {
        prop::collection::vec(("[a-z]{1,4}", inner), 0..3)
            .prop_map(|fields| Pattern::structural(fields))
    })
}

// -- Equivalence properties --

proptest! {
    #[test]
    fn prop_matches_agree(value in value_strategy(), pattern in pattern_strategy()) {
        let mirror = MirrorBackend::default();
        prop_assert_eq!(
            InterpretedMatcher.matches(&value, &pattern),
            mirror.matches_pattern(&value, &pattern),
        );
    }

    #[test]
    fn prop_extract_agree(value in value_strategy(), pattern in pattern_strategy()) {
        let mirror = MirrorBackend::default();
        prop_assert_eq!(
            InterpretedMatcher.extract(&value, &pattern),
            mirror.extract_value(&value, &pattern),
        );
    }

    #[test]
    fn prop_wildcard_total(value in value_strategy()) {
        let mirror = MirrorBackend::default();
        prop_assert!(InterpretedMatcher.matches(&value, &Pattern::Wildcard));
        prop_assert!(mirror.matches_pattern(&value, &Pattern::Wildcard));
    }

    #[test]
    fn prop_fast_path_agrees_with_scan(value in value_strategy()) {
        // Keyed Option/Result dispatch (fast path) vs. the mirror's
        // plain scan over the same lowered table.
        let table = CaseTable::keyed()
            .on("Some", |v| v)
            .on("None", |_| Value::Int(-1))
            .on("Ok", |v| v)
            .on("Err", |_| Value::Int(-2))
            .on("_", |_| Value::Int(-3))
            .build();
        let mirror = MirrorBackend::default();
        prop_assert_eq!(
            interpreted_match_value(&value, &table),
            mirror.match_value(&value, &table),
        );
    }
}

// -- Scenario suite, run through both engines --

fn add_one(v: Value) -> Value {
    match v.as_int() {
        Some(n) => Value::Int(n + 1),
        None => v,
    }
}

#[test]
fn keyed_result_dispatch_unwraps_ok() {
    for engine in both_engines() {
        let table = CaseTable::keyed()
            .on("Ok", add_one)
            .on("Err", |_| Value::Int(0))
            .build();
        assert_eq!(
            engine.match_value(&Value::ok(Value::Int(42)), &table),
            Ok(Value::Int(43))
        );
        assert_eq!(
            engine.match_value(&Value::err(Value::string("e")), &table),
            Ok(Value::Int(0))
        );
    }
}

#[test]
fn option_round_trip() {
    for engine in both_engines() {
        let some = Value::some(Value::Int(5));
        assert!(engine.matches(&some, &Pattern::SomeTok));
        assert_eq!(engine.extract(&some, &Pattern::SomeTok), Value::Int(5));
        assert!(!engine.matches(&Value::None, &Pattern::SomeTok));
        assert!(engine.matches(&Value::None, &Pattern::NoneTok));
    }
}

#[test]
fn result_round_trip() {
    for engine in both_engines() {
        let err = Value::err(Value::string("boom"));
        assert!(engine.matches(&Value::ok(Value::Int(1)), &Pattern::OkTok));
        assert!(engine.matches(&err, &Pattern::ErrTok));
        assert_eq!(engine.extract(&err, &Pattern::ErrTok), Value::string("boom"));
    }
}

#[test]
fn structural_partial_match() {
    for engine in both_engines() {
        let value = Value::map([("a", Value::Int(1)), ("b", Value::Int(2))]);
        assert!(engine.matches(
            &value,
            &Pattern::structural([("a", Pattern::literal(Value::Int(1)))])
        ));
        let partial = Value::map([("a", Value::Int(1))]);
        assert!(!engine.matches(
            &partial,
            &Pattern::structural([
                ("a", Pattern::literal(Value::Int(1))),
                ("b", Pattern::literal(Value::Int(2))),
            ])
        ));
    }
}

#[test]
fn tag_dispatch_circle_area() {
    for engine in both_engines() {
        let handlers = TagHandlers::new().on("circle", |v| {
            let radius = v.field("r").and_then(Value::as_float).unwrap_or(0.0);
            Value::Float(std::f64::consts::PI * radius * radius)
        });
        let circle = Value::map([("kind", Value::string("circle")), ("r", Value::Int(2))]);
        let area = engine
            .match_tag(&circle, &handlers, None)
            .ok()
            .and_then(|v| v.as_float())
            .unwrap_or(f64::NAN);
        assert!((area - 12.566).abs() < 0.001, "area was {area}");
    }
}

#[test]
fn type_dispatch_priority() {
    for engine in both_engines() {
        let handlers = TypeHandlers::new()
            .on_number(|_| Value::string("generic"))
            .on_int(|_| Value::string("raw"));
        assert_eq!(
            engine.match_type(&Value::Int(3), &handlers),
            Ok(Value::string("raw"))
        );
    }
}

#[test]
fn no_match_fails_and_match_cases_recovers() {
    for engine in both_engines() {
        let table = CaseTable::ordered().build();
        let err = engine
            .match_value(&Value::Int(5), &table)
            .expect_err("empty table");
        assert_eq!(err.kind, MatchErrorKind::NoPatternMatched);

        let table = CaseTable::ordered().build();
        let fallback: Handler = Box::new(|_| Value::string("default"));
        assert_eq!(
            engine.match_cases(&Value::Int(5), &table, Some(&fallback)),
            Ok(Value::string("default"))
        );
    }
}
