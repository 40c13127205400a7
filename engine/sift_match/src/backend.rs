//! Backend selection: accelerated vs. interpreted matching.
//!
//! The engine runs one of two interchangeable strategies, chosen once
//! per process. An accelerated implementation may be registered before
//! first use; acquiring it can fail, in which case the failure is
//! logged and the selector silently commits to the interpreted path.
//! Selection happens at most once (`OnceLock` single-flight); callers
//! that race the initialization block until it resolves.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use sift_value::{is, Value};

use crate::errors::{BackendError, MatchResult};
use crate::interp::InterpretedMatcher;
use crate::pattern::Pattern;
use crate::table::CaseTable;

/// Runtime type probes, as a strategy object.
///
/// The default methods are the interpreted semantics, delegating to
/// `sift_value::is`. An accelerated backend supplies its own probe
/// object, constructed once at acquisition and reused for every
/// subsequent probe; it must be behaviorally equivalent.
pub trait TypeProbe: Send + Sync {
    fn nullish(&self, v: &Value) -> bool {
        is::nullish(v)
    }
    fn str_like(&self, v: &Value) -> bool {
        is::str_like(v)
    }
    fn number(&self, v: &Value) -> bool {
        is::number(v)
    }
    fn int(&self, v: &Value) -> bool {
        is::int(v)
    }
    fn float(&self, v: &Value) -> bool {
        is::float(v)
    }
    fn boolean(&self, v: &Value) -> bool {
        is::boolean(v)
    }
    fn list(&self, v: &Value) -> bool {
        is::list(v)
    }
    fn object(&self, v: &Value) -> bool {
        is::object(v)
    }
    fn function(&self, v: &Value) -> bool {
        is::function(v)
    }
    fn empty(&self, v: &Value) -> bool {
        is::empty(v)
    }
}

/// The interpreted probe: the trait defaults, unmodified.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterpretedProbe;

impl TypeProbe for InterpretedProbe {}

/// An externally supplied accelerated matching implementation.
///
/// Must be observationally identical to [`InterpretedMatcher`] for
/// every value/pattern pair; the engine works correctly (only slower)
/// with no accelerated backend at all.
pub trait AcceleratedMatcher: Send + Sync {
    /// Accelerated `matches`.
    fn matches_pattern(&self, value: &Value, pattern: &Pattern) -> bool;

    /// Accelerated `extract`.
    fn extract_value(&self, value: &Value, pattern: &Pattern) -> Value;

    /// Accelerated keyed/ordered table dispatch.
    fn match_value(&self, value: &Value, table: &CaseTable) -> MatchResult;

    /// The backend's reusable type-predicate object.
    fn probe(&self) -> &dyn TypeProbe;
}

/// Factory attempting to acquire an accelerated backend.
pub type AcceleratedFactory = fn() -> Result<Arc<dyn AcceleratedMatcher>, BackendError>;

/// The strategy the engine committed to.
pub(crate) enum Strategy {
    Accelerated(Arc<dyn AcceleratedMatcher>),
    Interpreted(InterpretedMatcher),
}

/// Strategy holder for all matching operations.
///
/// The process-wide instance lives behind [`engine`]; separate
/// instances can be built directly for testing both strategies in one
/// process.
pub struct Engine {
    pub(crate) strategy: Strategy,
}

static INTERPRETED_PROBE: InterpretedProbe = InterpretedProbe;

impl Engine {
    /// An engine committed to the interpreted path.
    pub fn interpreted() -> Self {
        Engine {
            strategy: Strategy::Interpreted(InterpretedMatcher),
        }
    }

    /// An engine committed to an accelerated backend.
    pub fn accelerated(backend: Arc<dyn AcceleratedMatcher>) -> Self {
        Engine {
            strategy: Strategy::Accelerated(backend),
        }
    }

    /// Whether the accelerated backend is active.
    pub fn using_accelerated(&self) -> bool {
        matches!(self.strategy, Strategy::Accelerated(_))
    }

    /// Test a value against a pattern.
    pub fn matches(&self, value: &Value, pattern: &Pattern) -> bool {
        match &self.strategy {
            Strategy::Accelerated(backend) => backend.matches_pattern(value, pattern),
            Strategy::Interpreted(matcher) => matcher.matches(value, pattern),
        }
    }

    /// Project the handler argument for a matched pattern.
    pub fn extract(&self, value: &Value, pattern: &Pattern) -> Value {
        match &self.strategy {
            Strategy::Accelerated(backend) => backend.extract_value(value, pattern),
            Strategy::Interpreted(matcher) => matcher.extract(value, pattern),
        }
    }

    /// The active type-predicate object.
    pub fn probe(&self) -> &dyn TypeProbe {
        match &self.strategy {
            Strategy::Accelerated(backend) => backend.probe(),
            Strategy::Interpreted(_) => &INTERPRETED_PROBE,
        }
    }
}

// Process-wide selector

/// Registration slot, closed when the selector commits.
///
/// The write lock serializes registration against commitment: a
/// registration either lands while the slot is still open and is
/// picked up by the selector, or finds the slot committed and is
/// rejected. `register_accelerated` returning `Ok` therefore always
/// means the factory will be (or was) consulted.
enum Registration {
    Open(Option<AcceleratedFactory>),
    Committed,
}

static REGISTRATION: RwLock<Registration> = RwLock::new(Registration::Open(None));
static ENGINE: OnceLock<Engine> = OnceLock::new();

fn try_register(
    slot: &RwLock<Registration>,
    factory: AcceleratedFactory,
) -> Result<(), BackendError> {
    match &mut *slot.write() {
        Registration::Committed => Err(BackendError::new(
            "backend selector already committed to a strategy",
        )),
        Registration::Open(pending) => {
            *pending = Some(factory);
            Ok(())
        }
    }
}

/// Close the slot and take whatever factory was registered.
fn commit_registration(slot: &RwLock<Registration>) -> Option<AcceleratedFactory> {
    let mut registration = slot.write();
    let pending = match &*registration {
        Registration::Open(pending) => *pending,
        Registration::Committed => None,
    };
    *registration = Registration::Committed;
    pending
}

/// Register a factory for the accelerated backend.
///
/// Must be called before the first matching operation; once the
/// selector has committed to a strategy the registration is rejected.
pub fn register_accelerated(factory: AcceleratedFactory) -> Result<(), BackendError> {
    try_register(&REGISTRATION, factory)
}

/// The process-wide engine, initializing it on first use.
///
/// Initialization is single-flight and idempotent: the first caller
/// runs the acquisition attempt to completion, concurrent callers
/// block until the strategy is committed, and later calls are no-ops.
pub fn engine() -> &'static Engine {
    ENGINE.get_or_init(|| {
        match commit_registration(&REGISTRATION) {
            Some(acquire) => match acquire() {
                Ok(backend) => {
                    tracing::debug!("match engine: accelerated backend active");
                    Engine::accelerated(backend)
                }
                Err(error) => {
                    tracing::warn!("accelerated backend unavailable ({error}); falling back to interpreted matching");
                    Engine::interpreted()
                }
            },
            None => {
                tracing::debug!("match engine: no accelerated backend registered, using interpreted matching");
                Engine::interpreted()
            }
        }
    })
}

/// Force backend selection now instead of on first match.
pub fn ensure_initialized() {
    let _ = engine();
}

/// Whether the process-wide engine runs the accelerated backend.
pub fn using_accelerated() -> bool {
    engine().using_accelerated()
}
