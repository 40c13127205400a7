//! Match tables: ordered (pattern, handler) case lists.
//!
//! A table is built in one of two forms:
//!
//! - **keyed** - the map form of the original host: string keys where
//!   `"Some"`, `"None"`, `"Ok"`, `"Err"` are reserved for shape tokens,
//!   `"_"` is the wildcard default, and any other key matches the value
//!   by string equality. Lowered deterministically to ordered pairs,
//!   with the default forced last so it is only reached when nothing
//!   else matched.
//! - **ordered** - explicit `(Pattern, Handler)` pairs.
//!
//! Either way, ordering is caller-significant: the first matching pair
//! wins.

use sift_value::Value;

use crate::pattern::Pattern;

/// Handler invoked with the extracted value when its case matches.
pub type Handler = Box<dyn Fn(Value) -> Value>;

/// Indices of reserved-key entries in a keyed table.
///
/// Lets `match_value` dispatch directly on Option/Result state without
/// a generic scan. Safe only for keyed tables: every non-reserved entry
/// is a string literal, which can never equal an Option or Result
/// value, so direct dispatch is observationally identical to the scan.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct KeyedShape {
    pub(crate) some: Option<usize>,
    pub(crate) none: Option<usize>,
    pub(crate) ok: Option<usize>,
    pub(crate) err: Option<usize>,
}

/// An ordered table of (pattern, handler) cases.
pub struct CaseTable {
    entries: Vec<(Pattern, Handler)>,
    default: Option<Handler>,
    keyed: Option<KeyedShape>,
}

impl CaseTable {
    /// Start a keyed (map-form) table.
    pub fn keyed() -> KeyedCases {
        KeyedCases {
            entries: Vec::new(),
            shape: KeyedShape::default(),
            default: None,
        }
    }

    /// Start an ordered (explicit pairs) table.
    pub fn ordered() -> OrderedCases {
        OrderedCases {
            entries: Vec::new(),
            default: None,
        }
    }

    /// Number of cases, excluding the default.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no cases and no default.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.default.is_none()
    }

    /// The lowered cases, in evaluation order.
    ///
    /// Exposed for accelerated backends, which must scan tables with
    /// the same first-match-wins rule.
    pub fn entries(&self) -> &[(Pattern, Handler)] {
        &self.entries
    }

    /// The trailing fallback handler, if any.
    pub fn default_handler(&self) -> Option<&Handler> {
        self.default.as_ref()
    }

    pub(crate) fn keyed_shape(&self) -> Option<KeyedShape> {
        self.keyed
    }
}

/// Builder for the keyed (map) form.
///
/// Keys lower per the table rules: reserved names become shape tokens,
/// `"_"` becomes the trailing wildcard, anything else a string literal.
/// Insertion order of non-default keys is preserved.
pub struct KeyedCases {
    entries: Vec<(Pattern, Handler)>,
    shape: KeyedShape,
    default: Option<Handler>,
}

impl KeyedCases {
    /// Add a case under a symbolic key.
    pub fn on<F>(mut self, key: &str, handler: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        let handler: Handler = Box::new(handler);
        let index = self.entries.len();
        match key {
            "Some" => {
                self.shape.some.get_or_insert(index);
                self.entries.push((Pattern::SomeTok, handler));
            }
            "None" => {
                self.shape.none.get_or_insert(index);
                self.entries.push((Pattern::NoneTok, handler));
            }
            "Ok" => {
                self.shape.ok.get_or_insert(index);
                self.entries.push((Pattern::OkTok, handler));
            }
            "Err" => {
                self.shape.err.get_or_insert(index);
                self.entries.push((Pattern::ErrTok, handler));
            }
            "_" => self.default = Some(handler),
            literal => self
                .entries
                .push((Pattern::literal(Value::string(literal)), handler)),
        }
        self
    }

    /// Finish the table.
    pub fn build(self) -> CaseTable {
        CaseTable {
            entries: self.entries,
            default: self.default,
            keyed: Some(self.shape),
        }
    }
}

/// Builder for the ordered (explicit pairs) form.
pub struct OrderedCases {
    entries: Vec<(Pattern, Handler)>,
    default: Option<Handler>,
}

impl OrderedCases {
    /// Append a case. Earlier cases win.
    pub fn case<F>(mut self, pattern: Pattern, handler: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        self.entries.push((pattern, Box::new(handler)));
        self
    }

    /// Set the fallback handler, reached only when no case matched.
    pub fn default<F>(mut self, handler: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        self.default = Some(Box::new(handler));
        self
    }

    /// Finish the table.
    pub fn build(self) -> CaseTable {
        CaseTable {
            entries: self.entries,
            default: self.default,
            keyed: None,
        }
    }
}

#[cfg(test)]
mod tests;
