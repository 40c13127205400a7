//! Runtime values for the sift match engine.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::heap::Heap;

/// Native function signature for function-shaped values.
///
/// Functions are values only so that type-based dispatch can classify
/// them; the engine itself never calls through this pointer.
pub type NativeFn = fn(&[Value]) -> Value;

/// Dynamic runtime value.
///
/// Covers the categories the match engine discriminates between:
/// scalars, strings, sequences, attribute-bearing maps, functions, and
/// the emulated `Option`/`Result` sum types.
#[derive(Clone)]
pub enum Value {
    /// Nullish value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(Heap<String>),
    /// Sequence of values.
    List(Heap<Vec<Value>>),
    /// Attribute-bearing value: string keys mapped to values.
    Map(Heap<FxHashMap<String, Value>>),

    // Emulated sum types
    /// Option: Some(value).
    Some(Heap<Value>),
    /// Option: None.
    None,
    /// Result: Ok(value).
    Ok(Heap<Value>),
    /// Result: Err(error).
    Err(Heap<Value>),

    /// Function value.
    Function(NativeFn, &'static str),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value from string-keyed entries.
    ///
    /// ```
    /// # use sift_value::Value;
    /// let v = Value::map([("a", Value::Int(1)), ("b", Value::Int(2))]);
    /// assert!(v.as_map().is_some());
    /// ```
    #[inline]
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(Heap::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Create a Some value.
    #[inline]
    pub fn some(v: Value) -> Self {
        Value::Some(Heap::new(v))
    }

    /// Create an Ok value.
    #[inline]
    pub fn ok(v: Value) -> Self {
        Value::Ok(Heap::new(v))
    }

    /// Create an Err value.
    #[inline]
    pub fn err(e: Value) -> Self {
        Value::Err(Heap::new(e))
    }
}

// Value Methods

impl Value {
    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => Option::None,
        }
    }

    /// Try to convert to a float. Integers always widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            #[allow(
                clippy::cast_precision_loss,
                reason = "magnitudes beyond 2^53 round to the nearest representable float"
            )]
            Value::Int(n) => Some(*n as f64),
            _ => Option::None,
        }
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => Option::None,
        }
    }

    /// Try to convert to a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => Option::None,
        }
    }

    /// Try to convert to a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => Option::None,
        }
    }

    /// Try to convert to a map.
    pub fn as_map(&self) -> Option<&FxHashMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => Option::None,
        }
    }

    /// Look up an attribute on a map-shaped value.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// True iff this is an Option in the Some state.
    pub fn is_some(&self) -> bool {
        matches!(self, Value::Some(_))
    }

    /// True iff this is an Option in the None state.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// True iff this is a Result in the Ok state.
    pub fn is_ok(&self) -> bool {
        matches!(self, Value::Ok(_))
    }

    /// True iff this is a Result in the Err state.
    pub fn is_err(&self) -> bool {
        matches!(self, Value::Err(_))
    }

    /// Payload of a Some-Option.
    pub fn some_value(&self) -> Option<&Value> {
        match self {
            Value::Some(v) => Some(v),
            _ => Option::None,
        }
    }

    /// Payload of an Ok-Result.
    pub fn ok_value(&self) -> Option<&Value> {
        match self {
            Value::Ok(v) => Some(v),
            _ => Option::None,
        }
    }

    /// Payload of an Err-Result.
    pub fn err_value(&self) -> Option<&Value> {
        match self {
            Value::Err(e) => Some(e),
            _ => Option::None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Some(_) | Value::None => "Option",
            Value::Ok(_) | Value::Err(_) => "Result",
            Value::Function(..) => "function",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{k}\": {v}")?;
                }
                write!(f, "}}")
            }
            Value::Some(v) => write!(f, "Some({})", &**v),
            Value::None => write!(f, "None"),
            Value::Ok(v) => write!(f, "Ok({})", &**v),
            Value::Err(e) => write!(f, "Err({})", &**e),
            Value::Function(_, name) => write!(f, "<function {name}>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "strict equality is the literal-match rule")]
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|bv| v == bv))
            }
            (Value::Some(a), Value::Some(b))
            | (Value::Ok(a), Value::Ok(b))
            | (Value::Err(a), Value::Err(b)) => a == b,
            // Named native functions are equal by name
            (Value::Function(_, name_a), Value::Function(_, name_b)) => name_a == name_b,
            _ => false,
        }
    }
}
