//! Sift Value - Dynamic tagged values for the sift match engine.
//!
//! This crate provides:
//! - The runtime `Value` type (scalars, strings, lists, maps, functions)
//! - Emulated sum types: `Some`/`None` for Option, `Ok`/`Err` for Result
//! - The `Heap<T>` wrapper enforcing Arc usage through factory methods
//! - The `is` type-predicate library used by type-based dispatch
//!
//! # Arc Enforcement
//!
//! All heap allocations go through factory methods on `Value`
//! (`Value::string`, `Value::list`, `Value::some`, ...). The `Heap<T>`
//! wrapper has a crate-private constructor, so external code cannot
//! build heap values directly.
//!
//! # Thread Safety
//!
//! Heap variants use `Arc` internally, so values are cheap to clone and
//! safe to share across threads. A `Value` tree is immutable once built;
//! there is no interior mutability, so value graphs are always acyclic.

mod heap;
pub mod is;
mod value;

pub use heap::Heap;
pub use value::{NativeFn, Value};
