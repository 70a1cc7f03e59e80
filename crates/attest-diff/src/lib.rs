//! Attest structural diffing core.
//!
//! This crate is the description-and-comparison layer of the Attest
//! behavior-testing framework: given two values of the same static type it
//! decides whether they are identical and, if not, builds a structured,
//! human-readable description of exactly where they differ, recursing
//! through wrappers, collections, captured failures and arbitrary record
//! types.
//!
//! ## Entry point
//!
//! ```
//! use attest_diff::diff;
//!
//! let result = diff(&vec![1, 2, 3], &vec![1, 2]);
//! assert!(!result.is_identical());
//! assert_eq!(result.render(), "Vec(1, 2, removed: 3)");
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: every comparison terminates in a [`ComparisonResult`];
//!   "different" is a normal outcome, not an error.
//! - **Compile-time dispatch**: the strategy for a type is resolved by trait
//!   coherence; a type without a strategy does not offer `diff` at all.
//! - **Pure rendering**: result trees hold pre-rendered data, so
//!   [`ComparisonResult::render`] is an idempotent, side-effect-free walk.
//! - **Determinism**: partitions extracted from hash-based containers are
//!   sorted, so identical inputs always render identically.
//!
//! Record types opt into structural field-by-field comparison with
//! `#[derive(Diffable)]`; opaque types register raw equality with
//! [`diffable_by_eq!`].

pub mod failure;
pub mod logging;
pub mod model;
pub mod render;
pub mod strategy;

// Re-export commonly used types
pub use attest_diff_derive::Diffable;
pub use failure::{Failure, TraceFrame};
pub use model::{ChangedMapEntry, ComparisonResult, FieldComparison, MapEntry};
pub use strategy::fallback::{diff_record, diff_with_eq};
pub use strategy::{diff, Diffable};
