//! Comparison strategy registry.
//!
//! The registry is the [`Diffable`] trait itself: Rust impl coherence selects
//! exactly one strategy per static type at compile time, so the
//! most-specific-wins ordering of the built-in registrations can never become
//! ambiguous. A type with no implementation simply does not offer
//! [`diff`]; resolution failure is a compile error, not a runtime one.
//!
//! ## Built-in registrations
//!
//! - primitives and text ([`primitive`])
//! - `Option` / `Either` / `Result` wrappers ([`wrapper`])
//! - sequences, arrays, sets and maps, each requiring an element strategy
//!   ([`collection`])
//! - captured failures and trace frames ([`crate::failure`])
//! - structural records via `#[derive(Diffable)]` and the raw-equality
//!   escape hatch for opaque types ([`fallback`])

pub mod collection;
pub mod fallback;
pub mod primitive;
pub mod wrapper;

use crate::model::ComparisonResult;

/// Per-type comparison capability.
///
/// One stateless instance per logical type, resolved once and reused for all
/// comparisons of that type. `diff` is a pure function of its two arguments.
pub trait Diffable {
    /// Compare `actual` against `expected`, producing a fully resolved
    /// result tree.
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult;

    /// Render a single value the way it appears inside diff messages
    /// (textual values quoted).
    fn show(value: &Self) -> String;
}

/// Compare two values of any diffable type.
///
/// The entry point consumed by the matcher layer and the example runner:
/// requires a resolvable strategy for `T`, which the compiler enforces.
pub fn diff<T: Diffable + ?Sized>(actual: &T, expected: &T) -> ComparisonResult {
    T::diff(actual, expected)
}

/// References delegate to the strategy of the pointee.
impl<T: Diffable + ?Sized> Diffable for &T {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        T::diff(actual, expected)
    }

    fn show(value: &Self) -> String {
        T::show(value)
    }
}
