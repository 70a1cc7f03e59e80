//! Identity-equality strategies for primitives and text.

use crate::model::ComparisonResult;
use crate::strategy::Diffable;

/// Build a [`ComparisonResult`] from two already-rendered primitive values.
pub(crate) fn primitive_result(
    equal: bool,
    actual: String,
    expected: String,
) -> ComparisonResult {
    if equal {
        ComparisonResult::PrimitiveIdentical { value: actual }
    } else {
        ComparisonResult::PrimitiveDifference { actual, expected }
    }
}

macro_rules! primitive_diffable {
    ($($ty:ty),+ $(,)?) => {$(
        impl Diffable for $ty {
            fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
                primitive_result(actual == expected, Self::show(actual), Self::show(expected))
            }

            fn show(value: &Self) -> String {
                value.to_string()
            }
        }
    )+};
}

primitive_diffable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

// Textual values render quoted, so `"a" != "b"` is unambiguous even when a
// value contains spaces or diff markers.
macro_rules! textual_diffable {
    ($($ty:ty),+ $(,)?) => {$(
        impl Diffable for $ty {
            fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
                primitive_result(actual == expected, Self::show(actual), Self::show(expected))
            }

            fn show(value: &Self) -> String {
                format!("{:?}", value)
            }
        }
    )+};
}

textual_diffable!(str, String, char);
