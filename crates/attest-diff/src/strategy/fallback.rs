//! Structural and raw-equality fallback strategies.
//!
//! Record-like types opt in to field-by-field structural comparison with
//! `#[derive(Diffable)]`; the generated impl feeds its ordered field
//! comparisons through [`diff_record`]. Opaque types that cannot be
//! decomposed fall back to raw equality via [`diff_with_eq`], registered with
//! the [`diffable_by_eq!`](crate::diffable_by_eq) macro.

use std::fmt::Debug;

use crate::model::{ComparisonResult, FieldComparison};

/// Fold ordered per-field comparisons into a record result.
///
/// Identical iff every field compared identical; otherwise the full field
/// list (identical fields included) is carried for rendering.
pub fn diff_record(type_name: &str, fields: Vec<FieldComparison>) -> ComparisonResult {
    if fields.iter().all(FieldComparison::is_identical) {
        ComparisonResult::StructIdentical {
            type_name: type_name.to_string(),
        }
    } else {
        ComparisonResult::StructDifference {
            type_name: type_name.to_string(),
            fields,
        }
    }
}

/// Raw-equality comparison for opaque types.
///
/// `actual == expected` decides identical vs different; rendering shows both
/// debug representations. When the two sides differ but their string forms
/// collide, both sides are annotated with the full type path so the message
/// stays unambiguous.
pub fn diff_with_eq<T: PartialEq + Debug>(actual: &T, expected: &T) -> ComparisonResult {
    if actual == expected {
        ComparisonResult::OtherIdentical {
            value: format!("{:?}", actual),
        }
    } else {
        let shown_actual = format!("{:?}", actual);
        let shown_expected = format!("{:?}", expected);
        let type_name = if shown_actual == shown_expected {
            tracing::trace!(
                type_name = std::any::type_name::<T>(),
                "string forms collide, annotating with type path"
            );
            Some(std::any::type_name::<T>().to_string())
        } else {
            None
        };
        ComparisonResult::OtherDifference {
            actual: shown_actual,
            expected: shown_expected,
            type_name,
        }
    }
}

/// Register the raw-equality strategy for opaque types that cannot be
/// decomposed structurally.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct Handle(u64);
///
/// attest_diff::diffable_by_eq!(Handle);
///
/// let r = attest_diff::diff(&Handle(1), &Handle(2));
/// assert_eq!(r.render(), "Handle(1) != Handle(2)");
/// ```
#[macro_export]
macro_rules! diffable_by_eq {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Diffable for $ty {
            fn diff(actual: &Self, expected: &Self) -> $crate::ComparisonResult {
                $crate::diff_with_eq(actual, expected)
            }

            fn show(value: &Self) -> ::std::string::String {
                ::std::format!("{:?}", value)
            }
        }
    )+};
}
