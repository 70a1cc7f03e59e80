//! Comparison result model.
//!
//! A single closed sum type describing the outcome of comparing two values of
//! the same static type. Every variant is immutable and self-contained: it
//! carries pre-rendered element strings and fully resolved nested results, so
//! [`render`](ComparisonResult::render) is a pure tree walk that never
//! re-inspects the original values.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Unordered partitions are stored sorted for deterministic serialization.

use serde::{Deserialize, Serialize};

/// Outcome of comparing an `(actual, expected)` pair.
///
/// Identical variants carry just enough of the original value to render it
/// unchanged (record types keep only the type name). Different variants carry
/// the structured partitions the renderer needs to describe exactly where the
/// two sides diverge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ComparisonResult {
    // ----- identical -----
    /// Two equal primitive values; `value` is the captured rendering.
    PrimitiveIdentical { value: String },
    /// Two equal stack-trace frames.
    FrameIdentical { frame: String },
    /// Two equal captured failures; `summary` is `kind: message`.
    FailureIdentical { summary: String },
    /// Two equal collections of any shape, tagged with the collection name
    /// (`Vec`, `Array`, `HashSet`, `BTreeMap`, ...). Map entries are stored
    /// pre-rendered as `key -> value`.
    CollectionIdentical { tag: String, elements: Vec<String> },
    /// Two equal options; `None` for absent, `Some(rendered)` for present.
    OptionIdentical { value: Option<String> },
    /// Two equal eithers on the same side.
    EitherIdentical { left: bool, value: String },
    /// Two equal results on the same side.
    ResultIdentical { ok: bool, value: String },
    /// Two field-equal records; only the type name is kept.
    StructIdentical { type_name: String },
    /// Two raw-equal values of an opaque type.
    OtherIdentical { value: String },

    // ----- different -----
    /// Two unequal primitive values, both renderings captured.
    PrimitiveDifference { actual: String, expected: String },
    /// Two unequal stack-trace frames.
    FrameDifference { actual: String, expected: String },
    /// Two unequal captured failures: nested diffs of the failure kind, the
    /// message, and the ordered frame trace.
    FailureDifference {
        kind: Box<ComparisonResult>,
        message: Box<ComparisonResult>,
        trace: Box<ComparisonResult>,
    },
    /// Positional sequence difference: per-index results in order, plus
    /// trailing elements present on only one side.
    SeqDifference {
        tag: String,
        results: Vec<ComparisonResult>,
        added: Vec<String>,
        removed: Vec<String>,
    },
    /// Fixed-size array difference. Same-typed arrays always have equal
    /// length, so only the per-index results are needed.
    ArrayDifference { results: Vec<ComparisonResult> },
    /// Membership-based set difference.
    SetDifference {
        tag: String,
        identical: Vec<String>,
        added: Vec<String>,
        removed: Vec<String>,
    },
    /// Key-based map difference.
    MapDifference {
        tag: String,
        identical: Vec<MapEntry>,
        changed: Vec<ChangedMapEntry>,
        added: Vec<MapEntry>,
        removed: Vec<MapEntry>,
    },
    /// Both sides present, contained values differ.
    OptionDifference { inner: Box<ComparisonResult> },
    /// One side present, the other absent.
    OptionShapeDifference { actual_present: bool },
    /// Both sides on the same Left/Right side, contained values differ.
    EitherDifference { left: bool, inner: Box<ComparisonResult> },
    /// The two sides disagree on Left vs Right.
    EitherShapeDifference { actual_left: bool },
    /// Both sides on the same Ok/Err side, contained values differ.
    ResultDifference { ok: bool, inner: Box<ComparisonResult> },
    /// The two sides disagree on Ok vs Err.
    ResultShapeDifference { actual_ok: bool },
    /// Record difference: one comparison per declared field, in declaration
    /// order, identical fields included (the renderer partitions them).
    StructDifference {
        type_name: String,
        fields: Vec<FieldComparison>,
    },
    /// Raw-equality fallback difference. `type_name` is populated when both
    /// string forms collide, to disambiguate the rendering.
    OtherDifference {
        actual: String,
        expected: String,
        type_name: Option<String>,
    },
}

/// A rendered `key -> value` map entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapEntry {
    pub key: String,
    pub value: String,
}

/// A map entry whose key exists on both sides with differing values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangedMapEntry {
    pub key: String,
    pub diff: ComparisonResult,
}

/// The atomic unit of record diffing: one comparison per declared field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldComparison {
    pub field: String,
    pub result: ComparisonResult,
}

impl FieldComparison {
    pub fn new(field: impl Into<String>, result: ComparisonResult) -> Self {
        Self {
            field: field.into(),
            result,
        }
    }

    /// Whether this field compared identical on both sides.
    pub fn is_identical(&self) -> bool {
        self.result.is_identical()
    }
}

impl ComparisonResult {
    /// Whether the comparison found both sides identical.
    pub fn is_identical(&self) -> bool {
        matches!(
            self,
            ComparisonResult::PrimitiveIdentical { .. }
                | ComparisonResult::FrameIdentical { .. }
                | ComparisonResult::FailureIdentical { .. }
                | ComparisonResult::CollectionIdentical { .. }
                | ComparisonResult::OptionIdentical { .. }
                | ComparisonResult::EitherIdentical { .. }
                | ComparisonResult::ResultIdentical { .. }
                | ComparisonResult::StructIdentical { .. }
                | ComparisonResult::OtherIdentical { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_variants_report_identical() {
        let results = [
            ComparisonResult::PrimitiveIdentical { value: "1".into() },
            ComparisonResult::StructIdentical {
                type_name: "Point".into(),
            },
            ComparisonResult::OptionIdentical { value: None },
            ComparisonResult::OtherIdentical { value: "x".into() },
        ];
        for r in results {
            assert!(r.is_identical(), "expected identical: {:?}", r);
        }
    }

    #[test]
    fn different_variants_report_different() {
        let results = [
            ComparisonResult::PrimitiveDifference {
                actual: "1".into(),
                expected: "2".into(),
            },
            ComparisonResult::OptionShapeDifference {
                actual_present: true,
            },
            ComparisonResult::ArrayDifference {
                results: Vec::new(),
            },
        ];
        for r in results {
            assert!(!r.is_identical(), "expected different: {:?}", r);
        }
    }

    #[test]
    fn field_comparison_delegates_to_result() {
        let same = FieldComparison::new(
            "age",
            ComparisonResult::PrimitiveIdentical { value: "1".into() },
        );
        assert!(same.is_identical());
        let diff = FieldComparison::new(
            "age",
            ComparisonResult::PrimitiveDifference {
                actual: "1".into(),
                expected: "2".into(),
            },
        );
        assert!(!diff.is_identical());
    }
}
