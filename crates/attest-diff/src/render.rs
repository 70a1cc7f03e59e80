//! Human-readable rendering of comparison results.
//!
//! The strings produced here are the test-failure-message contract of the
//! framework: an identical result renders with no diff markers, a different
//! result renders `actual != expected` at every diverging leaf, wrapper shape
//! mismatches render `Some(...) ==> None` style arrows, and collections render
//! their non-empty partitions comma-joined inside the collection tag.
//!
//! Rendering is a pure walk over already-captured data: idempotent and
//! bounded by the depth of the result tree.

use crate::model::{ChangedMapEntry, ComparisonResult, FieldComparison, MapEntry};

impl ComparisonResult {
    /// Render this result tree to its display string.
    ///
    /// Never fails and always terminates; calling it twice yields the same
    /// string.
    pub fn render(&self) -> String {
        match self {
            // ----- identical -----
            ComparisonResult::PrimitiveIdentical { value } => value.clone(),
            ComparisonResult::FrameIdentical { frame } => frame.clone(),
            ComparisonResult::FailureIdentical { summary } => summary.clone(),
            ComparisonResult::CollectionIdentical { tag, elements } => {
                wrap(tag, elements.join(", "))
            }
            ComparisonResult::OptionIdentical { value } => match value {
                Some(v) => wrap("Some", v.clone()),
                None => "None".to_string(),
            },
            ComparisonResult::EitherIdentical { left, value } => {
                wrap(either_tag(*left), value.clone())
            }
            ComparisonResult::ResultIdentical { ok, value } => wrap(result_tag(*ok), value.clone()),
            ComparisonResult::StructIdentical { type_name } => type_name.clone(),
            ComparisonResult::OtherIdentical { value } => value.clone(),

            // ----- different -----
            ComparisonResult::PrimitiveDifference { actual, expected }
            | ComparisonResult::FrameDifference { actual, expected } => {
                format!("{} != {}", actual, expected)
            }
            ComparisonResult::FailureDifference {
                kind,
                message,
                trace,
            } => wrap(
                "Failure",
                format!(
                    "kind: {}, message: {}, trace: {}",
                    kind.render(),
                    message.render(),
                    trace.render()
                ),
            ),
            ComparisonResult::SeqDifference {
                tag,
                results,
                added,
                removed,
            } => {
                let mut parts = partition_results(results);
                push_labeled(&mut parts, "added", added);
                push_labeled(&mut parts, "removed", removed);
                wrap(tag, parts.join(", "))
            }
            ComparisonResult::ArrayDifference { results } => {
                wrap("Array", partition_results(results).join(", "))
            }
            ComparisonResult::SetDifference {
                tag,
                identical,
                added,
                removed,
            } => {
                let mut parts: Vec<String> = identical.clone();
                push_labeled(&mut parts, "added", added);
                push_labeled(&mut parts, "removed", removed);
                wrap(tag, parts.join(", "))
            }
            ComparisonResult::MapDifference {
                tag,
                identical,
                changed,
                added,
                removed,
            } => {
                let mut parts: Vec<String> = identical.iter().map(render_entry).collect();
                parts.extend(changed.iter().map(render_changed_entry));
                let added: Vec<String> = added.iter().map(render_entry).collect();
                let removed: Vec<String> = removed.iter().map(render_entry).collect();
                push_labeled(&mut parts, "added", &added);
                push_labeled(&mut parts, "removed", &removed);
                wrap(tag, parts.join(", "))
            }
            ComparisonResult::OptionDifference { inner } => wrap("Some", inner.render()),
            ComparisonResult::OptionShapeDifference { actual_present } => {
                if *actual_present {
                    "Some(...) ==> None".to_string()
                } else {
                    "None ==> Some(...)".to_string()
                }
            }
            ComparisonResult::EitherDifference { left, inner } => {
                wrap(either_tag(*left), inner.render())
            }
            ComparisonResult::EitherShapeDifference { actual_left } => shape_arrow(
                either_tag(*actual_left),
                either_tag(!*actual_left),
            ),
            ComparisonResult::ResultDifference { ok, inner } => wrap(result_tag(*ok), inner.render()),
            ComparisonResult::ResultShapeDifference { actual_ok } => {
                shape_arrow(result_tag(*actual_ok), result_tag(!*actual_ok))
            }
            ComparisonResult::StructDifference { type_name, fields } => {
                wrap(type_name, render_fields(fields))
            }
            ComparisonResult::OtherDifference {
                actual,
                expected,
                type_name,
            } => match type_name {
                Some(ty) => format!("{}: {} != {}: {}", actual, ty, expected, ty),
                None => format!("{} != {}", actual, expected),
            },
        }
    }
}

impl std::fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// `Tag(body)`.
fn wrap(tag: &str, body: String) -> String {
    format!("{}({})", tag, body)
}

fn either_tag(left: bool) -> &'static str {
    if left {
        "Left"
    } else {
        "Right"
    }
}

fn result_tag(ok: bool) -> &'static str {
    if ok {
        "Ok"
    } else {
        "Err"
    }
}

/// `Some(...) ==> None` style arrow for wrapper shape mismatches, actual
/// side first. The contained values are never shown.
fn shape_arrow(actual: &str, expected: &str) -> String {
    format!("{}(...) ==> {}(...)", actual, expected)
}

/// Render ordered per-position results, identical positions first, then
/// changed positions, preserving relative order within each partition.
fn partition_results(results: &[ComparisonResult]) -> Vec<String> {
    let mut parts: Vec<String> = results
        .iter()
        .filter(|r| r.is_identical())
        .map(ComparisonResult::render)
        .collect();
    parts.extend(
        results
            .iter()
            .filter(|r| !r.is_identical())
            .map(ComparisonResult::render),
    );
    parts
}

/// Append `label: e1, e2` as a single segment when `items` is non-empty.
fn push_labeled(parts: &mut Vec<String>, label: &str, items: &[String]) {
    if !items.is_empty() {
        parts.push(format!("{}: {}", label, items.join(", ")));
    }
}

fn render_entry(entry: &MapEntry) -> String {
    format!("{} -> {}", entry.key, entry.value)
}

fn render_changed_entry(entry: &ChangedMapEntry) -> String {
    format!("{} -> {}", entry.key, entry.diff.render())
}

/// Render record fields in declaration order as `name: rendered`.
fn render_fields(fields: &[FieldComparison]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.result.render()))
        .collect::<Vec<_>>()
        .join(", ")
}
