//! Strategies for structural containers: sequences, arrays, sets and maps.
//!
//! Ordered containers are aligned purely by position (no reordering
//! heuristic); unordered containers are partitioned by membership or key.
//! The shared partition logic lives in free functions parameterized over the
//! element strategy, so every container impl stays a thin adapter.
//!
//! Partitions extracted from hash-based containers are sorted before being
//! captured, so renderings are deterministic across iteration orders.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use crate::model::{ChangedMapEntry, ComparisonResult, MapEntry};
use crate::strategy::Diffable;

/// Align two sequences by position.
///
/// Per-index results are collected in order; trailing elements present on
/// only one side become `removed` (actual longer) or `added` (expected
/// longer). Identical iff the lengths match and every position is identical.
pub(crate) fn diff_positional<T: Diffable>(
    tag: &str,
    actual: &[T],
    expected: &[T],
) -> ComparisonResult {
    let shared = actual.len().min(expected.len());
    let results: Vec<ComparisonResult> = actual[..shared]
        .iter()
        .zip(&expected[..shared])
        .map(|(a, e)| T::diff(a, e))
        .collect();
    let added: Vec<String> = expected[shared..].iter().map(T::show).collect();
    let removed: Vec<String> = actual[shared..].iter().map(T::show).collect();

    if added.is_empty() && removed.is_empty() && results.iter().all(ComparisonResult::is_identical)
    {
        ComparisonResult::CollectionIdentical {
            tag: tag.to_string(),
            elements: actual.iter().map(T::show).collect(),
        }
    } else {
        ComparisonResult::SeqDifference {
            tag: tag.to_string(),
            results,
            added,
            removed,
        }
    }
}

/// Partition two set-like collections by membership.
///
/// `identical` holds elements present on both sides, `added` elements present
/// only in `actual`, `removed` elements present only in `expected`. `sorted`
/// orders the partitions by rendered form, for containers whose iteration
/// order is not deterministic; ordered containers pass `false` and keep
/// their natural element order.
pub(crate) fn diff_membership<'a, T: Diffable + 'a>(
    tag: &str,
    actual: impl Iterator<Item = &'a T>,
    expected: impl Iterator<Item = &'a T>,
    in_actual: impl Fn(&T) -> bool,
    in_expected: impl Fn(&T) -> bool,
    sorted: bool,
) -> ComparisonResult {
    let mut identical = Vec::new();
    let mut added = Vec::new();
    for elem in actual {
        if in_expected(elem) {
            identical.push(T::show(elem));
        } else {
            added.push(T::show(elem));
        }
    }
    let mut removed: Vec<String> = expected
        .filter(|e| !in_actual(*e))
        .map(T::show)
        .collect();
    if sorted {
        identical.sort();
        added.sort();
        removed.sort();
    }

    if added.is_empty() && removed.is_empty() {
        ComparisonResult::CollectionIdentical {
            tag: tag.to_string(),
            elements: identical,
        }
    } else {
        ComparisonResult::SetDifference {
            tag: tag.to_string(),
            identical,
            added,
            removed,
        }
    }
}

/// Partition two keyed mappings by key.
///
/// Keys present on both sides land in `identical` or, when the values
/// differ, in `changed` with the nested value diff. Keys present on only one
/// side become `added` (actual) or `removed` (expected). `sorted` orders the
/// partitions by rendered key; ordered maps pass `false` and keep their
/// natural key order.
pub(crate) fn diff_keyed<'a, K, V>(
    tag: &str,
    actual: impl Iterator<Item = (&'a K, &'a V)>,
    expected: impl Iterator<Item = (&'a K, &'a V)>,
    expected_get: impl Fn(&K) -> Option<&'a V>,
    actual_has: impl Fn(&K) -> bool,
    sorted: bool,
) -> ComparisonResult
where
    K: Diffable + 'a,
    V: Diffable + 'a,
{
    let mut identical = Vec::new();
    let mut changed = Vec::new();
    let mut added = Vec::new();
    for (k, v) in actual {
        match expected_get(k) {
            Some(ev) => {
                let diff = V::diff(v, ev);
                if diff.is_identical() {
                    identical.push(MapEntry {
                        key: K::show(k),
                        value: V::show(v),
                    });
                } else {
                    changed.push(ChangedMapEntry {
                        key: K::show(k),
                        diff,
                    });
                }
            }
            None => added.push(MapEntry {
                key: K::show(k),
                value: V::show(v),
            }),
        }
    }
    let mut removed: Vec<MapEntry> = expected
        .filter(|(k, _)| !actual_has(*k))
        .map(|(k, v)| MapEntry {
            key: K::show(k),
            value: V::show(v),
        })
        .collect();
    if sorted {
        identical.sort_by(|a, b| a.key.cmp(&b.key));
        changed.sort_by(|a, b| a.key.cmp(&b.key));
        added.sort_by(|a, b| a.key.cmp(&b.key));
        removed.sort_by(|a, b| a.key.cmp(&b.key));
    }

    if changed.is_empty() && added.is_empty() && removed.is_empty() {
        ComparisonResult::CollectionIdentical {
            tag: tag.to_string(),
            elements: identical
                .into_iter()
                .map(|e| format!("{} -> {}", e.key, e.value))
                .collect(),
        }
    } else {
        ComparisonResult::MapDifference {
            tag: tag.to_string(),
            identical,
            changed,
            added,
            removed,
        }
    }
}

fn show_elements<'a, T: Diffable + 'a>(
    tag: &str,
    elements: impl Iterator<Item = &'a T>,
    sorted: bool,
) -> String {
    let mut shown: Vec<String> = elements.map(T::show).collect();
    if sorted {
        shown.sort();
    }
    format!("{}({})", tag, shown.join(", "))
}

fn show_entries<'a, K, V>(
    tag: &str,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
    sorted: bool,
) -> String
where
    K: Diffable + 'a,
    V: Diffable + 'a,
{
    let mut shown: Vec<String> = entries
        .map(|(k, v)| format!("{} -> {}", K::show(k), V::show(v)))
        .collect();
    if sorted {
        shown.sort();
    }
    format!("{}({})", tag, shown.join(", "))
}

impl<T: Diffable> Diffable for [T] {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        diff_positional("Seq", actual, expected)
    }

    fn show(value: &Self) -> String {
        show_elements("Seq", value.iter(), false)
    }
}

impl<T: Diffable> Diffable for Vec<T> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        diff_positional("Vec", actual, expected)
    }

    fn show(value: &Self) -> String {
        show_elements("Vec", value.iter(), false)
    }
}

impl<T: Diffable, const N: usize> Diffable for [T; N] {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        // Same static type means same length, so there is never an
        // added/removed partition for arrays.
        let results: Vec<ComparisonResult> = actual
            .iter()
            .zip(expected.iter())
            .map(|(a, e)| T::diff(a, e))
            .collect();
        if results.iter().all(ComparisonResult::is_identical) {
            ComparisonResult::CollectionIdentical {
                tag: "Array".to_string(),
                elements: actual.iter().map(T::show).collect(),
            }
        } else {
            ComparisonResult::ArrayDifference { results }
        }
    }

    fn show(value: &Self) -> String {
        show_elements("Array", value.iter(), false)
    }
}

impl<T: Diffable + Eq + Hash> Diffable for HashSet<T> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        diff_membership(
            "HashSet",
            actual.iter(),
            expected.iter(),
            |e| actual.contains(e),
            |e| expected.contains(e),
            true,
        )
    }

    fn show(value: &Self) -> String {
        show_elements("HashSet", value.iter(), true)
    }
}

impl<T: Diffable + Ord> Diffable for BTreeSet<T> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        diff_membership(
            "BTreeSet",
            actual.iter(),
            expected.iter(),
            |e| actual.contains(e),
            |e| expected.contains(e),
            false,
        )
    }

    fn show(value: &Self) -> String {
        show_elements("BTreeSet", value.iter(), false)
    }
}

impl<K: Diffable + Eq + Hash, V: Diffable> Diffable for HashMap<K, V> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        diff_keyed(
            "HashMap",
            actual.iter(),
            expected.iter(),
            |k| expected.get(k),
            |k| actual.contains_key(k),
            true,
        )
    }

    fn show(value: &Self) -> String {
        show_entries("HashMap", value.iter(), true)
    }
}

impl<K: Diffable + Ord, V: Diffable> Diffable for BTreeMap<K, V> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        diff_keyed(
            "BTreeMap",
            actual.iter(),
            expected.iter(),
            |k| expected.get(k),
            |k| actual.contains_key(k),
            false,
        )
    }

    fn show(value: &Self) -> String {
        show_entries("BTreeMap", value.iter(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_trailing_actual_is_removed() {
        let r = diff_positional("Vec", &[1, 2, 3], &[1, 2]);
        match r {
            ComparisonResult::SeqDifference {
                ref added,
                ref removed,
                ..
            } => {
                assert!(added.is_empty());
                assert_eq!(removed, &["3".to_string()]);
            }
            other => panic!("expected SeqDifference, got {:?}", other),
        }
    }

    #[test]
    fn positional_trailing_expected_is_added() {
        let r = diff_positional("Vec", &[1], &[1, 9]);
        match r {
            ComparisonResult::SeqDifference {
                ref added,
                ref removed,
                ..
            } => {
                assert_eq!(added, &["9".to_string()]);
                assert!(removed.is_empty());
            }
            other => panic!("expected SeqDifference, got {:?}", other),
        }
    }

    #[test]
    fn membership_partitions_both_directions() {
        let actual: HashSet<i32> = [1, 2].into_iter().collect();
        let expected: HashSet<i32> = [2, 3].into_iter().collect();
        let r = HashSet::diff(&actual, &expected);
        match r {
            ComparisonResult::SetDifference {
                ref identical,
                ref added,
                ref removed,
                ..
            } => {
                assert_eq!(identical, &["2".to_string()]);
                assert_eq!(added, &["1".to_string()]);
                assert_eq!(removed, &["3".to_string()]);
            }
            other => panic!("expected SetDifference, got {:?}", other),
        }
    }

    #[test]
    fn keyed_value_change_is_exactly_one_changed_entry() {
        let actual: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let mut expected = actual.clone();
        expected.insert("b", 3);
        let r = BTreeMap::diff(&actual, &expected);
        match r {
            ComparisonResult::MapDifference {
                ref identical,
                ref changed,
                ref added,
                ref removed,
                ..
            } => {
                assert_eq!(identical.len(), 1);
                assert_eq!(changed.len(), 1);
                assert_eq!(changed[0].key, "\"b\"");
                assert!(added.is_empty());
                assert!(removed.is_empty());
            }
            other => panic!("expected MapDifference, got {:?}", other),
        }
    }

    #[test]
    fn btree_set_keeps_natural_element_order() {
        let actual: BTreeSet<i32> = [2, 10].into_iter().collect();
        let r = BTreeSet::diff(&actual, &actual.clone());
        assert_eq!(r.render(), "BTreeSet(2, 10)");

        let expected: BTreeSet<i32> = [10, 30].into_iter().collect();
        let r = BTreeSet::diff(&actual, &expected);
        assert_eq!(r.render(), "BTreeSet(10, added: 2, removed: 30)");
    }

    #[test]
    fn btree_map_keeps_natural_key_order() {
        let actual: BTreeMap<i32, i32> = [(2, 20), (10, 100)].into_iter().collect();
        let r = BTreeMap::diff(&actual, &actual.clone());
        assert_eq!(r.render(), "BTreeMap(2 -> 20, 10 -> 100)");
    }

    #[test]
    fn array_diff_has_no_length_partitions() {
        let r = <[i32; 3]>::diff(&[1, 2, 3], &[1, 9, 3]);
        assert_eq!(r.render(), "Array(1, 3, 2 != 9)");
    }
}
