//! Primitive comparison contract: identity equality, quoted text, and the
//! `!=` marker appearing only on differences.

use attest_diff::diff;
use proptest::prelude::*;

#[test]
fn equal_integers_render_without_marker() {
    let r = diff(&42i32, &42i32);
    assert!(r.is_identical());
    assert!(!r.render().contains("!="));
    assert_eq!(r.render(), "42");
}

#[test]
fn unequal_integers_render_actual_then_expected() {
    assert_eq!(diff(&1i64, &2i64).render(), "1 != 2");
    assert_eq!(diff(&7u8, &9u8).render(), "7 != 9");
}

#[test]
fn unequal_floats_render_both_sides() {
    assert_eq!(diff(&1.5f64, &2.5f64).render(), "1.5 != 2.5");
    assert!(diff(&0.5f32, &0.5f32).is_identical());
}

#[test]
fn booleans_compare_by_identity() {
    assert!(diff(&true, &true).is_identical());
    assert_eq!(diff(&false, &true).render(), "false != true");
}

#[test]
fn strings_render_quoted() {
    let r = diff(&"hello".to_string(), &"world".to_string());
    assert_eq!(r.render(), "\"hello\" != \"world\"");
}

#[test]
fn str_slices_render_quoted() {
    assert_eq!(diff("a", "b").render(), "\"a\" != \"b\"");
    assert_eq!(diff("same", "same").render(), "\"same\"");
}

#[test]
fn chars_render_quoted() {
    assert_eq!(diff(&'x', &'y').render(), "'x' != 'y'");
}

proptest! {
    #[test]
    fn any_integer_is_identical_to_itself(x: i32) {
        let r = diff(&x, &x);
        prop_assert!(r.is_identical());
        prop_assert!(!r.render().contains("!="));
    }

    #[test]
    fn any_unequal_pair_renders_both_raw_values(x: i32, y: i32) {
        prop_assume!(x != y);
        prop_assert_eq!(diff(&x, &y).render(), format!("{} != {}", x, y));
    }

    #[test]
    fn any_string_is_identical_to_itself(s: String) {
        let r = diff(s.as_str(), s.as_str());
        prop_assert!(r.is_identical());
        prop_assert_eq!(r.render(), format!("{:?}", s));
    }
}
