//! Derived comparison contract: field-by-field diffs for structs, per-variant
//! diffs for enums, and the raw-equality opt-in for opaque types.

use attest_diff::{diff, diffable_by_eq, ComparisonResult, Diffable};

#[derive(Diffable)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Diffable)]
struct Point(i32, i32);

#[derive(Diffable)]
struct Unit;

#[derive(Diffable)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Diffable)]
struct Team {
    lead: Person,
    size: u32,
}

#[derive(Diffable)]
enum Shape {
    Circle { radius: u32 },
    Square(u32),
    Empty,
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

#[test]
fn field_equal_instances_are_identical() {
    let r = diff(&person("ada", 36), &person("ada", 36));
    assert!(r.is_identical());
    assert_eq!(r.render(), "Person");
}

#[test]
fn differing_field_is_named_in_the_comparison() {
    let r = diff(&person("ada", 36), &person("ada", 37));
    match &r {
        ComparisonResult::StructDifference { type_name, fields } => {
            assert_eq!(type_name, "Person");
            let differing: Vec<&str> = fields
                .iter()
                .filter(|f| !f.is_identical())
                .map(|f| f.field.as_str())
                .collect();
            assert_eq!(differing, vec!["age"]);
        }
        other => panic!("expected StructDifference, got {:?}", other),
    }
    assert_eq!(r.render(), "Person(name: \"ada\", age: 36 != 37)");
}

#[test]
fn fields_render_in_declaration_order() {
    let r = diff(&person("ada", 36), &person("grace", 30));
    assert_eq!(
        r.render(),
        "Person(name: \"ada\" != \"grace\", age: 36 != 30)"
    );
}

#[test]
fn tuple_struct_fields_are_indexed() {
    let r = diff(&Point(1, 2), &Point(1, 5));
    assert_eq!(r.render(), "Point(0: 1, 1: 2 != 5)");
}

#[test]
fn unit_structs_are_always_identical() {
    let r = diff(&Unit, &Unit);
    assert!(r.is_identical());
    assert_eq!(r.render(), "Unit");
}

#[test]
fn nested_structs_recurse() {
    let a = Team {
        lead: person("ada", 36),
        size: 4,
    };
    let e = Team {
        lead: person("ada", 37),
        size: 4,
    };
    assert_eq!(
        diff(&a, &e).render(),
        "Team(lead: Person(name: \"ada\", age: 36 != 37), size: 4)"
    );
}

#[test]
fn generic_structs_delegate_to_the_parameter() {
    let r = diff(&Wrapper { inner: vec![1, 2] }, &Wrapper { inner: vec![1, 3] });
    assert_eq!(r.render(), "Wrapper(inner: Vec(1, 2 != 3))");
}

#[test]
fn enum_same_variant_compares_fields_under_the_variant_label() {
    let r = diff(&Shape::Circle { radius: 2 }, &Shape::Circle { radius: 3 });
    assert_eq!(r.render(), "Shape::Circle(radius: 2 != 3)");

    let r = diff(&Shape::Square(4), &Shape::Square(4));
    assert!(r.is_identical());
    assert_eq!(r.render(), "Shape::Square");
}

#[test]
fn enum_unit_variants_compare_by_identity() {
    let r = diff(&Shape::Empty, &Shape::Empty);
    assert!(r.is_identical());
    assert_eq!(r.render(), "Shape::Empty");
}

#[test]
fn enum_variant_mismatch_does_not_recurse() {
    let r = diff(&Shape::Circle { radius: 2 }, &Shape::Square(4));
    match &r {
        ComparisonResult::OtherDifference { actual, expected, .. } => {
            assert_eq!(actual, "Shape::Circle(radius: 2)");
            assert_eq!(expected, "Shape::Square(4)");
        }
        other => panic!("expected OtherDifference, got {:?}", other),
    }
    assert_eq!(r.render(), "Shape::Circle(radius: 2) != Shape::Square(4)");
}

#[derive(Debug, PartialEq, Clone)]
struct Opaque {
    id: u64,
}

diffable_by_eq!(Opaque);

#[test]
fn opaque_types_fall_back_to_raw_equality() {
    let a = Opaque { id: 1 };
    assert!(diff(&a, &a.clone()).is_identical());
    assert_eq!(
        diff(&a, &Opaque { id: 2 }).render(),
        "Opaque { id: 1 } != Opaque { id: 2 }"
    );
}

#[test]
fn derived_records_nest_inside_collections() {
    let r = diff(&vec![person("ada", 36)], &vec![person("ada", 37)]);
    assert_eq!(
        r.render(),
        "Vec(Person(name: \"ada\", age: 36 != 37))"
    );
}
