//! Smoke tests for the core crate.
//!
//! These tests drive the public surface end to end, the way an external
//! caller would:
//! - Folds over plain values and over self-describing values
//! - Derived pair capabilities rendered through Show
//! - A domain value written to Json and read back through narrowing

use capability_core::json::{JsObject, JsText, Json, JsonKind, JsonWriter};
use capability_core::{
    combine_all, combine_all_described, derive_combinable_pair, show, show_combinable_pair,
    show_pair, show_tuple, sum_ints, to_json, two_empties, Combinable, CombinablePair, Combiner,
    EmptyInt, Fold, IntAddition, JsonError, Pair, ShowDebug, ShowInt, ShowString, ShowTuple,
    StringConcat,
};

// ============================================================================
// Domain value used only to exercise the writer
// ============================================================================

struct Person {
    name: String,
    email: String,
}

impl Person {
    fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

struct PersonWriter;

impl JsonWriter<Person> for PersonWriter {
    fn write(&self, person: &Person) -> Json {
        JsObject::new()
            .with("name", person.name.as_str())
            .with("email", person.email.as_str())
            .into()
    }
}

// ============================================================================
// Folds
// ============================================================================

#[test]
fn smoke_combine_all_ints() {
    assert_eq!(combine_all(vec![1, 2, 3], &IntAddition), 6);
}

#[test]
fn smoke_combine_all_empty_and_singleton() {
    assert_eq!(combine_all(Vec::<i64>::new(), &IntAddition), 0);
    assert_eq!(combine_all(vec![41], &IntAddition), 41);
}

#[test]
fn smoke_int_fold_is_total_at_the_edges() {
    assert_eq!(IntAddition.combine(i64::MAX, 1), i64::MIN);
    assert_eq!(combine_all(vec![i64::MAX, 1, -1], &IntAddition), i64::MAX);
    assert_eq!(sum_ints(vec![i64::MIN, -1, 1]), i64::MIN);
}

#[test]
fn smoke_string_concat_associations_agree() {
    let m = StringConcat;
    let right = m.combine("x".to_string(), m.combine("y".to_string(), "z".to_string()));
    let left = m.combine(m.combine("x".to_string(), "y".to_string()), "z".to_string());
    assert_eq!(right, "xyz");
    assert_eq!(left, "xyz");
}

#[test]
fn smoke_derived_pair_fold_and_show() {
    let pairs = vec![
        Pair::new(1, "hello".to_string()),
        Pair::new(2, " ".to_string()),
        Pair::new(3, "world".to_string()),
    ];
    let total = combine_all(pairs, &derive_combinable_pair(IntAddition, StringConcat));

    assert_eq!(total, Pair::new(6, "hello world".to_string()));
    assert_eq!(
        show(&total, &show_pair(ShowInt, ShowString)),
        "{int: 6, str: hello world}"
    );
}

#[test]
fn smoke_self_describing_fold() {
    let values = vec![
        CombinablePair::new(1, "hello".to_string(), IntAddition, StringConcat),
        CombinablePair::new(2, " ".to_string(), IntAddition, StringConcat),
        CombinablePair::new(3, "world".to_string(), IntAddition, StringConcat),
    ];

    let total = combine_all_described(values).expect("three values reduce to one");
    assert_eq!(
        show(&total, &show_combinable_pair(ShowInt, ShowString)),
        "{int: 6, str: hello world}"
    );
    assert_eq!(total.into_parts(), (6, "hello world".to_string()));
}

#[test]
fn smoke_self_describing_empty_has_no_result() {
    let none: Vec<CombinablePair<i64, String>> = Vec::new();
    assert!(combine_all_described(none).is_none());
}

#[test]
fn smoke_fold_combiner() {
    let fan_in = Fold::new(derive_combinable_pair(IntAddition, IntAddition));
    let total = fan_in.combine(vec![Pair::new(1i64, 10i64), Pair::new(2, 20)]);
    assert_eq!(total, Pair::new(3, 30));
}

// ============================================================================
// Show
// ============================================================================

#[test]
fn smoke_show_two_empties() {
    let zeros = two_empties(&EmptyInt);
    assert_eq!(show(&zeros, &ShowTuple), "{0, 0}");
    assert_eq!(show(&zeros, &ShowDebug), "(0, 0)");
    assert_eq!(show(&12, &ShowInt), "int: 12");
}

#[test]
fn smoke_show_tuple_through_component_shows() {
    let value = (1i64, "a".to_string());
    assert_eq!(show(&value, &show_tuple(ShowInt, ShowString)), "{int: 1, str: a}");
}

// ============================================================================
// Json
// ============================================================================

#[test]
fn smoke_person_round_trip_through_narrowing() -> Result<(), JsonError> {
    let person = Person::new("Saeed", "zarinfam.s@gmail.com");
    let json = to_json(&person, &PersonWriter);

    assert_eq!(json.kind(), JsonKind::Object);
    let object = json.narrow::<JsObject>()?;
    assert_eq!(object.len(), 2);

    let name = object.get("name")?.narrow::<JsText>()?;
    assert_eq!(name.get(), "Saeed");
    assert_eq!(object.get("email")?.as_text()?, "zarinfam.s@gmail.com");
    Ok(())
}

#[test]
fn smoke_narrowing_text_to_object_fails() {
    let json = to_json("Saeed", &capability_core::StringWriter);
    assert_eq!(
        json.narrow::<JsObject>(),
        Err(JsonError::TypeMismatch {
            expected: JsonKind::Object,
            found: JsonKind::Text,
        })
    );
}

#[test]
fn smoke_missing_key_is_an_error() {
    let json = to_json(&Person::new("a", "b"), &PersonWriter);
    let object = json.as_object().unwrap();
    assert!(matches!(
        object.get("phone"),
        Err(JsonError::KeyNotFound { key }) if key == "phone"
    ));
}
