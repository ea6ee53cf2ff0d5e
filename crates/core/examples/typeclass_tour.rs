//! Type classes as values: a guided tour
//!
//! Run with: cargo run --example typeclass_tour
//!
//! This example demonstrates:
//! - Identity-only capabilities and Show
//! - Folding with an explicit capability
//! - Deriving a capability for pairs
//! - Self-describing values that carry their own algebra
//! - Writing a domain value to Json and narrowing it back

use capability_core::json::{JsObject, JsText, Json, JsonWriter};
use capability_core::{
    combine_all, combine_all_described, derive_combinable_pair, show, show_combinable_pair,
    show_pair, to_json, two_empties, Combinable, CombinablePair, EmptyInt, FnShow, IntAddition,
    JsonError, Pair, ShowInt, ShowString, ShowTuple, StringConcat,
};

/// The domain value. Only the writer below knows how to serialize it.
struct Person {
    name: String,
    email: String,
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

fn main() -> Result<(), JsonError> {
    println!("=== Type Classes as Values ===\n");

    // -------------------------------------------------------------------------
    // Empty and Show
    // -------------------------------------------------------------------------
    println!("1. Empty and Show");
    println!("-----------------");

    let x_and_y = two_empties(&EmptyInt);
    println!("{}", show(&x_and_y, &ShowTuple));
    println!("{}", show(&x_and_y, &FnShow(|t: &(i64, i64)| format!("{:?}", t))));
    println!("{}", show(&12, &ShowInt));
    println!();

    // -------------------------------------------------------------------------
    // Folding with a capability
    // -------------------------------------------------------------------------
    println!("2. combine_all");
    println!("--------------");

    let ints = vec![1, 2, 3];
    println!("{}", combine_all(ints, &IntAddition));
    println!();

    // -------------------------------------------------------------------------
    // Derived pair capability
    // -------------------------------------------------------------------------
    println!("3. Derived pair capability");
    println!("--------------------------");

    let pairs = vec![
        Pair::new(1, "hello".to_string()),
        Pair::new(2, " ".to_string()),
        Pair::new(3, "world".to_string()),
    ];
    let total = combine_all(pairs, &derive_combinable_pair(IntAddition, StringConcat));
    println!("{}", show(&total, &show_pair(ShowInt, ShowString)));
    println!();

    // -------------------------------------------------------------------------
    // Self-describing values
    // -------------------------------------------------------------------------
    println!("4. Self-describing pairs");
    println!("------------------------");

    let described = vec![
        CombinablePair::new(1, "hello".to_string(), IntAddition, StringConcat),
        CombinablePair::new(2, " ".to_string(), IntAddition, StringConcat),
        CombinablePair::new(3, "world".to_string(), IntAddition, StringConcat),
    ];
    match combine_all_described(described) {
        Some(v) => println!("{}", show(&v, &show_combinable_pair(ShowInt, ShowString))),
        None => println!("(no values)"),
    }
    println!();

    // -------------------------------------------------------------------------
    // Json writer and narrowing
    // -------------------------------------------------------------------------
    println!("5. Json writer");
    println!("--------------");

    let person = Person {
        name: "Saeed".to_string(),
        email: "zarinfam.s@gmail.com".to_string(),
    };
    let json = to_json(&person, &PersonWriter);
    let name = json.narrow::<JsObject>()?.get("name")?.narrow::<JsText>()?;
    println!("{}", name.get());

    match json.narrow::<JsObject>()?.get("name")?.narrow::<JsObject>() {
        Ok(_) => println!("text narrowed to object (unexpected!)"),
        Err(e) => println!("{}", e),
    }
    println!();

    // -------------------------------------------------------------------------
    // Associativity
    // -------------------------------------------------------------------------
    println!("6. Associativity");
    println!("----------------");

    let m = StringConcat;
    println!(
        "{}",
        m.combine("x".to_string(), m.combine("y".to_string(), "z".to_string()))
    );
    println!(
        "{}",
        m.combine(m.combine("x".to_string(), "y".to_string()), "z".to_string())
    );

    Ok(())
}
