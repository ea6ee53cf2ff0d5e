//! # Capability Core - Type Classes as Values
//!
//! This crate expresses ad-hoc polymorphism with explicit *capabilities*:
//! ordinary values that carry the operations a type needs for some concern,
//! passed next to the data instead of being resolved from the data's type.
//!
//! - **Capabilities**: `Empty` and `Combinable` (a monoid) with base instances
//! - **Folds**: reduce a sequence with a capability, or with the capabilities
//!   its elements carry
//! - **Derivation**: capabilities for pairs and tuples from their components
//! - **Self-describing values**: payloads bundled with their own algebra
//! - **Show**: display as a capability, composable over pairs
//! - **Json**: a closed data tree, a writer capability, and fallible narrowing
//!
//! ## Design Philosophy
//!
//! Traits are implemented by the capability, never by the data. `i64` has
//! no monoid of its own; `IntAddition` is one, and a caller who wants
//! multiplication passes a different value. Nothing here is stateful, so
//! every capability and every tree node can be shared freely.
//!
//! ```rust
//! use capability_core::{
//!     combine_all, derive_combinable_pair, show, show_pair, IntAddition, Pair, ShowInt,
//!     ShowString, StringConcat,
//! };
//!
//! let m = derive_combinable_pair(IntAddition, StringConcat);
//! let total = combine_all(
//!     vec![Pair::new(1, "a".to_string()), Pair::new(2, "b".to_string())],
//!     &m,
//! );
//! assert_eq!(show(&total, &show_pair(ShowInt, ShowString)), "{int: 3, str: ab}");
//! ```

pub mod capability;
pub mod derive;
pub mod described;
pub mod error;
pub mod fold;
pub mod json;
pub mod show;

// Re-export key types at crate root for convenience
pub use capability::{
    two_empties, Combinable, Empty, EmptyInt, EmptyString, FnCombinable, IntAddition, SetUnion,
    StringConcat,
};
pub use derive::{derive_combinable_pair, derive_product, Dual, Pair, PairCombinable, Product};
pub use described::{CombinablePair, SelfCombinable, SharedCombinable};
pub use error::JsonError;
#[cfg(feature = "parallel")]
pub use fold::par_combine_all;
pub use fold::{
    combine_all, combine_all_described, concat_strings, sum_ints, union_sets, Combiner, Fold,
    FoldDescribed,
};
pub use json::{
    to_json, JsNull, JsNumber, JsObject, JsText, Json, JsonKind, JsonVariant, JsonWriter,
    StringWriter,
};
pub use show::{
    show, show_combinable_pair, show_pair, show_tuple, FnShow, Show, ShowDebug, ShowInt,
    ShowString, ShowTuple, ShowTuplePair,
};
