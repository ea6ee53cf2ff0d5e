//! # Capabilities as Values
//!
//! Rust normally attaches behavior to a type with a trait bound: `T: Monoid`
//! is resolved by the compiler, and each type gets exactly one instance.
//! That breaks down as soon as a type has more than one lawful algebra:
//!
//! ```text
//!   i64 under +   identity 0
//!   i64 under *   identity 1
//!   i64 under max identity i64::MIN
//! ```
//!
//! Here the algebra is a separate value, a *capability*, passed next to the
//! data. The trait is implemented by the capability (`IntAddition`), never by
//! the data (`i64`), so any number of instances can coexist and callers pick
//! one explicitly.
//!
//! ## Design
//!
//! - [`Empty<T>`]: produces the identity element
//! - [`Combinable<T>`]: `Empty<T>` plus an associative `combine`
//! - [`FnCombinable`]: a capability assembled from two closures
//!
//! ## Laws
//!
//! Every `Combinable` must satisfy, for all `x`, `a`, `b`, `c`:
//!
//! ```text
//!   combine(empty(), x) = x = combine(x, empty())       (identity)
//!   combine(combine(a, b), c) = combine(a, combine(b, c)) (associativity)
//! ```
//!
//! The type system cannot check these. An unlawful instance is a programming
//! error on the author's side; folds will silently produce order-dependent
//! results for it.
//!
//! ```rust
//! use capability_core::capability::{Combinable, Empty, IntAddition, StringConcat};
//!
//! assert_eq!(IntAddition.combine(IntAddition.empty(), 7), 7);
//! assert_eq!(StringConcat.combine("ab".to_string(), "c".to_string()), "abc");
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

// ============================================================================
// Core Traits
// ============================================================================

/// A capability that produces the identity value for `T`.
///
/// Implementations are expected to be pure: every call returns an equal value.
pub trait Empty<T> {
    /// The identity element.
    fn empty(&self) -> T;
}

/// A capability combining two values of `T` associatively, with an identity.
///
/// This is a monoid, supplied from the outside rather than owned by `T`.
pub trait Combinable<T>: Empty<T> {
    /// Combine two values. Must be associative and respect [`Empty::empty`].
    fn combine(&self, x: T, y: T) -> T;
}

impl<T, M: Empty<T> + ?Sized> Empty<T> for &M {
    fn empty(&self) -> T {
        (**self).empty()
    }
}

impl<T, M: Combinable<T> + ?Sized> Combinable<T> for &M {
    fn combine(&self, x: T, y: T) -> T {
        (**self).combine(x, y)
    }
}

impl<T, M: Empty<T> + ?Sized> Empty<T> for Arc<M> {
    fn empty(&self) -> T {
        (**self).empty()
    }
}

impl<T, M: Combinable<T> + ?Sized> Combinable<T> for Arc<M> {
    fn combine(&self, x: T, y: T) -> T {
        (**self).combine(x, y)
    }
}

// ============================================================================
// Identity-only Instances
// ============================================================================

/// `0` for integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyInt;

impl Empty<i64> for EmptyInt {
    fn empty(&self) -> i64 {
        0
    }
}

/// `""` for strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyString;

impl Empty<String> for EmptyString {
    fn empty(&self) -> String {
        String::new()
    }
}

// ============================================================================
// Combinable Instances
// ============================================================================

/// Integers under addition, identity `0`.
///
/// Addition wraps on overflow, so `combine` is total over every `i64` and
/// stays associative (two's-complement addition modulo 2^64).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntAddition;

impl Empty<i64> for IntAddition {
    fn empty(&self) -> i64 {
        EmptyInt.empty()
    }
}

impl Combinable<i64> for IntAddition {
    fn combine(&self, x: i64, y: i64) -> i64 {
        x.wrapping_add(y)
    }
}

/// Strings under concatenation, identity `""`.
///
/// Not commutative: `combine("a", "b") != combine("b", "a")`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConcat;

impl Empty<String> for StringConcat {
    fn empty(&self) -> String {
        EmptyString.empty()
    }
}

impl Combinable<String> for StringConcat {
    fn combine(&self, mut x: String, y: String) -> String {
        x.push_str(&y);
        x
    }
}

/// Sets under union, identity `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetUnion;

impl<T: Eq + Hash> Empty<HashSet<T>> for SetUnion {
    fn empty(&self) -> HashSet<T> {
        HashSet::new()
    }
}

impl<T: Eq + Hash> Combinable<HashSet<T>> for SetUnion {
    fn combine(&self, mut x: HashSet<T>, y: HashSet<T>) -> HashSet<T> {
        x.extend(y);
        x
    }
}

/// A capability built from a pair of closures.
///
/// This is the literal "record of functions" form: no new type per instance.
///
/// # Example
///
/// ```
/// use capability_core::capability::{Combinable, Empty, FnCombinable};
///
/// let product = FnCombinable::new(|| 1i64, |x: i64, y: i64| x * y);
/// assert_eq!(product.empty(), 1);
/// assert_eq!(product.combine(6, 7), 42);
/// ```
#[derive(Clone, Copy)]
pub struct FnCombinable<E, C> {
    empty: E,
    combine: C,
}

impl<E, C> FnCombinable<E, C> {
    /// Create a capability from an identity producer and a combine function.
    pub fn new(empty: E, combine: C) -> Self {
        Self { empty, combine }
    }
}

impl<T, E, C> Empty<T> for FnCombinable<E, C>
where
    E: Fn() -> T,
{
    fn empty(&self) -> T {
        (self.empty)()
    }
}

impl<T, E, C> Combinable<T> for FnCombinable<E, C>
where
    E: Fn() -> T,
    C: Fn(T, T) -> T,
{
    fn combine(&self, x: T, y: T) -> T {
        (self.combine)(x, y)
    }
}

/// Two independent identity values from the same capability.
pub fn two_empties<T, E: Empty<T> + ?Sized>(empty: &E) -> (T, T) {
    (empty.empty(), empty.empty())
}

// ============================================================================
// Tests
// ============================================================================
