//! # Show - Display as a Capability
//!
//! [`Show<T>`] renders a value to text. Like the other capabilities it is
//! passed explicitly, so one type can be rendered many ways: `12` can show as
//! `"int: 12"` through [`ShowInt`] or as `"12"` through [`ShowDebug`].
//!
//! Composite builders take one `Show` per component and render
//! `"{first, second}"`:
//!
//! - [`ShowTuple`]: 2-tuples, components through their `Display`
//! - [`show_tuple`]: 2-tuples, components through their own `Show`
//! - [`show_pair`]: [`Pair`]
//! - [`show_combinable_pair`]: [`CombinablePair`]

use std::fmt;

use crate::derive::Pair;
use crate::described::CombinablePair;

/// A capability rendering `T` as text. Must be deterministic.
pub trait Show<T: ?Sized> {
    fn show(&self, value: &T) -> String;
}

impl<T: ?Sized, S: Show<T> + ?Sized> Show<T> for &S {
    fn show(&self, value: &T) -> String {
        (**self).show(value)
    }
}

/// Render `value` with `capability`.
pub fn show<T: ?Sized, S: Show<T> + ?Sized>(value: &T, capability: &S) -> String {
    capability.show(value)
}

/// `"int: {n}"`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowInt;

impl Show<i64> for ShowInt {
    fn show(&self, value: &i64) -> String {
        format!("int: {}", value)
    }
}

/// `"str: {s}"`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowString;

impl Show<String> for ShowString {
    fn show(&self, value: &String) -> String {
        format!("str: {}", value)
    }
}

impl Show<str> for ShowString {
    fn show(&self, value: &str) -> String {
        format!("str: {}", value)
    }
}

/// `"{a, b}"` for any 2-tuple of `Display` components.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowTuple;

impl<X: fmt::Display, Y: fmt::Display> Show<(X, Y)> for ShowTuple {
    fn show(&self, (x, y): &(X, Y)) -> String {
        format!("{{{}, {}}}", x, y)
    }
}

/// The value's `Debug` rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowDebug;

impl<T: fmt::Debug + ?Sized> Show<T> for ShowDebug {
    fn show(&self, value: &T) -> String {
        format!("{:?}", value)
    }
}

/// A `Show` from any `Fn(&T) -> String`.
#[derive(Clone, Copy)]
pub struct FnShow<F>(pub F);

impl<T: ?Sized, F: Fn(&T) -> String> Show<T> for FnShow<F> {
    fn show(&self, value: &T) -> String {
        (self.0)(value)
    }
}

fn braced(first: String, second: String) -> String {
    format!("{{{}, {}}}", first, second)
}

/// Shows a 2-tuple through one `Show` per component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowTuplePair<SA, SB> {
    first: SA,
    second: SB,
}

/// Build a 2-tuple display from component displays.
///
/// ```
/// use capability_core::show::{show, show_tuple, ShowInt, ShowString};
///
/// let value = (1i64, "a".to_string());
/// assert_eq!(show(&value, &show_tuple(ShowInt, ShowString)), "{int: 1, str: a}");
/// ```
pub fn show_tuple<SA, SB>(first: SA, second: SB) -> ShowTuplePair<SA, SB> {
    ShowTuplePair { first, second }
}

impl<A, B, SA: Show<A>, SB: Show<B>> Show<(A, B)> for ShowTuplePair<SA, SB> {
    fn show(&self, (a, b): &(A, B)) -> String {
        braced(self.first.show(a), self.second.show(b))
    }
}

/// Shows a [`Pair`] through one `Show` per component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowPair<SA, SB> {
    first: SA,
    second: SB,
}

/// Build a [`Pair`] display from component displays.
pub fn show_pair<SA, SB>(first: SA, second: SB) -> ShowPair<SA, SB> {
    ShowPair { first, second }
}

impl<A, B, SA: Show<A>, SB: Show<B>> Show<Pair<A, B>> for ShowPair<SA, SB> {
    fn show(&self, value: &Pair<A, B>) -> String {
        braced(self.first.show(value.first()), self.second.show(value.second()))
    }
}

/// Shows a [`CombinablePair`] through one `Show` per component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowCombinablePair<SA, SB> {
    first: SA,
    second: SB,
}

/// Build a [`CombinablePair`] display from component displays.
pub fn show_combinable_pair<SA, SB>(first: SA, second: SB) -> ShowCombinablePair<SA, SB> {
    ShowCombinablePair { first, second }
}

impl<A, B, SA: Show<A>, SB: Show<B>> Show<CombinablePair<A, B>> for ShowCombinablePair<SA, SB> {
    fn show(&self, value: &CombinablePair<A, B>) -> String {
        braced(self.first.show(value.first()), self.second.show(value.second()))
    }
}
