//! # Self-Describing Values
//!
//! A [`CombinablePair`] carries its payload together with the capabilities
//! that combine it. Folding a sequence of them needs no capability argument:
//! each step uses the algebra already stored in the accumulated value.
//!
//! ```text
//!   (1, "hello", +, ++) · (2, " ", +, ++) · (3, "world", +, ++)
//!     = (6, "hello world", +, ++)
//! ```
//!
//! ## Caller obligation
//!
//! Combining `x` with `y` uses the capabilities of `x` and ignores those of
//! `y`. Values that are combined together must therefore carry equivalent
//! capabilities. Nothing checks this: capabilities are opaque trait objects
//! with no notion of equality.

use std::fmt;
use std::sync::Arc;

use crate::capability::{Combinable, Empty};

/// A capability shared between many self-describing values.
pub type SharedCombinable<T> = Arc<dyn Combinable<T> + Send + Sync>;

/// A value that knows how to combine itself with another of its kind.
pub trait SelfCombinable: Sized {
    /// Combine `self` (left) with `other` (right), using `self`'s algebra.
    fn combine_with(self, other: Self) -> Self;

    /// The identity element of `self`'s algebra, carrying the same algebra.
    fn identity(&self) -> Self;
}

/// A pair bundled with one capability per component.
#[derive(Clone)]
pub struct CombinablePair<A, B> {
    first: A,
    second: B,
    first_capability: SharedCombinable<A>,
    second_capability: SharedCombinable<B>,
}

impl<A, B> CombinablePair<A, B> {
    /// Bundle a payload with the capabilities that combine it.
    pub fn new<MA, MB>(first: A, second: B, first_capability: MA, second_capability: MB) -> Self
    where
        MA: Combinable<A> + Send + Sync + 'static,
        MB: Combinable<B> + Send + Sync + 'static,
    {
        Self::from_shared(
            first,
            second,
            Arc::new(first_capability),
            Arc::new(second_capability),
        )
    }

    /// Bundle a payload with capabilities that are already shared.
    ///
    /// Reusing the same `Arc`s across a batch is the simplest way to meet the
    /// equivalence obligation.
    pub fn from_shared(
        first: A,
        second: B,
        first_capability: SharedCombinable<A>,
        second_capability: SharedCombinable<B>,
    ) -> Self {
        Self {
            first,
            second,
            first_capability,
            second_capability,
        }
    }

    /// The identity pair for the given capabilities.
    pub fn empty_with(
        first_capability: SharedCombinable<A>,
        second_capability: SharedCombinable<B>,
    ) -> Self {
        let first = first_capability.empty();
        let second = second_capability.empty();
        Self::from_shared(first, second, first_capability, second_capability)
    }

    /// The first payload component.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The second payload component.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Drop the capabilities and keep the payload.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    /// The capability combining the first component.
    pub fn first_capability(&self) -> &SharedCombinable<A> {
        &self.first_capability
    }

    /// The capability combining the second component.
    pub fn second_capability(&self) -> &SharedCombinable<B> {
        &self.second_capability
    }
}

impl<A, B> SelfCombinable for CombinablePair<A, B> {
    fn combine_with(self, other: Self) -> Self {
        let first = self.first_capability.combine(self.first, other.first);
        let second = self.second_capability.combine(self.second, other.second);
        Self {
            first,
            second,
            first_capability: self.first_capability,
            second_capability: self.second_capability,
        }
    }

    fn identity(&self) -> Self {
        Self::empty_with(
            Arc::clone(&self.first_capability),
            Arc::clone(&self.second_capability),
        )
    }
}

/// Payload equality. Capabilities are not compared.
impl<A: PartialEq, B: PartialEq> PartialEq for CombinablePair<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for CombinablePair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinablePair")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}
