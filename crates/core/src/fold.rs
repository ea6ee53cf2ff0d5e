//! # Folds - Reducing Sequences with a Capability
//!
//! Two engines reduce an ordered sequence to one value:
//!
//! | Engine | Seed | Empty input |
//! |--------|------|-------------|
//! | [`combine_all`] | `capability.empty()` | the identity |
//! | [`combine_all_described`] | the first element | `None` |
//!
//! Both apply `combine` left to right:
//!
//! ```text
//!   combine_all([a, b, c], m)     = m.combine(m.combine(m.combine(e, a), b), c)
//!   combine_all_described([a, b]) = a.combine_with(b)
//! ```
//!
//! Associativity makes the result independent of bracketing, not of order.
//! A non-commutative capability such as string concatenation sees its
//! elements in sequence order.
//!
//! ## Fan-in
//!
//! [`Combiner`] is the fan-in interface: many results in, one output out.
//! [`Fold`] and [`FoldDescribed`] put the two engines behind it.

use std::collections::HashSet;
use std::hash::Hash;

use crate::capability::{Combinable, IntAddition, SetUnion, StringConcat};
use crate::described::SelfCombinable;

// ============================================================================
// Engines
// ============================================================================

/// Left-fold `values` starting from the capability's identity.
///
/// Returns `capability.empty()` for an empty sequence.
///
/// # Example
///
/// ```
/// use capability_core::capability::IntAddition;
/// use capability_core::fold::combine_all;
///
/// assert_eq!(combine_all(vec![1, 2, 3], &IntAddition), 6);
/// assert_eq!(combine_all(Vec::<i64>::new(), &IntAddition), 0);
/// ```
pub fn combine_all<T, M>(values: impl IntoIterator<Item = T>, capability: &M) -> T
where
    M: Combinable<T> + ?Sized,
{
    tracing::trace!("combine_all: folding from identity");
    values
        .into_iter()
        .fold(capability.empty(), |acc, value| capability.combine(acc, value))
}

/// Left-fold self-describing values, seeded by the first element.
///
/// No identity is available without an element to take it from, so an empty
/// sequence yields `None`.
///
/// Each step combines with the capabilities carried by the accumulated
/// (left) value. All elements are assumed to carry equivalent capabilities;
/// this is not checked.
pub fn combine_all_described<S>(values: impl IntoIterator<Item = S>) -> Option<S>
where
    S: SelfCombinable,
{
    let result = values.into_iter().reduce(S::combine_with);
    tracing::trace!(
        empty = result.is_none(),
        "combine_all_described: folded from first element"
    );
    result
}

/// Order-preserving parallel fold.
///
/// Splits `values` into chunks, folds each chunk from the identity and joins
/// the partial results left to right. For a lawful capability the result is
/// identical to [`combine_all`].
#[cfg(feature = "parallel")]
pub fn par_combine_all<T, M>(values: Vec<T>, capability: &M) -> T
where
    T: Send,
    M: Combinable<T> + Sync + ?Sized,
{
    use rayon::prelude::*;

    tracing::trace!(count = values.len(), "par_combine_all: folding in parallel");
    values
        .into_par_iter()
        .fold(|| capability.empty(), |acc, value| capability.combine(acc, value))
        .reduce(|| capability.empty(), |left, right| capability.combine(left, right))
}

/// Sum integers.
pub fn sum_ints(values: impl IntoIterator<Item = i64>) -> i64 {
    combine_all(values, &IntAddition)
}

/// Concatenate strings in order.
pub fn concat_strings(values: impl IntoIterator<Item = String>) -> String {
    combine_all(values, &StringConcat)
}

/// Union of all sets.
pub fn union_sets<T: Eq + Hash>(sets: impl IntoIterator<Item = HashSet<T>>) -> HashSet<T> {
    combine_all(sets, &SetUnion)
}

// ============================================================================
// Combiners: fan-in over a batch of results
// ============================================================================

/// A combiner merges a batch of results into a single output.
pub trait Combiner<T> {
    /// The output type after combining.
    type Output;

    /// Combine multiple results into a single output.
    fn combine(&self, results: Vec<T>) -> Self::Output;
}

/// Fan-in through a [`Combinable`] capability. Never fails; empty input gives
/// the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fold<M> {
    capability: M,
}

impl<M> Fold<M> {
    /// Wrap a capability as a combiner.
    pub fn new(capability: M) -> Self {
        Self { capability }
    }

    /// The wrapped capability.
    pub fn capability(&self) -> &M {
        &self.capability
    }
}

impl<T, M> Combiner<T> for Fold<M>
where
    M: Combinable<T>,
{
    type Output = T;

    fn combine(&self, results: Vec<T>) -> T {
        combine_all(results, &self.capability)
    }
}

/// Fan-in for self-describing values. Returns `None` for an empty batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldDescribed;

impl<S: SelfCombinable> Combiner<S> for FoldDescribed {
    type Output = Option<S>;

    fn combine(&self, results: Vec<S>) -> Option<S> {
        combine_all_described(results)
    }
}

// ============================================================================
// Tests
// ============================================================================
