//! # Derivation - Capabilities for Composite Types
//!
//! Given capabilities for the parts, build one for the whole. The rule is
//! componentwise:
//!
//! ```text
//!   empty()      = (a.empty(), b.empty())
//!   combine(x,y) = (a.combine(x.0, y.0), b.combine(x.1, y.1))
//! ```
//!
//! The identity and associativity laws hold for the result whenever they hold
//! for each component, since every law reduces to the same law per component.
//!
//! - [`derive_combinable_pair`]: the rule for [`Pair`]
//! - [`Product`]: the same rule for tuples of arity 2 to 4
//! - [`Dual`]: combine in flipped order, same identity

use crate::capability::{Combinable, Empty};

// ============================================================================
// Pair
// ============================================================================

/// An immutable ordered pair of independently typed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Create a pair.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The first component.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The second component.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Split into a plain tuple.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

/// The capability derived for [`Pair`] from one capability per component.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairCombinable<MA, MB> {
    first: MA,
    second: MB,
}

/// Derive a [`Combinable`] for `Pair<A, B>` from capabilities for `A` and `B`.
///
/// # Example
///
/// ```
/// use capability_core::capability::{Combinable, Empty, IntAddition, StringConcat};
/// use capability_core::derive::{derive_combinable_pair, Pair};
///
/// let m = derive_combinable_pair(IntAddition, StringConcat);
/// let combined = m.combine(Pair::new(1, "a".to_string()), Pair::new(2, "b".to_string()));
/// assert_eq!(combined, Pair::new(3, "ab".to_string()));
/// assert_eq!(m.empty(), Pair::new(0, String::new()));
/// ```
pub fn derive_combinable_pair<MA, MB>(first: MA, second: MB) -> PairCombinable<MA, MB> {
    PairCombinable { first, second }
}

impl<A, B, MA, MB> Empty<Pair<A, B>> for PairCombinable<MA, MB>
where
    MA: Empty<A>,
    MB: Empty<B>,
{
    fn empty(&self) -> Pair<A, B> {
        Pair::new(self.first.empty(), self.second.empty())
    }
}

impl<A, B, MA, MB> Combinable<Pair<A, B>> for PairCombinable<MA, MB>
where
    MA: Combinable<A>,
    MB: Combinable<B>,
{
    fn combine(&self, x: Pair<A, B>, y: Pair<A, B>) -> Pair<A, B> {
        Pair::new(
            self.first.combine(x.first, y.first),
            self.second.combine(x.second, y.second),
        )
    }
}

// ============================================================================
// Tuples
// ============================================================================

/// Componentwise capability over a tuple, holding a tuple of capabilities.
///
/// `Product((IntAddition, StringConcat, IntAddition))` combines `(i64, String, i64)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Product<C>(pub C);

/// Derive a tuple capability from a tuple of component capabilities.
pub fn derive_product<C>(capabilities: C) -> Product<C> {
    Product(capabilities)
}

macro_rules! product_combinable {
    ($(($m:ident, $t:ident, $idx:tt)),+) => {
        impl<$($t, $m: Empty<$t>),+> Empty<($($t,)+)> for Product<($($m,)+)> {
            fn empty(&self) -> ($($t,)+) {
                ($(self.0.$idx.empty(),)+)
            }
        }

        impl<$($t, $m: Combinable<$t>),+> Combinable<($($t,)+)> for Product<($($m,)+)> {
            fn combine(&self, x: ($($t,)+), y: ($($t,)+)) -> ($($t,)+) {
                ($(self.0.$idx.combine(x.$idx, y.$idx),)+)
            }
        }
    };
}

product_combinable!((M1, T1, 0), (M2, T2, 1));
product_combinable!((M1, T1, 0), (M2, T2, 1), (M3, T3, 2));
product_combinable!((M1, T1, 0), (M2, T2, 1), (M3, T3, 2), (M4, T4, 3));

// ============================================================================
// Dual
// ============================================================================

/// The dual algebra: `combine(x, y) = inner.combine(y, x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dual<M>(pub M);

impl<T, M: Empty<T>> Empty<T> for Dual<M> {
    fn empty(&self) -> T {
        self.0.empty()
    }
}

impl<T, M: Combinable<T>> Combinable<T> for Dual<M> {
    fn combine(&self, x: T, y: T) -> T {
        self.0.combine(y, x)
    }
}
