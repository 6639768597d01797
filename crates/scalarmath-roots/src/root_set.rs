//! Fixed-capacity, partially filled root sets.
//!
//! A [`RootSet`] holds up to `N` real roots. The first `count` slots are
//! finite roots in the order the solver produced them; the remaining slots
//! hold NaN. Roots are not sorted, and callers may index positionally.

use approx::{AbsDiffEq, RelativeEq};
use scalarmath_core::{Result, Scalar, ScalarError};
use std::ops::Index;

/// Up to `N` real roots of a polynomial, NaN-padded.
#[derive(Debug, Clone, Copy)]
pub struct RootSet<T, const N: usize> {
    count: usize,
    slots: [T; N],
}

/// Roots of a quadratic polynomial.
pub type QuadraticRoots<T> = RootSet<T, 2>;

/// Roots of a cubic polynomial.
pub type CubicRoots<T> = RootSet<T, 3>;

/// Roots of a quartic polynomial.
pub type QuarticRoots<T> = RootSet<T, 4>;

impl<T: Scalar, const N: usize> RootSet<T, N> {
    /// A root set with no roots; every slot is NaN.
    pub fn none() -> Self {
        Self {
            count: 0,
            slots: [T::nan(); N],
        }
    }

    /// Builds a root set from finite roots, in order.
    ///
    /// Fails if there are more than `N` roots or any root is not finite.
    pub fn try_from_roots(roots: &[T]) -> Result<Self> {
        if roots.len() > N {
            return Err(ScalarError::too_many_roots(N, roots.len()));
        }
        let mut set = Self::none();
        for (index, &root) in roots.iter().enumerate() {
            if !root.is_finite() {
                return Err(ScalarError::non_finite_root(index, Scalar::to_f64(root)));
            }
            set.push(root);
        }
        Ok(set)
    }

    /// Appends a root if it is finite; NaN and infinities are dropped.
    /// Callers guarantee there is a free slot.
    pub(crate) fn push(&mut self, root: T) {
        if !root.is_finite() {
            return;
        }
        debug_assert!(self.count < N, "root set capacity {} exceeded", N);
        self.slots[self.count] = root;
        self.count += 1;
    }

    /// Appends all roots of `other` after the roots of `self`.
    pub(crate) fn extend_from<const M: usize>(&mut self, other: &RootSet<T, M>) {
        for &root in other.as_slice() {
            self.push(root);
        }
    }

    /// Moves the roots into a root set of a different capacity.
    pub(crate) fn widen<const M: usize>(self) -> RootSet<T, M> {
        let mut wider = RootSet::none();
        wider.extend_from(&self);
        wider
    }

    /// Applies `f` to every valid root, leaving the NaN padding untouched.
    ///
    /// Results that are not finite are dropped and the remaining roots keep
    /// their relative order.
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        let mut mapped = Self::none();
        for &root in self.as_slice() {
            mapped.push(f(root));
        }
        mapped
    }

    /// Number of valid roots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of slots, the degree of the polynomial.
    pub fn capacity(&self) -> usize {
        N
    }

    /// True if there are no real roots.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The root at `index`, if it is one of the valid roots.
    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    /// The first valid root, if any.
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    /// The valid roots.
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.count]
    }

    /// All `N` slots, including the NaN padding.
    pub fn slots(&self) -> &[T; N] {
        &self.slots
    }

    /// Iterates over the valid roots.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Splits into the root count and the padded slots.
    pub fn into_parts(self) -> (usize, [T; N]) {
        (self.count, self.slots)
    }
}

impl<T: Scalar, const N: usize> Default for RootSet<T, N> {
    fn default() -> Self {
        Self::none()
    }
}

/// Positional access to a slot; slots past `count` read as NaN.
impl<T, const N: usize> Index<usize> for RootSet<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a RootSet<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Root sets are equal when they hold the same valid roots; padding is ignored.
impl<T: Scalar, const N: usize> PartialEq for RootSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Scalar, const N: usize> AbsDiffEq for RootSet<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.count == other.count
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Scalar, const N: usize> RelativeEq for RootSet<T, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.count == other.count
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RootSet;
    use scalarmath_core::Scalar;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized as the sequence of valid roots.
    impl<T: Scalar + Serialize, const N: usize> Serialize for RootSet<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.as_slice())
        }
    }

    impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for RootSet<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let roots = Vec::<T>::deserialize(deserializer)?;
            Self::try_from_roots(&roots).map_err(D::Error::custom)
        }
    }
}
