// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generic fixed-arity vectors (`Vector<T, N>`) and their lane operations.

use core::ops::{Div, Index};

use bytemuck::Pod;

use crate::alias;
use crate::scalar::Numeric;

/// Fixed-arity vector over any element type.
///
/// `#[repr(transparent)]` over `[T; N]`: lanes are contiguous, first lane
/// first, with no padding, so an `N`-lane vector occupies exactly
/// `N * size_of::<T>()` bytes. [`Vector::leading`] relies on this to view a
/// prefix of the lanes in place.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

/// Two-lane generic vector.
pub type Vector2<T> = Vector<T, 2>;
/// Three-lane generic vector.
pub type Vector3<T> = Vector<T, 3>;
/// Four-lane generic vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector from its lanes in declared order.
    pub const fn new(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Returns the lanes as an array.
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the lanes as an array.
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns lane `idx`, or `None` when `idx >= N`.
    pub fn lane(&self, idx: usize) -> Option<T> {
        self.0.get(idx).copied()
    }

    /// Builds an `M`-lane vector by picking lanes of `self` in the given order.
    ///
    /// Lane indices may repeat. Every index must be `< N`.
    ///
    /// # Examples
    /// ```
    /// use facet_math::Vector;
    /// let v = Vector::new([10_u8, 20, 30, 40]);
    /// assert_eq!(v.shuffle([3, 0]).to_array(), [40, 10]);
    /// ```
    pub fn shuffle<const M: usize>(&self, lanes: [usize; M]) -> Vector<T, M> {
        Vector(lanes.map(|idx| self.0[idx]))
    }
}

impl<T: Pod, const N: usize> Vector<T, N> {
    /// Zero-copy view of the first `M` lanes.
    ///
    /// Fails to compile when `M > N`.
    pub fn leading<const M: usize>(&self) -> &[T; M] {
        alias::leading_lanes(&self.0)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.0[idx]
    }
}

/// Divides every lane by `rhs` with `T`'s own division semantics.
impl<T: Numeric, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self(self.0.map(|lane| lane / rhs))
    }
}
