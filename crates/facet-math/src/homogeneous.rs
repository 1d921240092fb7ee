// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Homogeneous (perspective) normalization.
//!
//! An `(N + 1)`-lane homogeneous vector maps to its `N`-lane Euclidean form
//! by dividing the leading lanes by the trailing `w`. The leading lanes are
//! never copied out one by one: they are viewed in place as the smaller
//! aggregate (see [`crate::alias`]) and that view is divided by `w`.
//!
//! `w` is not guarded. With float lanes a zero `w` yields signed infinities
//! (NaN for `0 / 0`); with integer lanes the element type's own division
//! applies, which panics on zero.

use crate::scalar::Numeric;
use crate::vec::{Vec2, Vec3, Vec4};
use crate::vector::{Vector, Vector2, Vector3, Vector4};

/// A vector whose last lane is a homogeneous divisor.
pub trait Homogeneous: Copy {
    /// Euclidean counterpart, one lane shorter (a scalar for two lanes).
    type Euclidean;

    /// Divides the leading lanes by the last lane.
    fn normalize_homogeneous(self) -> Self::Euclidean;
}

/// Divides the leading lanes of `v` by its last lane.
///
/// # Examples
/// ```
/// use facet_math::{normalize_homogeneous, Vector};
/// let p = normalize_homogeneous(Vector::new([2.0_f64, 4.0, 6.0, 2.0]));
/// assert_eq!(p.to_array(), [1.0, 2.0, 3.0]);
/// ```
#[inline]
pub fn normalize_homogeneous<V: Homogeneous>(v: V) -> V::Euclidean {
    v.normalize_homogeneous()
}

impl<T: Numeric> Homogeneous for Vector4<T> {
    type Euclidean = Vector3<T>;

    fn normalize_homogeneous(self) -> Vector3<T> {
        let w = self[3];
        Vector::new(*self.leading::<3>()) / w
    }
}

impl<T: Numeric> Homogeneous for Vector3<T> {
    type Euclidean = Vector2<T>;

    fn normalize_homogeneous(self) -> Vector2<T> {
        let w = self[2];
        Vector::new(*self.leading::<2>()) / w
    }
}

impl<T: Numeric> Homogeneous for Vector2<T> {
    type Euclidean = T;

    fn normalize_homogeneous(self) -> T {
        let [x] = *self.leading::<1>();
        x / self[1]
    }
}

impl Homogeneous for Vec4 {
    type Euclidean = Vec3;

    fn normalize_homogeneous(self) -> Vec3 {
        let xyz = self.xyz();
        Vec3::new(xyz.x / self.w, xyz.y / self.w, xyz.z / self.w)
    }
}

impl Homogeneous for Vec3 {
    type Euclidean = Vec2;

    fn normalize_homogeneous(self) -> Vec2 {
        let xy = self.xy();
        Vec2::new(xy.x / self.z, xy.y / self.z)
    }
}

impl Homogeneous for Vec2 {
    type Euclidean = f32;

    fn normalize_homogeneous(self) -> f32 {
        self.x / self.y
    }
}
