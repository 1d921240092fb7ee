// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scale → rotate → translate composition.
//!
//! The matrix is built in a fixed order: start from the pure scale matrix,
//! left-multiply by the rotation (rotating the scaled basis), then write the
//! translation straight into the last column. Translation never passes
//! through the rotation or the scale.

use crate::homogeneous::normalize_homogeneous;
use crate::mat4::Mat4;
use crate::quat::Quat;
use crate::vec::{Vec3, Vec4};

/// Builds `R · S` with its translation column set to `translation`.
///
/// # Examples
/// ```
/// use facet_math::{create_transform_matrix, Quat, Vec3};
/// let m = create_transform_matrix(
///     Vec3::new(1.0, 2.0, 3.0),
///     Quat::identity(),
///     Vec3::new(2.0, 2.0, 2.0),
/// );
/// assert_eq!(m.at(0, 0), 2.0);
/// assert_eq!(m.translation_column(), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn create_transform_matrix(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    let scaled = Mat4::scale(scale.x, scale.y, scale.z);
    rotation
        .to_mat4()
        .multiply(&scaled)
        .with_translation(translation)
}

/// Homogeneous variant: `translation` and `scale` are perspective-divided
/// by their `w` first, then passed to [`create_transform_matrix`].
pub fn create_transform_matrix_homogeneous(translation: Vec4, rotation: Quat, scale: Vec4) -> Mat4 {
    create_transform_matrix(
        normalize_homogeneous(translation),
        rotation,
        normalize_homogeneous(scale),
    )
}

/// Translation, rotation and non-uniform scale kept apart until needed.
///
/// Conventions:
/// - `rotation` is a unit quaternion; it is not renormalized.
/// - `scale` applies before rotation; `translation` is set last.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::new(0.0, 0.0, 0.0),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Creates a transform from homogeneous translation and scale.
    pub fn from_homogeneous(translation: Vec4, rotation: Quat, scale: Vec4) -> Self {
        Self::new(
            normalize_homogeneous(translation),
            rotation,
            normalize_homogeneous(scale),
        )
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Returns the column-major matrix; see [`create_transform_matrix`].
    pub fn to_mat4(&self) -> Mat4 {
        create_transform_matrix(self.translation, self.rotation, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_is_identity_matrix() {
        assert_eq!(Transform::identity().to_mat4(), Mat4::identity());
    }

    #[test]
    fn from_homogeneous_divides_inputs() {
        let t = Transform::from_homogeneous(
            Vec4::new(2.0, 4.0, 2.0, 2.0),
            Quat::identity(),
            Vec4::new(6.0, 9.0, 3.0, 3.0),
        );
        assert_eq!(t.translation(), Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(t.scale(), Vec3::new(2.0, 3.0, 1.0));
    }
}
