// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rotation quaternions: construction, composition and matrix form.

use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::error::{parse_components, ParseError};
use crate::mat4::Mat4;
use crate::vec::Vec3;

/// Rotation quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// * Angles are radians.
/// * Nothing here renormalizes: callers hand in unit quaternions and every
///   operation uses the components verbatim.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// Vector part, X.
    pub x: f32,
    /// Vector part, Y.
    pub y: f32,
    /// Vector part, Z.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quat {
    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Constructs a quaternion from a unit rotation axis and an angle in radians.
    ///
    /// The axis is used as given; pass a unit vector.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin_half, cos_half) = libm::sincosf(angle * 0.5);
        let v = axis.scale(sin_half);
        Self::new(v.x, v.y, v.z, cos_half)
    }

    /// Builds the rotation `R_z(yaw) · R_y(pitch) · R_x(roll)`.
    ///
    /// Inverse of [`Quat::to_euler`] away from the poles: yaw about +Z,
    /// pitch about +Y, roll about +X.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_4;
    /// use facet_math::Quat;
    /// let q = Quat::from_yaw_pitch_roll(FRAC_PI_4, 0.0, 0.0);
    /// let e = q.to_euler();
    /// assert!((e.yaw - FRAC_PI_4).abs() < 1e-6);
    /// ```
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sy, cy) = libm::sincosf(yaw * 0.5);
        let (sp, cp) = libm::sincosf(pitch * 0.5);
        let (sr, cr) = libm::sincosf(roll * 0.5);

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Applying the result rotates by `other` first, then by `self`.
    /// Quaternion multiplication is non‑commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (other.x, other.y, other.z, other.w);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    ///
    /// Uses the components as-is; a non-unit quaternion yields a matrix that
    /// also scales.
    pub fn to_mat4(&self) -> Mat4 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Components are taken verbatim as `(x, y, z, w)`.
impl From<[f32; 4]> for Quat {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl FromStr for Quat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<4>(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_maps_to_identity_matrix() {
        assert_eq!(Quat::identity().to_mat4(), Mat4::identity());
    }

    #[test]
    fn yaw_only_matches_axis_angle_about_z() {
        let a = Quat::from_yaw_pitch_roll(FRAC_PI_2, 0.0, 0.0);
        let b = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
        for (l, r) in a.to_array().into_iter().zip(b.to_array()) {
            assert!((l - r).abs() < 1e-7, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn multiply_is_non_commutative() {
        let yaw = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
        let pitch = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
        assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    }
}
