// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quaternion → yaw/pitch/roll decomposition (Z-Y-X, aerospace order).
//!
//! * `yaw` rotates about +Z, `pitch` about +Y, `roll` about +X.
//! * The quaternion must already be unit length. Non-unit input still
//!   returns finite angles where the formulas allow, but they do not
//!   describe a pure rotation.
//! * Near pitch = ±90° the `asin` argument can drift past ±1 through
//!   rounding. Pitch then snaps to ±π/2 with the sign of the argument, so
//!   the pole that was approached is kept.

use core::f32::consts::FRAC_PI_2;

use crate::quat::Quat;

/// Yaw, pitch and roll in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// Rotation about +Z, in `[-π, π]`.
    pub yaw: f32,
    /// Rotation about +Y, in `[-π/2, π/2]`.
    pub pitch: f32,
    /// Rotation about +X, in `[-π, π]`.
    pub roll: f32,
}

impl EulerAngles {
    /// Creates an angle triple (radians).
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Returns `[yaw, pitch, roll]`.
    pub fn to_array(self) -> [f32; 3] {
        [self.yaw, self.pitch, self.roll]
    }
}

/// Decomposes a unit quaternion into yaw/pitch/roll.
///
/// # Examples
/// ```
/// use facet_math::{quat_to_euler, EulerAngles, Quat};
/// assert_eq!(quat_to_euler(Quat::identity()), EulerAngles::new(0.0, 0.0, 0.0));
/// ```
pub fn quat_to_euler(q: Quat) -> EulerAngles {
    let Quat { x, y, z, w } = q;

    let roll = libm::atan2f(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y));
    let pitch = clamped_asin(2.0 * (w * y - z * x));
    let yaw = libm::atan2f(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z));

    EulerAngles { yaw, pitch, roll }
}

/// `asin` that answers ±π/2 instead of NaN once `|sin_pitch| >= 1`.
fn clamped_asin(sin_pitch: f32) -> f32 {
    if sin_pitch.abs() >= 1.0 {
        FRAC_PI_2.copysign(sin_pitch)
    } else {
        libm::asinf(sin_pitch)
    }
}

impl Quat {
    /// Decomposes this (unit) quaternion; see [`quat_to_euler`].
    pub fn to_euler(&self) -> EulerAngles {
        quat_to_euler(*self)
    }
}
