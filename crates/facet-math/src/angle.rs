// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Degree/radian conversion in single and double precision.

use core::ops::Mul;

/// Floating types with their own degree/radian factors.
///
/// Each precision rounds the decimal factor once, directly to itself;
/// the `f32` factor is never a narrowed `f64` or vice versa.
pub trait AngleScalar: Copy + Mul<Output = Self> {
    /// `π / 180` rounded to `Self`.
    const DEG_TO_RAD: Self;
    /// `180 / π` rounded to `Self`.
    const RAD_TO_DEG: Self;
}

impl AngleScalar for f32 {
    const DEG_TO_RAD: Self = 0.017_453_292_f32;
    const RAD_TO_DEG: Self = 57.295_78_f32;
}

impl AngleScalar for f64 {
    const DEG_TO_RAD: Self = 0.017_453_292_519_943_295_f64;
    const RAD_TO_DEG: Self = 57.295_779_513_082_32_f64;
}

/// Converts degrees to radians in the precision of `value`.
///
/// # Examples
/// ```
/// use facet_math::deg_to_rad;
/// assert!((deg_to_rad(180.0_f64) - core::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn deg_to_rad<T: AngleScalar>(value: T) -> T {
    value * T::DEG_TO_RAD
}

/// Converts radians to degrees in the precision of `value`.
#[inline]
pub fn rad_to_deg<T: AngleScalar>(value: T) -> T {
    value * T::RAD_TO_DEG
}
