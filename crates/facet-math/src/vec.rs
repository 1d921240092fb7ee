// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-precision vectors with named lanes.
//!
//! All three types are `#[repr(C)]` runs of `f32` with no padding, so a
//! `Vec4` begins with a valid `Vec3`, which begins with a valid `Vec2`. The
//! compile-time assertions below pin that layout; [`Vec4::xyz`] and
//! [`Vec3::xy`] view the prefix in place through [`crate::alias`].

use core::mem::{align_of, size_of};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::alias;
use crate::error::{parse_components, ParseError};

/// Two-lane `f32` vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// First lane.
    pub x: f32,
    /// Second lane.
    pub y: f32,
}

/// Three-lane `f32` vector: a point or a direction depending on context.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// First lane.
    pub x: f32,
    /// Second lane.
    pub y: f32,
    /// Third lane.
    pub z: f32,
}

/// Four-lane `f32` vector, typically homogeneous `(x, y, z, w)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    /// First lane.
    pub x: f32,
    /// Second lane.
    pub y: f32,
    /// Third lane.
    pub z: f32,
    /// Fourth (homogeneous) lane.
    pub w: f32,
}

const _: () = assert!(size_of::<Vec2>() == 2 * size_of::<f32>());
const _: () = assert!(size_of::<Vec3>() == 3 * size_of::<f32>());
const _: () = assert!(size_of::<Vec4>() == 4 * size_of::<f32>());
const _: () = assert!(align_of::<Vec2>() == align_of::<f32>());
const _: () = assert!(align_of::<Vec3>() == align_of::<f32>());
const _: () = assert!(align_of::<Vec4>() == align_of::<f32>());

impl Vec2 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Vec3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Zero-copy view of `(x, y)`.
    pub fn xy(&self) -> &Vec2 {
        alias::view_prefix(self)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Zero-copy view of `(x, y, z)`.
    ///
    /// # Examples
    /// ```
    /// use facet_math::{Vec3, Vec4};
    /// let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(v.xyz(), &Vec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn xyz(&self) -> &Vec3 {
        alias::view_prefix(self)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl FromStr for Vec2 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<2>(s).map(Self::from)
    }
}

impl FromStr for Vec3 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<3>(s).map(Self::from)
    }
}

impl FromStr for Vec4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<4>(s).map(Self::from)
    }
}
