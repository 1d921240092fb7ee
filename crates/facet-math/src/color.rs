// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Packed ARGB32 colors viewed as byte-lane vectors.
//!
//! [`Argb32::argb`] is the one place the packed integer is reinterpreted;
//! [`Argb32::rgb`] and [`Argb32::rgba`] are lane shuffles of its result.
//!
//! Lane order is the integer's little-endian byte order, lowest address
//! first: for `0xAARRGGBB` that is `(BB, GG, RR, AA)`. The integer is
//! brought to little-endian representation before the reinterpretation,
//! which compiles to nothing on little-endian targets and keeps the same
//! lane order on big-endian ones.

use core::fmt;
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::alias;
use crate::error::ParseError;
use crate::vector::{Vector3, Vector4};

/// Lanes of [`Argb32::argb`] picked by [`Argb32::rgb`].
const RGB_LANES: [usize; 3] = [1, 2, 3];
/// Lanes of [`Argb32::argb`] picked by [`Argb32::rgba`].
const RGBA_LANES: [usize; 4] = [1, 2, 3, 0];

/// Color packed into a `u32` as `0xAARRGGBB`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argb32(u32);

impl Argb32 {
    /// Wraps a packed `0xAARRGGBB` value.
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// Packs individual channels.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Returns the packed value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// The packed integer's bytes as four lanes, lowest address first.
    ///
    /// # Examples
    /// ```
    /// use facet_math::Argb32;
    /// let lanes = Argb32::new(0xAABBCCDD).argb();
    /// assert_eq!(lanes.to_array(), [0xDD, 0xCC, 0xBB, 0xAA]);
    /// ```
    pub fn argb(self) -> Vector4<u8> {
        Vector4::new(alias::reinterpret::<u32, [u8; 4]>(self.0.to_le()))
    }

    /// Lanes `[1, 2, 3]` of [`Argb32::argb`].
    pub fn rgb(self) -> Vector3<u8> {
        self.argb().shuffle(RGB_LANES)
    }

    /// Lanes `[1, 2, 3, 0]` of [`Argb32::argb`].
    pub fn rgba(self) -> Vector4<u8> {
        self.argb().shuffle(RGBA_LANES)
    }
}

impl From<u32> for Argb32 {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Argb32> for u32 {
    fn from(color: Argb32) -> Self {
        color.0
    }
}

impl fmt::Debug for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb32(#{:08X})", self.0)
    }
}

impl fmt::Display for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Accepts `#AARRGGBB`, `0xAARRGGBB` or eight bare hex digits.
impl FromStr for Argb32 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 8 {
            return Err(ParseError::ColorLength(s.to_owned()));
        }
        // `from_str_radix` would also take a leading sign.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::ColorDigits(s.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseError::ColorDigits(s.to_owned()))
    }
}
