// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric capability set for the generic vector family.
//!
//! `Numeric` bundles what homogeneous normalization needs from an element
//! type: plain-old-data layout (so lanes can be viewed in place), the four
//! arithmetic operators, equality and ordering. Division semantics are the
//! element type's own: IEEE-754 for floats, panicking divide-by-zero for
//! integers.

use bytemuck::Pod;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Fixed-width numeric element usable as a vector lane.
pub trait Numeric:
    Pod
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_numeric {
    ($($ty:ty => $zero:expr, $one:expr;)*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_numeric! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
}
