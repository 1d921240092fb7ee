// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Explicit, checked reinterpretation of one fixed-layout aggregate as another.
//!
//! Both helpers require `Pod` on either side, so every bit pattern of the
//! source is a valid value of the target and no padding bytes are read.
//! Size and alignment compatibility are asserted at compile time (the
//! `const` blocks are evaluated per instantiation); a mismatched pair fails
//! to build instead of panicking at runtime.
//!
//! These functions only check byte-level compatibility. Whether the lanes
//! line up semantically (same element type, same declared order) is the
//! caller's invariant; callers pin it with their own `size_of` assertions
//! next to the type definitions.

use bytemuck::Pod;
use core::mem::{align_of, size_of};

/// Views the leading `size_of::<Dst>()` bytes of `src` as a `Dst`.
///
/// Zero-copy: the returned reference borrows `src`.
///
/// # Examples
/// ```
/// use facet_math::alias::view_prefix;
/// let lanes = [1.0_f32, 2.0, 3.0, 4.0];
/// let head: &[f32; 3] = view_prefix(&lanes);
/// assert_eq!(head, &[1.0, 2.0, 3.0]);
/// ```
#[inline]
pub fn view_prefix<Src: Pod, Dst: Pod>(src: &Src) -> &Dst {
    const {
        assert!(size_of::<Dst>() <= size_of::<Src>(), "prefix view larger than source");
        assert!(align_of::<Dst>() <= align_of::<Src>(), "prefix view over-aligned");
    };
    // Alignment and length hold by the assertions above, so the cast cannot fail.
    bytemuck::from_bytes(&bytemuck::bytes_of(src)[..size_of::<Dst>()])
}

/// Views the first `M` lanes of an `N`-lane array as an `M`-lane array.
#[inline]
pub fn leading_lanes<T: Pod, const N: usize, const M: usize>(lanes: &[T; N]) -> &[T; M] {
    const { assert!(M <= N, "cannot take more lanes than the source has") };
    view_prefix(lanes)
}

/// Reinterprets `src` by value as a same-sized `Dst`.
///
/// # Examples
/// ```
/// use facet_math::alias::reinterpret;
/// let bytes: [u8; 4] = reinterpret(0x0102_0304_u32.to_le());
/// assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
/// ```
#[inline]
pub fn reinterpret<Src: Pod, Dst: Pod>(src: Src) -> Dst {
    const { assert!(size_of::<Src>() == size_of::<Dst>(), "reinterpret requires equal sizes") };
    bytemuck::cast(src)
}
