// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! facet-math: geometry and numeric helpers for the Facet renderer.
//!
//! Everything here is a pure function over `Copy` values: angle conversion,
//! homogeneous (perspective) divide, quaternion → Euler decomposition,
//! transform composition, and packed-color lane extraction.
//!
//! Fixed-layout aggregates (`Vector<T, N>`, `Vec2`/`Vec3`/`Vec4`, packed
//! colors) are reinterpreted as one another only through [`alias`], which is
//! built on `bytemuck` and checked at compile time.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::float_cmp
)]

/// Zero-copy reinterpretation between fixed-layout `Pod` aggregates.
pub mod alias;
/// Degree/radian conversion for `f32` and `f64`.
pub mod angle;
/// Packed ARGB32 colors and their byte-lane views.
pub mod color;
/// Parse errors for the textual forms of the value types.
pub mod error;
/// Quaternion → yaw/pitch/roll decomposition.
pub mod euler;
/// Homogeneous (perspective) normalization.
pub mod homogeneous;
/// Column-major 4×4 matrices.
pub mod mat4;
/// Rotation quaternions.
pub mod quat;
/// Numeric capability trait for generic vectors.
pub mod scalar;
/// Scale → rotate → translate composition.
pub mod transform;
/// Fixed single-precision vectors.
pub mod vec;
/// Generic fixed-arity vectors.
pub mod vector;

pub use angle::{deg_to_rad, rad_to_deg, AngleScalar};
pub use color::Argb32;
pub use error::ParseError;
pub use euler::{quat_to_euler, EulerAngles};
pub use homogeneous::{normalize_homogeneous, Homogeneous};
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Numeric;
pub use transform::{create_transform_matrix, create_transform_matrix_homogeneous, Transform};
pub use vec::{Vec2, Vec3, Vec4};
pub use vector::{Vector, Vector2, Vector3, Vector4};
