// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One function per subcommand; each wraps a single `facet_math` operation
//! and returns a [`Report`] for rendering.

use std::str::FromStr;

use anyhow::{bail, Result};
use facet_math::{
    create_transform_matrix, create_transform_matrix_homogeneous, deg_to_rad,
    normalize_homogeneous, quat_to_euler, rad_to_deg, Argb32, EulerAngles, ParseError, Quat,
    Vec2, Vec3, Vec4,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::lossless;
use crate::prefs::AngleUnit;

/// Result of one subcommand, ready to render as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Converted angle.
    Angle {
        /// Value the conversion used (narrowed to `f32` unless `--f64`).
        #[serde(serialize_with = "lossless::scalar")]
        input: f64,
        /// Converted value.
        #[serde(serialize_with = "lossless::scalar")]
        output: f64,
        /// Unit of `output`.
        unit: AngleUnit,
    },
    /// Perspective-divided vector (one lane for 2-lane input).
    Normalized {
        /// Euclidean lanes; a zero `w` leaves signed infinities or NaN.
        #[serde(serialize_with = "lossless::seq")]
        lanes: Vec<f32>,
    },
    /// Yaw/pitch/roll.
    Euler {
        /// Angles in `unit`.
        #[serde(serialize_with = "lossless::euler")]
        angles: EulerAngles,
        /// Unit of `angles`.
        unit: AngleUnit,
    },
    /// Column-major 4×4 matrix.
    Matrix {
        /// Four columns of four floats.
        #[serde(serialize_with = "lossless::matrix")]
        columns: [[f32; 4]; 4],
    },
    /// Byte lanes of a packed color.
    Color {
        /// Packed `0xAARRGGBB`.
        packed: Argb32,
        /// Lanes lowest address first.
        argb: [u8; 4],
        /// Lanes `[1, 2, 3]` of `argb`.
        rgb: [u8; 3],
        /// Lanes `[1, 2, 3, 0]` of `argb`.
        rgba: [u8; 4],
    },
}

/// Rejected lane list for a command-line vector argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    /// Lane count outside what the argument accepts.
    #[error("expected {allowed} comma-separated lanes, found {found}")]
    Count {
        /// Accepted counts, e.g. `"2 to 4"`.
        allowed: &'static str,
        /// Lanes present.
        found: usize,
    },
    /// Right count, but a lane is not a number.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Homogeneous vector of two to four lanes, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomogeneousInput {
    /// `x,w`
    Two(Vec2),
    /// `x,y,w`
    Three(Vec3),
    /// `x,y,z,w`
    Four(Vec4),
}

impl FromStr for HomogeneousInput {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split(',').count() {
            2 => Self::Two(s.parse()?),
            3 => Self::Three(s.parse()?),
            4 => Self::Four(s.parse()?),
            found => {
                return Err(LaneError::Count {
                    allowed: "2 to 4",
                    found,
                })
            }
        })
    }
}

/// Translation or scale given with three (Euclidean) or four (homogeneous) lanes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformLanes {
    /// `x,y,z`
    Euclidean(Vec3),
    /// `x,y,z,w`
    Homogeneous(Vec4),
}

impl FromStr for TransformLanes {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split(',').count() {
            3 => Self::Euclidean(s.parse()?),
            4 => Self::Homogeneous(s.parse()?),
            found => {
                return Err(LaneError::Count {
                    allowed: "3 or 4",
                    found,
                })
            }
        })
    }
}

/// `deg2rad`: degrees → radians in the requested precision.
#[allow(clippy::cast_possible_truncation)]
pub fn deg2rad(value: f64, double: bool) -> Report {
    let (input, output) = if double {
        (value, deg_to_rad(value))
    } else {
        let narrowed = value as f32;
        (f64::from(narrowed), f64::from(deg_to_rad(narrowed)))
    };
    Report::Angle {
        input,
        output,
        unit: AngleUnit::Radians,
    }
}

/// `rad2deg`: radians → degrees in the requested precision.
#[allow(clippy::cast_possible_truncation)]
pub fn rad2deg(value: f64, double: bool) -> Report {
    let (input, output) = if double {
        (value, rad_to_deg(value))
    } else {
        let narrowed = value as f32;
        (f64::from(narrowed), f64::from(rad_to_deg(narrowed)))
    };
    Report::Angle {
        input,
        output,
        unit: AngleUnit::Degrees,
    }
}

/// `normalize`: divide the leading lanes by the last.
pub fn normalize(input: HomogeneousInput) -> Report {
    let lanes = match input {
        HomogeneousInput::Two(v) => vec![normalize_homogeneous(v)],
        HomogeneousInput::Three(v) => normalize_homogeneous(v).to_array().to_vec(),
        HomogeneousInput::Four(v) => normalize_homogeneous(v).to_array().to_vec(),
    };
    if lanes.iter().any(|lane| !lane.is_finite()) {
        debug!(?input, "homogeneous divide produced non-finite lanes");
    }
    Report::Normalized { lanes }
}

/// `euler`: decompose a unit quaternion.
pub fn euler(q: Quat, unit: AngleUnit) -> Report {
    let radians = quat_to_euler(q);
    let angles = match unit {
        AngleUnit::Radians => radians,
        AngleUnit::Degrees => EulerAngles::new(
            rad_to_deg(radians.yaw),
            rad_to_deg(radians.pitch),
            rad_to_deg(radians.roll),
        ),
    };
    Report::Euler { angles, unit }
}

/// `transform`: compose scale → rotate → translate.
///
/// Translation and scale must both be Euclidean or both homogeneous.
pub fn transform(translation: TransformLanes, rotation: Quat, scale: TransformLanes) -> Result<Report> {
    let m = match (translation, scale) {
        (TransformLanes::Euclidean(t), TransformLanes::Euclidean(s)) => {
            create_transform_matrix(t, rotation, s)
        }
        (TransformLanes::Homogeneous(t), TransformLanes::Homogeneous(s)) => {
            create_transform_matrix_homogeneous(t, rotation, s)
        }
        _ => bail!("translation and scale must both have 3 lanes or both have 4 lanes"),
    };
    let flat = m.to_array();
    let mut columns = [[0.0_f32; 4]; 4];
    for (col, chunk) in columns.iter_mut().zip(flat.chunks_exact(4)) {
        col.copy_from_slice(chunk);
    }
    Ok(Report::Matrix { columns })
}

/// `color`: byte-lane views of a packed color.
pub fn color(packed: Argb32) -> Report {
    Report::Color {
        packed,
        argb: packed.argb().to_array(),
        rgb: packed.rgb().to_array(),
        rgba: packed.rgba().to_array(),
    }
}
