// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::num::ParseFloatError;

use thiserror::Error;

/// Failure to parse the textual form of a vector, quaternion or color.
///
/// Vectors and quaternions are written as comma-separated components
/// (`"1, 2.5, -3"`); colors as `#AARRGGBB`, `0xAARRGGBB` or eight bare hex
/// digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of comma-separated components.
    #[error("expected {expected} components, found {found}")]
    Arity {
        /// Components required by the target type.
        expected: usize,
        /// Components present in the input.
        found: usize,
    },
    /// A component was not a valid float.
    #[error("component {index}: {source}")]
    Component {
        /// Zero-based position of the offending component.
        index: usize,
        /// Underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// A color literal was not eight hex digits.
    #[error("color must be 8 hex digits (AARRGGBB), got {0:?}")]
    ColorLength(String),
    /// A color literal had eight characters that were not all hex digits.
    #[error("color digits must be 0-9, a-f or A-F, got {0:?}")]
    ColorDigits(String),
}

/// Parses exactly `N` comma-separated `f32` components.
pub(crate) fn parse_components<const N: usize>(text: &str) -> Result<[f32; N], ParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseError::Arity {
            expected: N,
            found: parts.len(),
        });
    }
    let mut out = [0.0_f32; N];
    for (index, (slot, part)) in out.iter_mut().zip(parts).enumerate() {
        *slot = part
            .parse()
            .map_err(|source| ParseError::Component { index, source })?;
    }
    Ok(out)
}
