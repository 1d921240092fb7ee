// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON encoding for floats that may be non-finite.
//!
//! JSON has no spelling for infinities or NaN and `serde_json` writes them as
//! `null`, which loses the sign a zero `w` divide produces. Finite values stay
//! JSON numbers; the rest become the strings `"inf"`, `"-inf"` and `"nan"`.

use facet_math::EulerAngles;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// A float serialized without losing infinities or NaN.
#[derive(Debug, Clone, Copy)]
pub struct Lossless<T>(pub T);

macro_rules! impl_lossless {
    ($($t:ty),*) => {$(
        impl Serialize for Lossless<$t> {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                let v = self.0;
                if v.is_nan() {
                    s.serialize_str("nan")
                } else if v == <$t>::INFINITY {
                    s.serialize_str("inf")
                } else if v == <$t>::NEG_INFINITY {
                    s.serialize_str("-inf")
                } else {
                    v.serialize(s)
                }
            }
        }
    )*};
}

impl_lossless!(f32, f64);

/// `serialize_with` for a single float field.
pub fn scalar<T, S>(v: &T, s: S) -> Result<S::Ok, S::Error>
where
    T: Copy,
    Lossless<T>: Serialize,
    S: Serializer,
{
    Lossless(*v).serialize(s)
}

/// `serialize_with` for a list of floats.
pub fn seq<T, S>(v: &[T], s: S) -> Result<S::Ok, S::Error>
where
    T: Copy,
    Lossless<T>: Serialize,
    S: Serializer,
{
    s.collect_seq(v.iter().copied().map(Lossless))
}

/// `serialize_with` for a column-major 4×4 matrix.
pub fn matrix<S: Serializer>(columns: &[[f32; 4]; 4], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(columns.iter().map(|col| col.map(Lossless)))
}

/// `serialize_with` for yaw/pitch/roll; same field names as the library type.
pub fn euler<S: Serializer>(angles: &EulerAngles, s: S) -> Result<S::Ok, S::Error> {
    let mut st = s.serialize_struct("EulerAngles", 3)?;
    st.serialize_field("yaw", &Lossless(angles.yaw))?;
    st.serialize_field("pitch", &Lossless(angles.pitch))?;
    st.serialize_field("roll", &Lossless(angles.roll))?;
    st.end()
}
