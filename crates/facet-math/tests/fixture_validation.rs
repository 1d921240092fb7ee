// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture-driven validation of the geometry helpers.
//!
//! Keeps angle conversion, homogeneous divide, Euler decomposition, transform
//! composition and color lanes pinned to documented values.

#![allow(missing_docs)]
use once_cell::sync::Lazy;
use serde::Deserialize;

use facet_math::{
    create_transform_matrix, deg_to_rad, normalize_homogeneous, quat_to_euler, rad_to_deg, Argb32,
    Quat, Vec2, Vec3, Vec4,
};

static RAW_FIXTURES: &str = include_str!("fixtures/geom-fixtures.json");

static FIXTURES: Lazy<GeomFixtures> = Lazy::new(|| {
    let fixtures: GeomFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse geometry fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct GeomFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    angles: AngleFixtures,
    homogeneous: HomogeneousFixtures,
    euler: Vec<EulerFixture>,
    transform: Vec<TransformFixture>,
    colors: Vec<ColorFixture>,
}

impl GeomFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "fixture set '{name}' must not be empty");
        }

        ensure("angles.deg_to_rad", &self.angles.deg_to_rad);
        ensure("angles.rad_to_deg", &self.angles.rad_to_deg);
        ensure("homogeneous.vec4", &self.homogeneous.vec4);
        ensure("homogeneous.vec3", &self.homogeneous.vec3);
        ensure("homogeneous.vec2", &self.homogeneous.vec2);
        ensure("euler", &self.euler);
        ensure("transform", &self.transform);
        ensure("colors", &self.colors);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-6
    }

    const fn default_relative() -> f32 {
        1e-6
    }

    fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }

    fn assert_close(&self, context: &str, actual: f32, expected: f32) {
        let diff = (actual - expected).abs();
        let allowed = self.allowed_error(expected);
        assert!(
            diff <= allowed,
            "{context}: expected {expected}, got {actual} (diff {diff}, allowed {allowed})"
        );
    }

    fn assert_close_slice(&self, context: &str, actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            self.assert_close(&format!("{context}[{i}]"), *a, *e);
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AngleFixtures {
    deg_to_rad: Vec<UnaryFixture>,
    rad_to_deg: Vec<UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: f32,
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct HomogeneousFixtures {
    vec4: Vec<DivideFixture<[f32; 4], [f32; 3]>>,
    vec3: Vec<DivideFixture<[f32; 3], [f32; 2]>>,
    vec2: Vec<DivideFixture<[f32; 2], f32>>,
}

#[derive(Debug, Deserialize)]
struct DivideFixture<I, E> {
    input: I,
    expected: E,
}

#[derive(Debug, Deserialize)]
struct EulerFixture {
    quat: [f32; 4],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct TransformFixture {
    translation: [f32; 3],
    rotation: [f32; 4],
    scale: [f32; 3],
    expected: [f32; 16],
}

#[derive(Debug, Deserialize)]
struct ColorFixture {
    packed: u32,
    argb: [u8; 4],
    rgb: [u8; 3],
    rgba: [u8; 4],
}

#[test]
fn angle_fixtures() {
    let fx = &*FIXTURES;
    for (i, case) in fx.angles.deg_to_rad.iter().enumerate() {
        fx.tolerance
            .assert_close(&format!("deg_to_rad[{i}]"), deg_to_rad(case.value), case.expected);
    }
    for (i, case) in fx.angles.rad_to_deg.iter().enumerate() {
        fx.tolerance
            .assert_close(&format!("rad_to_deg[{i}]"), rad_to_deg(case.value), case.expected);
    }
}

#[test]
fn homogeneous_fixtures() {
    let fx = &*FIXTURES;
    for (i, case) in fx.homogeneous.vec4.iter().enumerate() {
        let out = normalize_homogeneous(Vec4::from(case.input));
        fx.tolerance
            .assert_close_slice(&format!("vec4[{i}]"), &out.to_array(), &case.expected);
    }
    for (i, case) in fx.homogeneous.vec3.iter().enumerate() {
        let out = normalize_homogeneous(Vec3::from(case.input));
        fx.tolerance
            .assert_close_slice(&format!("vec3[{i}]"), &out.to_array(), &case.expected);
    }
    for (i, case) in fx.homogeneous.vec2.iter().enumerate() {
        let out = normalize_homogeneous(Vec2::from(case.input));
        fx.tolerance.assert_close(&format!("vec2[{i}]"), out, case.expected);
    }
}

#[test]
fn euler_fixtures() {
    let fx = &*FIXTURES;
    for (i, case) in fx.euler.iter().enumerate() {
        let out = quat_to_euler(Quat::from(case.quat));
        fx.tolerance
            .assert_close_slice(&format!("euler[{i}]"), &out.to_array(), &case.expected);
    }
}

#[test]
fn transform_fixtures() {
    let fx = &*FIXTURES;
    for (i, case) in fx.transform.iter().enumerate() {
        let m = create_transform_matrix(
            Vec3::from(case.translation),
            Quat::from(case.rotation),
            Vec3::from(case.scale),
        );
        fx.tolerance
            .assert_close_slice(&format!("transform[{i}]"), &m.to_array(), &case.expected);
    }
}

#[test]
fn color_fixtures() {
    for case in &FIXTURES.colors {
        let c = Argb32::new(case.packed);
        assert_eq!(c.argb().to_array(), case.argb, "{c:?} argb");
        assert_eq!(c.rgb().to_array(), case.rgb, "{c:?} rgb");
        assert_eq!(c.rgba().to_array(), case.rgba, "{c:?} rgba");
    }
}
