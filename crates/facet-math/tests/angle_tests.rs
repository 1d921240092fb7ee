// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use facet_math::{deg_to_rad, rad_to_deg};

#[test]
fn half_turn_is_pi_f32() {
    assert!((deg_to_rad(180.0_f32) - core::f32::consts::PI).abs() <= 1e-6);
    assert!((rad_to_deg(core::f32::consts::PI) - 180.0).abs() <= 1e-4);
}

#[test]
fn half_turn_is_pi_f64() {
    assert!((deg_to_rad(180.0_f64) - core::f64::consts::PI).abs() <= 1e-15);
    assert!((rad_to_deg(core::f64::consts::PI) - 180.0).abs() <= 1e-12);
}

#[test]
fn deg_rad_roundtrip_basic_angles() {
    for deg in [0.0_f32, 45.0, 90.0, 180.0, -90.0, 360.0, 720.5] {
        let back = rad_to_deg(deg_to_rad(deg));
        assert!((back - deg).abs() <= 1e-4 * deg.abs().max(1.0), "{deg} -> {back}");
    }
    for deg in [0.0_f64, 45.0, 90.0, 180.0, -90.0, 360.0, 720.5] {
        let back = rad_to_deg(deg_to_rad(deg));
        assert!((back - deg).abs() <= 1e-12 * deg.abs().max(1.0), "{deg} -> {back}");
    }
}

#[test]
fn f64_is_strictly_more_precise_at_right_angle() {
    let exact = core::f64::consts::FRAC_PI_2;
    let single = f64::from(deg_to_rad(90.0_f32));
    let double = deg_to_rad(90.0_f64);
    assert!((double - exact).abs() <= (single - exact).abs());
}
