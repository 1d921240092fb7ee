// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};
use facet_math::{quat_to_euler, EulerAngles, Quat, Vec3};

fn approx_eq(a: f32, b: f32, tol: f32) {
    let diff = (a - b).abs();
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff}, tol {tol})");
}

fn approx_euler(a: EulerAngles, b: EulerAngles, tol: f32) {
    approx_eq(a.yaw, b.yaw, tol);
    approx_eq(a.pitch, b.pitch, tol);
    approx_eq(a.roll, b.roll, tol);
}

#[test]
fn identity_has_zero_angles() {
    assert_eq!(quat_to_euler(Quat::identity()), EulerAngles::new(0.0, 0.0, 0.0));
}

#[test]
fn single_axis_rotations_land_on_their_angle() {
    let yaw = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_6).to_euler();
    approx_euler(yaw, EulerAngles::new(FRAC_PI_6, 0.0, 0.0), 1e-6);

    let pitch = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_6).to_euler();
    approx_euler(pitch, EulerAngles::new(0.0, FRAC_PI_6, 0.0), 1e-6);

    let roll = Quat::from_axis_angle(Vec3::UNIT_X, -FRAC_PI_4).to_euler();
    approx_euler(roll, EulerAngles::new(0.0, 0.0, -FRAC_PI_4), 1e-6);
}

#[test]
fn quarter_turn_pitch_is_finite_half_pi() {
    let e = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2).to_euler();
    assert!(e.pitch.is_finite());
    // asin is steep at 1; float32 rounding of the half-angle sin/cos costs ~1e-3 rad.
    approx_eq(e.pitch, FRAC_PI_2, 1e-3);
    approx_eq(e.yaw, 0.0, 1e-6);
    approx_eq(e.roll, 0.0, 1e-6);

    let down = Quat::from_axis_angle(Vec3::UNIT_Y, -FRAC_PI_2).to_euler();
    approx_eq(down.pitch, -FRAC_PI_2, 1e-3);
}

#[test]
fn overshoot_clamps_to_exact_pole_with_sign() {
    // Slightly over-unit: 2(wy - zx) = 1.00027.
    let up = Quat::new(0.0, 0.7072, 0.0, 0.7072).to_euler();
    assert_eq!(up.pitch, FRAC_PI_2);

    let down = Quat::new(0.0, -0.7072, 0.0, 0.7072).to_euler();
    assert_eq!(down.pitch, -FRAC_PI_2);
}

#[test]
fn pole_with_twist_never_produces_nan() {
    for twist in [-2.5_f32, -1.0, 0.0, 0.7, 3.0] {
        let q = Quat::from_yaw_pitch_roll(twist, FRAC_PI_2, 0.0);
        let e = q.to_euler();
        assert!(e.to_array().iter().all(|a| a.is_finite()), "{q:?} -> {e:?}");
        approx_eq(e.pitch.abs(), FRAC_PI_2, 1e-3);
    }
}

#[test]
fn composed_rotation_roundtrips() {
    let (yaw, pitch, roll) = (0.4_f32, -0.3_f32, 1.1_f32);
    let e = Quat::from_yaw_pitch_roll(yaw, pitch, roll).to_euler();
    approx_euler(e, EulerAngles::new(yaw, pitch, roll), 1e-5);
}

#[test]
fn ypr_constructor_matches_axis_composition() {
    let (yaw, pitch, roll) = (0.9_f32, 0.2_f32, -0.6_f32);
    let composed = Quat::from_axis_angle(Vec3::UNIT_Z, yaw)
        .multiply(&Quat::from_axis_angle(Vec3::UNIT_Y, pitch))
        .multiply(&Quat::from_axis_angle(Vec3::UNIT_X, roll));
    let direct = Quat::from_yaw_pitch_roll(yaw, pitch, roll);
    for (a, b) in composed.to_array().into_iter().zip(direct.to_array()) {
        approx_eq(a, b, 1e-6);
    }
}
