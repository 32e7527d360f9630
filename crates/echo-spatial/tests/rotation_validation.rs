// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation validation harness.
//!
//! Checks axis-angle, Euler, vector application, look, and SLERP results
//! against the reference values in `fixtures/rotation-fixtures.json`.

use once_cell::sync::Lazy;
use serde::Deserialize;

use echo_spatial::math::{EulerAngles, EulerOrder, Quat, Rotation, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/rotation-fixtures.json");

static FIXTURES: Lazy<RotationFixtures> = Lazy::new(|| {
    let fixtures: RotationFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse rotation fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct RotationFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    axis_angle: Vec<AxisAngleFixture>,
    euler: Vec<EulerFixture>,
    rotate_vec3: Vec<RotateFixture>,
    look: Vec<LookFixture>,
    interpolate: Vec<InterpolateFixture>,
}

impl RotationFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(
                !slice.is_empty(),
                "rotation fixtures set '{name}' must not be empty (len={})",
                slice.len()
            );
        }

        ensure("axis_angle", &self.axis_angle);
        ensure("euler", &self.euler);
        ensure("rotate_vec3", &self.rotate_vec3);
        ensure("look", &self.look);
        ensure("interpolate", &self.interpolate);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f64,
    #[serde(default = "Tolerance::default_relative")]
    relative: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-12
    }

    const fn default_relative() -> f64 {
        1e-12
    }

    fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
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
struct AxisAngleFixture {
    axis: [f64; 3],
    angle: f64,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct EulerFixture {
    x: f64,
    y: f64,
    z: f64,
    order: String,
    extrinsic: bool,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct RotateFixture {
    rotation: [f64; 4],
    vector: [f64; 3],
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct LookFixture {
    direction: [f64; 3],
    upwards: [f64; 3],
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct InterpolateFixture {
    a: [f64; 4],
    b: [f64; 4],
    amount: f64,
    expected: [f64; 4],
}

fn assert_components(actual: &[f64], expected: &[f64], tol: &Tolerance, ctx: &str) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        let allowed = tol.allowed_error(*e);
        assert!(
            diff <= allowed,
            "{ctx}[{i}]: expected {e}, got {a} (diff {diff} > {allowed})"
        );
    }
}

fn assert_rotation(actual: &Rotation, expected: [f64; 4], tol: &Tolerance, ctx: &str) {
    assert_components(&actual.quaternion().to_array(), &expected, tol, ctx);
}

#[test]
fn axis_angle_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.axis_angle {
        let actual = Rotation::from_axis_angle(Vec3::from(fix.axis), fix.angle);
        assert_rotation(
            &actual,
            fix.expected,
            tol,
            &format!("axis_angle axis={:?} angle={}", fix.axis, fix.angle),
        );
    }
}

#[test]
fn euler_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.euler {
        let order: EulerOrder = fix
            .order
            .parse()
            .unwrap_or_else(|e| panic!("fixture order {:?}: {e}", fix.order));
        let mut angles = EulerAngles::new(fix.x, fix.y, fix.z).with_order(order);
        if fix.extrinsic {
            angles = angles.as_extrinsic();
        }
        assert_rotation(
            &Rotation::from_euler(angles),
            fix.expected,
            tol,
            &format!(
                "euler ({}, {}, {}) order={} extrinsic={}",
                fix.x, fix.y, fix.z, fix.order, fix.extrinsic
            ),
        );
    }
}

#[test]
fn rotate_vec3_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.rotate_vec3 {
        let rotation = Rotation::from_quaternion(Quat::from(fix.rotation));
        let actual = rotation.rotate_vec3(&Vec3::from(fix.vector));
        assert_components(
            &actual.to_array(),
            &fix.expected,
            tol,
            &format!("rotate_vec3 q={:?} v={:?}", fix.rotation, fix.vector),
        );
    }
}

#[test]
fn look_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.look {
        let ctx = format!("look direction={:?} upwards={:?}", fix.direction, fix.upwards);
        let actual = Rotation::look(Vec3::from(fix.direction), Vec3::from(fix.upwards))
            .unwrap_or_else(|e| panic!("{ctx}: {e}"));
        assert_rotation(&actual, fix.expected, tol, &ctx);
    }
}

#[test]
fn interpolate_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.interpolate {
        let a = Rotation::from_quaternion(Quat::from(fix.a));
        let b = Rotation::from_quaternion(Quat::from(fix.b));
        assert_rotation(
            &Rotation::interpolate(&a, &b, fix.amount),
            fix.expected,
            tol,
            &format!("interpolate amount={}", fix.amount),
        );
    }
}
