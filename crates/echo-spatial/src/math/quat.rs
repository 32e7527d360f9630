// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use crate::math::{Vec2, Vec3};

/// Quaternion `w + xi + yj + zk` stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians.
/// * Unit length is **not** enforced here; unnormalized quaternions are valid
///   algebra (scale/reflection). [`crate::math::Rotation`] is the type that
///   guarantees a unit quaternion.
/// * `Default` is the identity `(0, 0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 4]", into = "[f64; 4]")
)]
pub struct Quat {
    data: [f64; 4],
}

impl Quat {
    /// The identity quaternion `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Use [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// X (i) component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y (j) component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z (k) component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Scalar component.
    pub const fn w(&self) -> f64 {
        self.data[3]
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub const fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized first; a zero axis therefore yields NaN
    /// components.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let norm_axis = axis.normalize();
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters. Used as composition, `a.multiply(&b)` applies
    /// `b` first and then `a`. Getting this backwards composes rotations in
    /// the wrong order.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use echo_spatial::math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UP, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::RIGHT, FRAC_PI_2);
    /// let composed = yaw.multiply(&pitch); // pitch, then yaw
    /// let other = pitch.multiply(&yaw);
    /// assert_ne!(composed.to_array(), other.to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (other.x(), other.y(), other.z(), other.w());

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Conjugate `(-x, -y, -z, w)`.
    ///
    /// Only a true inverse for unit quaternions.
    pub fn invert(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Quaternion norm.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared quaternion norm.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Divides every component by [`Self::length`]; zero yields NaN.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Self::new(
            self.x() / len,
            self.y() / len,
            self.z() / len,
            self.w() / len,
        )
    }

    /// Rotates `v` by this quaternion (`q v q⁻¹`), expanded in closed form.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        let (qx, qy, qz, qw) = (self.x(), self.y(), self.z(), self.w());
        let (x, y, z) = (v.x(), v.y(), v.z());

        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        Vec3::new(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
            iz * qw + iw * -qz + ix * -qy - iy * -qx,
        )
    }

    /// Rotates a point in the XY plane (`z = 0`) and drops the resulting Z.
    ///
    /// Lossy: exact only for rotations about the Z axis.
    pub fn rotate_vec2(&self, v: &Vec2) -> Vec2 {
        let (qx, qy, qz, qw) = (self.x(), self.y(), self.z(), self.w());
        let (x, y) = (v.x(), v.y());

        let ix = qw * x - qz * y;
        let iy = qw * y + qz * x;
        let iz = qx * y - qy * x;
        let iw = -qx * x - qy * y;

        Vec2::new(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
        )
    }

    /// Angle in radians between two unit rotation quaternions:
    /// `2·acos((a⁻¹·b).w)`.
    ///
    /// `w` is clamped to `[-1, 1]` so identical rotations give `0` instead of
    /// NaN from rounding.
    pub fn angle_between_rotations(a: &Self, b: &Self) -> f64 {
        let delta = a.invert().multiply(b);
        2.0 * delta.w().clamp(-1.0, 1.0).acos()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a 4‑element `[f64; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not applied.
impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f64; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

/// `a * b` is [`Quat::multiply`]: `b` is applied first.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
