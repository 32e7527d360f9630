// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::Vec2;

/// Immutable 3D point or direction.
///
/// * The axis convention is **Y-forward, Z-up**: [`Vec3::FORWARD`] is
///   `(0, 1, 0)` and [`Vec3::UP`] is `(0, 0, 1)`. Tile placement and other
///   callers rely on this; do not swap it for a Y-up convention.
/// * The cross product is right-handed: `RIGHT × FORWARD = UP`.
/// * Components may be NaN or infinite; they propagate.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector with every component set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Canonical forward, `+Y`.
    pub const FORWARD: Self = Self::new(0.0, 1.0, 0.0);

    /// Canonical back, `-Y`.
    pub const BACK: Self = Self::new(0.0, -1.0, 0.0);

    /// Canonical right, `+X`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// Canonical left, `-X`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Canonical up, `+Z`.
    pub const UP: Self = Self::new(0.0, 0.0, 1.0);

    /// Canonical down, `-Z`.
    pub const DOWN: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector from components and normalizes it.
    pub fn create_normalized(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z).normalize()
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Projection onto the XY plane.
    pub const fn xy(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Projection onto the XZ plane.
    pub const fn xz(&self) -> Vec2 {
        Vec2::new(self.x(), self.z())
    }

    /// Projection onto the YZ plane.
    pub const fn yz(&self) -> Vec2 {
        Vec2::new(self.y(), self.z())
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Componentwise product.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Flips the direction of the vector.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Divides by [`Self::length`].
    ///
    /// Returns `self` untouched when the length is exactly `1`. The zero
    /// vector yields NaN components.
    #[allow(clippy::float_cmp)]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 1.0 {
            return *self;
        }
        Self::new(self.x() / len, self.y() / len, self.z() / len)
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so parallel inputs
    /// with rounding error still give `0` or `π` rather than NaN.
    pub fn angle_between(a: &Self, b: &Self) -> f64 {
        let cos = a.dot(b) / (a.length() * b.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Distance between two points.
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        b.sub(a).length()
    }

    /// Linear blend from `start` to `finish`. `amount` is not clamped.
    pub fn interpolate_position(start: &Self, finish: &Self, amount: f64) -> Self {
        start.add(&finish.sub(start).scale(amount))
    }

    /// Normalized linear blend between two directions. `amount` is not clamped.
    pub fn interpolate_direction(start: &Self, finish: &Self, amount: f64) -> Self {
        Self::interpolate_position(start, finish, amount).normalize()
    }
}

/// Converts a 3-element `[f64; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_spatial::math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}
