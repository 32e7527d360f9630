// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// Immutable 2D point or direction.
///
/// NaN and infinite components are accepted and propagate; nothing here
/// rejects them.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Vector with every component set to one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector from components and normalizes it.
    pub fn create_normalized(x: f64, y: f64) -> Self {
        Self::new(x, y).normalize()
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Componentwise product.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Flips the direction of the vector.
    pub fn negate(&self) -> Self {
        Self::new(-self.x(), -self.y())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Divides by [`Self::length`]. The zero vector yields NaN components.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Self::new(self.x() / len, self.y() / len)
    }

    /// Angle between two vectors in radians.
    ///
    /// The cosine is **not** clamped: rounding that pushes it just outside
    /// `[-1, 1]` yields NaN. [`crate::math::Vec3::angle_between`] clamps.
    pub fn angle_between(a: &Self, b: &Self) -> f64 {
        (a.dot(b) / (a.length() * b.length())).acos()
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

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x(), self.y())
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2::add(&self, &rhs)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::sub(&self, &rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs.scale(self)
    }
}
