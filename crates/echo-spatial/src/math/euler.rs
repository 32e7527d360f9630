// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use crate::math::{RotationError, Vec3};

/// One of the three principal axes an Euler step rotates about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerAxis {
    /// Rotation about `+X` ([`Vec3::RIGHT`]).
    X,
    /// Rotation about `+Y` ([`Vec3::FORWARD`]).
    Y,
    /// Rotation about `+Z` ([`Vec3::UP`]).
    Z,
}

impl EulerAxis {
    /// Unit vector of the axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::RIGHT,
            Self::Y => Vec3::FORWARD,
            Self::Z => Vec3::UP,
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

/// Order in which Euler steps are applied.
///
/// Covers the six Tait–Bryan orders (three distinct axes) and the six proper
/// Euler orders (first and last axis repeat). Parse one from its letters with
/// [`str::parse`]; case is ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[allow(clippy::upper_case_acronyms)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    #[default]
    XYZ,
    /// X, then Z, then Y.
    XZY,
    /// Y, then X, then Z.
    YXZ,
    /// Y, then Z, then X.
    YZX,
    /// Z, then X, then Y.
    ZXY,
    /// Z, then Y, then X.
    ZYX,
    /// X, then Y, then X.
    XYX,
    /// X, then Z, then X.
    XZX,
    /// Y, then X, then Y.
    YXY,
    /// Y, then Z, then Y.
    YZY,
    /// Z, then X, then Z.
    ZXZ,
    /// Z, then Y, then Z.
    ZYZ,
}

impl EulerOrder {
    /// Every supported order.
    pub const ALL: [Self; 12] = [
        Self::XYZ,
        Self::XZY,
        Self::YXZ,
        Self::YZX,
        Self::ZXY,
        Self::ZYX,
        Self::XYX,
        Self::XZX,
        Self::YXY,
        Self::YZY,
        Self::ZXZ,
        Self::ZYZ,
    ];

    /// The three axes in application order.
    pub const fn axes(self) -> [EulerAxis; 3] {
        use EulerAxis::{X, Y, Z};
        match self {
            Self::XYZ => [X, Y, Z],
            Self::XZY => [X, Z, Y],
            Self::YXZ => [Y, X, Z],
            Self::YZX => [Y, Z, X],
            Self::ZXY => [Z, X, Y],
            Self::ZYX => [Z, Y, X],
            Self::XYX => [X, Y, X],
            Self::XZX => [X, Z, X],
            Self::YXY => [Y, X, Y],
            Self::YZY => [Y, Z, Y],
            Self::ZXZ => [Z, X, Z],
            Self::ZYZ => [Z, Y, Z],
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.axes() {
            write!(f, "{}", axis.letter())?;
        }
        Ok(())
    }
}

impl FromStr for EulerOrder {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| RotationError::InvalidEulerOrder(s.to_owned()))
    }
}

impl TryFrom<String> for EulerOrder {
    type Error = RotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EulerOrder> for String {
    fn from(value: EulerOrder) -> Self {
        value.to_string()
    }
}

/// Euler angles in radians plus how to compose them.
///
/// * `order` defaults to [`EulerOrder::XYZ`].
/// * `extrinsic = false` (the default) is intrinsic: each step rotates about
///   the axis of the frame produced by the previous steps. `true` rotates
///   about the fixed world axes.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    /// Angle about the X axis.
    pub x: f64,
    /// Angle about the Y axis.
    pub y: f64,
    /// Angle about the Z axis.
    pub z: f64,
    /// Axis application order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: EulerOrder,
    /// Rotate about world axes instead of the rotating frame.
    #[cfg_attr(feature = "serde", serde(default))]
    pub extrinsic: bool,
}

impl EulerAngles {
    /// Intrinsic `XYZ` angles.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            order: EulerOrder::XYZ,
            extrinsic: false,
        }
    }

    /// Replaces the axis order.
    pub const fn with_order(self, order: EulerOrder) -> Self {
        Self { order, ..self }
    }

    /// Switches to extrinsic (world-axis) composition.
    pub const fn as_extrinsic(self) -> Self {
        Self {
            extrinsic: true,
            ..self
        }
    }

    /// Angle for a single axis.
    pub const fn angle(&self, axis: EulerAxis) -> f64 {
        match axis {
            EulerAxis::X => self.x,
            EulerAxis::Y => self.y,
            EulerAxis::Z => self.z,
        }
    }
}
