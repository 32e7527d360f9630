// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::PI;
use core::fmt;

use thiserror::Error;
use tracing::debug;

use crate::constants::{
    LOOK_MIN_DIRECTION_LENGTH_SQUARED, LOOK_PARALLEL_THRESHOLD, SLERP_MIN_SIN_HALF_THETA,
};
use crate::math::{copy_sign, EulerAngles, Quat, Vec2, Vec3};

/// Errors produced while constructing a [`Rotation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// Look direction and upwards hint point the same way; no basis exists.
    #[error("look rotation direction and upwards are the same; cannot derive a right axis")]
    LookDirectionMatchesUpwards,
    /// Look direction and upwards hint point in opposite directions; no
    /// basis exists.
    #[error("look rotation direction and upwards are opposite; cannot derive a right axis")]
    LookDirectionOpposesUpwards,
    /// Euler order string is not one of the supported axis orders.
    #[error("invalid euler order: {0:?}")]
    InvalidEulerOrder(String),
}

/// Axis/angle decomposition of a rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAngle {
    /// Unit rotation axis.
    pub axis: Vec3,
    /// Angle in radians, in `[0, 2π]`.
    pub angle: f64,
}

/// Input shapes a [`Rotation`] can be built from.
///
/// Each variant has a matching direct constructor on [`Rotation`]; this enum
/// exists for callers that pick the shape at runtime (e.g. decoded tag
/// values) and want a single fallible entry point in [`Rotation::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum RotationSpec {
    /// No rotation.
    Identity,
    /// Rotate `angle` radians about `axis` (need not be unit length).
    AxisAngle {
        /// Rotation axis.
        axis: Vec3,
        /// Angle in radians.
        angle: f64,
    },
    /// Shortest rotation carrying `from` onto `to`.
    FromTo {
        /// Starting direction.
        from: Vec3,
        /// Target direction.
        to: Vec3,
    },
    /// A raw quaternion; normalized on construction.
    Quaternion(Quat),
    /// Rotations applied in order, first element first.
    Sequence(Vec<Rotation>),
    /// Euler angles.
    Euler(EulerAngles),
    /// Map forward onto `direction` and up as close to `upwards` as possible.
    Look {
        /// Where [`Vec3::FORWARD`] should end up.
        direction: Vec3,
        /// Where [`Vec3::UP`] should approximately end up.
        upwards: Vec3,
    },
}

/// A spatial rotation backed by a unit quaternion.
///
/// Every constructor normalizes the quaternion, so a `Rotation` is always
/// unit length (up to NaN from degenerate inputs). There is no way to mutate
/// one after construction; operations return new rotations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Quat", into = "Quat")
)]
pub struct Rotation {
    quaternion: Quat,
}

impl Rotation {
    /// Builds a rotation from any [`RotationSpec`].
    ///
    /// Only [`RotationSpec::Look`] can fail.
    pub fn new(spec: RotationSpec) -> Result<Self, RotationError> {
        let rotation = match spec {
            RotationSpec::Identity => Self::identity(),
            RotationSpec::AxisAngle { axis, angle } => Self::from_axis_angle(axis, angle),
            RotationSpec::FromTo { from, to } => Self::from_to(from, to),
            RotationSpec::Quaternion(q) => Self::from_quaternion(q),
            RotationSpec::Sequence(rotations) => Self::from_sequence(&rotations),
            RotationSpec::Euler(euler) => Self::from_euler(euler),
            RotationSpec::Look { direction, upwards } => Self::look(direction, upwards)?,
        };
        Ok(rotation)
    }

    /// The identity rotation.
    pub const fn identity() -> Self {
        Self {
            quaternion: Quat::IDENTITY,
        }
    }

    /// Rotation of `angle` radians about `axis`.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        Self::from_quaternion(Quat::from_axis_angle(axis, angle))
    }

    /// Wraps a quaternion, normalizing it.
    pub fn from_quaternion(quaternion: Quat) -> Self {
        Self {
            quaternion: quaternion.normalize(),
        }
    }

    /// Shortest-arc rotation that carries `from` onto `to`.
    ///
    /// Both inputs are normalized first. When they are exactly parallel the
    /// cross product vanishes: same direction yields the identity, opposite
    /// directions yield a half turn about an axis perpendicular to `from`.
    #[allow(clippy::float_cmp)]
    pub fn from_to(from: Vec3, to: Vec3) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        let axis = from.cross(&to);
        let angle = Vec3::angle_between(&from, &to);
        if axis.length_squared() == 0.0 {
            if from.dot(&to) >= 0.0 {
                return Self::identity();
            }
            return Self::from_axis_angle(perpendicular(&from), PI);
        }
        Self::from_axis_angle(axis, angle)
    }

    /// Applies `rotations` in order: the first element is applied first and
    /// the last element is the outermost transform.
    pub fn from_sequence(rotations: &[Rotation]) -> Self {
        let q = rotations
            .iter()
            .fold(Quat::IDENTITY, |q, r| r.quaternion.multiply(&q));
        Self::from_quaternion(q)
    }

    /// Composes one axis-angle step per letter of `euler.order`.
    ///
    /// Intrinsic steps post-multiply (`q * step`, rotating about the already
    /// rotated frame); extrinsic steps pre-multiply (`step * q`, rotating
    /// about the world axes). Intrinsic `XYZ` matches the common
    /// `qx * qy * qz` convention.
    pub fn from_euler(euler: EulerAngles) -> Self {
        let q = euler.order.axes().into_iter().fold(Quat::IDENTITY, |q, axis| {
            let step = Quat::from_axis_angle(axis.unit(), euler.angle(axis));
            if euler.extrinsic {
                step.multiply(&q)
            } else {
                q.multiply(&step)
            }
        });
        Self::from_quaternion(q)
    }

    /// Rotation that points [`Vec3::FORWARD`] along `direction` and brings
    /// [`Vec3::UP`] as close to `upwards` as possible.
    ///
    /// `direction` is honored exactly; `upwards` only when it is already
    /// perpendicular to `direction`, otherwise the angle between the achieved
    /// and requested up is minimized. A near-zero `direction` yields the
    /// identity. The ±0.9998 parallel test compares the *normalized*
    /// `direction` and `upwards`, so it is a true cosine whatever their lengths.
    ///
    /// # Errors
    /// [`RotationError::LookDirectionMatchesUpwards`] or
    /// [`RotationError::LookDirectionOpposesUpwards`] when the two inputs are
    /// (nearly) parallel.
    pub fn look(direction: Vec3, upwards: Vec3) -> Result<Self, RotationError> {
        if direction.length_squared() < LOOK_MIN_DIRECTION_LENGTH_SQUARED {
            return Ok(Self::identity());
        }

        let forward = direction.normalize();
        let dot = forward.dot(&upwards.normalize());
        if dot > LOOK_PARALLEL_THRESHOLD {
            debug!(?direction, ?upwards, dot, "look rotation rejected: same direction");
            return Err(RotationError::LookDirectionMatchesUpwards);
        }
        if dot < -LOOK_PARALLEL_THRESHOLD {
            debug!(?direction, ?upwards, dot, "look rotation rejected: opposite directions");
            return Err(RotationError::LookDirectionOpposesUpwards);
        }

        let right = forward.cross(&upwards).normalize();
        let up = right.cross(&forward);
        Ok(Self::from_quaternion(quat_from_basis(&right, &forward, &up)))
    }

    /// The underlying unit quaternion.
    pub const fn quaternion(&self) -> Quat {
        self.quaternion
    }

    /// Whether this is the identity rotation (`x = y = z = 0`).
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        let q = &self.quaternion;
        q.x() == 0.0 && q.y() == 0.0 && q.z() == 0.0
    }

    /// Applies `other` after `self`, in world space.
    pub fn combine_with(&self, other: &Self) -> Self {
        Self::from_quaternion(other.quaternion.multiply(&self.quaternion))
    }

    /// The inverse rotation.
    pub fn invert(&self) -> Self {
        Self::from_quaternion(self.quaternion.invert())
    }

    /// Angle in radians between two rotations.
    pub fn angle_between(a: &Self, b: &Self) -> f64 {
        Quat::angle_between_rotations(&a.quaternion, &b.quaternion)
    }

    /// Spherical linear interpolation from `a` (`amount = 0`) to `b`
    /// (`amount = 1`).
    ///
    /// `amount` is not clamped; values outside `[0, 1]` extrapolate along the
    /// same arc. No shortest-path flip is applied. When the rotations are
    /// ~180° apart the arc is undefined and the result is the even blend of
    /// both, regardless of `amount`.
    pub fn interpolate(a: &Self, b: &Self, amount: f64) -> Self {
        let qa = a.quaternion;
        let qb = b.quaternion;

        let cos_half_theta = qa.dot(&qb);
        if cos_half_theta.abs() >= 1.0 {
            return *a;
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();
        if sin_half_theta.abs() <= SLERP_MIN_SIN_HALF_THETA {
            return Self::from_quaternion(blend(&qa, 0.5, &qb, 0.5));
        }

        let ratio_a = ((1.0 - amount) * half_theta).sin() / sin_half_theta;
        let ratio_b = (amount * half_theta).sin() / sin_half_theta;
        Self::from_quaternion(blend(&qa, ratio_a, &qb, ratio_b))
    }

    /// Rotates a 3D vector.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        self.quaternion.rotate_vec3(v)
    }

    /// Rotates a 2D vector, dropping the Z component of the result.
    ///
    /// Lossy: exact only for rotations about the Z axis.
    pub fn rotate_vec2(&self, v: &Vec2) -> Vec2 {
        self.quaternion.rotate_vec2(v)
    }

    /// Recovers the axis and angle of this rotation.
    ///
    /// The half angle is `atan2(|xyz|, w)`, which equals `acos(w)` for a unit
    /// quaternion but keeps its precision for tiny turns where `w` rounds to
    /// exactly `1`. The axis is undefined at the identity (`x = y = z = 0`);
    /// there the result is `RIGHT` with angle `0`, which round-trips through
    /// [`Rotation::from_axis_angle`] back to the identity.
    #[allow(clippy::float_cmp)]
    pub fn axis_and_angle(&self) -> AxisAngle {
        let q = &self.quaternion;
        let sin_half = (q.x() * q.x() + q.y() * q.y() + q.z() * q.z()).sqrt();
        if sin_half == 0.0 {
            return AxisAngle {
                axis: Vec3::RIGHT,
                angle: 0.0,
            };
        }
        AxisAngle {
            axis: Vec3::new(q.x() / sin_half, q.y() / sin_half, q.z() / sin_half),
            angle: sin_half.atan2(q.w()) * 2.0,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Quat> for Rotation {
    fn from(value: Quat) -> Self {
        Self::from_quaternion(value)
    }
}

impl From<Rotation> for Quat {
    fn from(value: Rotation) -> Self {
        value.quaternion
    }
}

impl From<EulerAngles> for Rotation {
    fn from(value: EulerAngles) -> Self {
        Self::from_euler(value)
    }
}

impl TryFrom<RotationSpec> for Rotation {
    type Error = RotationError;

    fn try_from(value: RotationSpec) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("Rotation(identity)");
        }
        let AxisAngle { axis, angle } = self.axis_and_angle();
        write!(f, "Rotation(axis: {axis}, angle: Math.PI * {})", angle / PI)
    }
}

fn blend(a: &Quat, ratio_a: f64, b: &Quat, ratio_b: f64) -> Quat {
    Quat::new(
        a.x() * ratio_a + b.x() * ratio_b,
        a.y() * ratio_a + b.y() * ratio_b,
        a.z() * ratio_a + b.z() * ratio_b,
        a.w() * ratio_a + b.w() * ratio_b,
    )
}

/// Any unit vector perpendicular to the unit vector `v`.
fn perpendicular(v: &Vec3) -> Vec3 {
    let candidate = v.cross(&Vec3::RIGHT);
    if candidate.length_squared() > f64::EPSILON {
        return candidate.normalize();
    }
    v.cross(&Vec3::FORWARD).normalize()
}

/// Converts the orthonormal basis with columns `x`, `y`, `z` into a
/// quaternion (trace method).
///
/// Each imaginary component's magnitude comes from the diagonal; its sign is
/// taken from the matching off-diagonal difference via [`copy_sign`].
fn quat_from_basis(x: &Vec3, y: &Vec3, z: &Vec3) -> Quat {
    let (m00, m10, m20) = (x.x(), x.y(), x.z());
    let (m01, m11, m21) = (y.x(), y.y(), y.z());
    let (m02, m12, m22) = (z.x(), z.y(), z.z());

    let w = (1.0 + m00 + m11 + m22).max(0.0).sqrt() / 2.0;
    let qx = (1.0 + m00 - m11 - m22).max(0.0).sqrt() / 2.0;
    let qy = (1.0 - m00 + m11 - m22).max(0.0).sqrt() / 2.0;
    let qz = (1.0 - m00 - m11 + m22).max(0.0).sqrt() / 2.0;

    Quat::new(
        copy_sign(m21 - m12, qx),
        copy_sign(m02 - m20, qy),
        copy_sign(m10 - m01, qz),
        w,
    )
}
