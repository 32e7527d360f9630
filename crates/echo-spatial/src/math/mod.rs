// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vector and rotation algebra: 2D/3D vectors, raw quaternions, and
//! validated unit rotations.
//!
//! All values are `f64`. Nothing here traps degenerate input: normalizing a
//! zero vector yields NaN components and those propagate through later
//! arithmetic. The one fallible construction is [`Rotation::look`].

mod euler;
mod quat;
mod rotation;
mod vec2;
mod vec3;

pub use euler::{EulerAngles, EulerAxis, EulerOrder};
pub use quat::Quat;
pub use rotation::{AxisAngle, Rotation, RotationError, RotationSpec};
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Returns `sign_taker` carrying the sign of `sign_giver`.
///
/// Unlike [`f64::copysign`] this compares the *sign* of both arguments and
/// flips `sign_taker` only when they differ; a sign of exactly zero counts as
/// positive. Used by the matrix-to-quaternion conversion to select the branch
/// for each imaginary component.
///
/// ```
/// use echo_spatial::math::copy_sign;
/// assert_eq!(copy_sign(-1.0, 1.0), -1.0);
/// assert_eq!(copy_sign(1.0, -1.0), 1.0);
/// assert_eq!(copy_sign(-1.0, 2.0), -2.0);
/// ```
pub fn copy_sign(sign_giver: f64, sign_taker: f64) -> f64 {
    if positive_sign(sign_giver) == positive_sign(sign_taker) {
        sign_taker
    } else {
        -sign_taker
    }
}

fn positive_sign(value: f64) -> bool {
    // NaN carries no sign; treat like zero.
    value >= 0.0 || value.is_nan()
}
