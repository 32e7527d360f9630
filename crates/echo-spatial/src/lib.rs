// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-spatial: immutable vector, quaternion, and rotation value types.
//!
//! Every type here is a plain `Copy` value. Operations never mutate; they
//! return new values. The axis convention is Y-forward, Z-up.
//!
//! The [`codec`] module owns the compact tagged text form these values take
//! when they are stored as leaf tag values elsewhere in Echo.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Vector, quaternion, and rotation math (Vec2, Vec3, Quat, Rotation).
pub mod math;

/// Tagged text encoding for vectors and rotations.
pub mod codec;

mod constants;

// Re-exports for stable public API
/// Numeric thresholds used by rotation construction and interpolation.
pub use constants::{
    LOOK_MIN_DIRECTION_LENGTH_SQUARED, LOOK_PARALLEL_THRESHOLD, SLERP_MIN_SIN_HALF_THETA,
};
/// Tagged value codec surface.
pub use codec::{CodecError, TaggedValue, ROTATION_TAG_PREFIX, VECTOR_TAG_PREFIX};
/// Core value types.
pub use math::{
    copy_sign, AxisAngle, EulerAngles, EulerAxis, EulerOrder, Quat, Rotation, RotationError,
    RotationSpec, Vec2, Vec3,
};
