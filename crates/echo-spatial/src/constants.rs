// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric thresholds shared by rotation construction and interpolation.

/// Look directions with a squared length below this produce the identity
/// rotation instead of a basis.
pub const LOOK_MIN_DIRECTION_LENGTH_SQUARED: f64 = 0.0001;

/// Dot-product bound past which a look direction and its upwards hint are
/// treated as parallel (`> LOOK_PARALLEL_THRESHOLD`) or opposite
/// (`< -LOOK_PARALLEL_THRESHOLD`).
///
/// Near-parallel pairs fall inside the bound too; their cross product is
/// too short to build a usable basis from.
pub const LOOK_PARALLEL_THRESHOLD: f64 = 0.9998;

/// Below this `sin(θ/2)` SLERP falls back to an even component blend
/// (the two rotations are ~180° apart and the arc is undefined).
pub const SLERP_MIN_SIN_HALF_THETA: f64 = 0.001;
