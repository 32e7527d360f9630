// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Compact tagged text form for vectors and rotations.
//!
//! When a vector or rotation is stored as a leaf tag value it is written as a
//! prefix glyph followed by comma-separated components, with no brackets or
//! field names:
//!
//! | Value | Token |
//! |---|---|
//! | `Vec2(x, y)` | `➡️x,y` |
//! | `Vec3(x, y, z)` | `➡️x,y,z` |
//! | `Rotation` | `🔁x,y,z,w` (quaternion components) |
//!
//! Components use Rust's shortest round-trip float formatting, so parsing a
//! vector token reproduces its components bit for bit. Rotation tokens are
//! rebuilt through [`Rotation::from_quaternion`] and so re-normalized.
//! Infinities are written as `Infinity`/`-Infinity` and NaN as `NaN`.
//!
//! Finite components use Rust's `Display`, which differs from JavaScript
//! number formatting in two places: negative zero is written `-0` (JS: `0`)
//! and large or tiny magnitudes are written in full positional form, e.g.
//! `1e21` as `1000000000000000000000` (JS: `1e+21`). The parser accepts both
//! spellings, so tokens from either side read back to the same value.

use core::fmt::{self, Write};
use core::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::math::{Quat, Rotation, Vec2, Vec3};

/// Prefix glyph for 2D and 3D vector tokens.
pub const VECTOR_TAG_PREFIX: &str = "➡️";

/// Prefix glyph for rotation tokens.
pub const ROTATION_TAG_PREFIX: &str = "🔁";

/// Errors produced while parsing a tagged token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Token starts with neither [`VECTOR_TAG_PREFIX`] nor
    /// [`ROTATION_TAG_PREFIX`].
    #[error("value does not start with a vector or rotation tag prefix")]
    MissingPrefix,
    /// Vector token with a component count other than 2 or 3.
    #[error("vector tag must have 2 or 3 components, found {0}")]
    VectorComponentCount(usize),
    /// Rotation token with a component count other than 4.
    #[error("rotation tag must have 4 components, found {0}")]
    RotationComponentCount(usize),
    /// A component failed to parse as a number.
    #[error("component {index} is not a number: {value:?}")]
    InvalidComponent {
        /// Zero-based component position.
        index: usize,
        /// The offending text.
        value: String,
    },
}

/// A value that has a tagged text form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TaggedValue {
    /// `➡️x,y`
    Vector2(Vec2),
    /// `➡️x,y,z`
    Vector3(Vec3),
    /// `🔁x,y,z,w`
    Rotation(Rotation),
}

impl TaggedValue {
    /// Renders the tagged token.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parses a tagged token.
    ///
    /// Rotation tokens are rebuilt through [`Rotation::from_quaternion`], so
    /// non-unit components are normalized.
    pub fn parse(token: &str) -> Result<Self, CodecError> {
        let result = if let Some(body) = token.strip_prefix(VECTOR_TAG_PREFIX) {
            parse_vector(body)
        } else if let Some(body) = token.strip_prefix(ROTATION_TAG_PREFIX) {
            parse_rotation(body)
        } else {
            Err(CodecError::MissingPrefix)
        };
        if let Err(err) = &result {
            trace!(token, %err, "tagged value parse failed");
        }
        result
    }

    /// Whether `token` carries one of the tag prefixes. Cheap pre-check for
    /// callers that store plain strings alongside tagged values.
    pub fn has_tag_prefix(token: &str) -> bool {
        token.starts_with(VECTOR_TAG_PREFIX) || token.starts_with(ROTATION_TAG_PREFIX)
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector2(v) => {
                f.write_str(VECTOR_TAG_PREFIX)?;
                write_components(f, &v.to_array())
            }
            Self::Vector3(v) => {
                f.write_str(VECTOR_TAG_PREFIX)?;
                write_components(f, &v.to_array())
            }
            Self::Rotation(r) => {
                f.write_str(ROTATION_TAG_PREFIX)?;
                write_components(f, &r.quaternion().to_array())
            }
        }
    }
}

impl FromStr for TaggedValue {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec2> for TaggedValue {
    fn from(value: Vec2) -> Self {
        Self::Vector2(value)
    }
}

impl From<Vec3> for TaggedValue {
    fn from(value: Vec3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Rotation> for TaggedValue {
    fn from(value: Rotation) -> Self {
        Self::Rotation(value)
    }
}

impl Vec2 {
    /// Tagged token, e.g. `➡️1,2`.
    pub fn to_tagged_string(&self) -> String {
        TaggedValue::Vector2(*self).encode()
    }
}

impl Vec3 {
    /// Tagged token, e.g. `➡️1,2,3`.
    pub fn to_tagged_string(&self) -> String {
        TaggedValue::Vector3(*self).encode()
    }
}

impl Rotation {
    /// Tagged token of the quaternion components, e.g. `🔁0,0,0,1`.
    pub fn to_tagged_string(&self) -> String {
        TaggedValue::Rotation(*self).encode()
    }
}

fn write_components<W: Write>(out: &mut W, components: &[f64]) -> fmt::Result {
    for (i, value) in components.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_component(out, *value)?;
    }
    Ok(())
}

fn write_component<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        out.write_str("NaN")
    } else if value.is_infinite() {
        out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(out, "{value}")
    }
}

fn parse_components(body: &str) -> Result<Vec<f64>, CodecError> {
    body.split(',')
        .enumerate()
        .map(|(index, raw)| {
            // `f64::from_str` accepts `Infinity`/`NaN` case-insensitively.
            raw.trim()
                .parse::<f64>()
                .map_err(|_| CodecError::InvalidComponent {
                    index,
                    value: raw.to_owned(),
                })
        })
        .collect()
}

fn parse_vector(body: &str) -> Result<TaggedValue, CodecError> {
    match parse_components(body)?.as_slice() {
        &[x, y] => Ok(TaggedValue::Vector2(Vec2::new(x, y))),
        &[x, y, z] => Ok(TaggedValue::Vector3(Vec3::new(x, y, z))),
        other => Err(CodecError::VectorComponentCount(other.len())),
    }
}

fn parse_rotation(body: &str) -> Result<TaggedValue, CodecError> {
    match parse_components(body)?.as_slice() {
        &[x, y, z, w] => Ok(TaggedValue::Rotation(Rotation::from_quaternion(Quat::new(
            x, y, z, w,
        )))),
        other => Err(CodecError::RotationComponentCount(other.len())),
    }
}
