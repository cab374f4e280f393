//! Construction errors for core types.

use std::fmt;

/// Rejected parameter passed to a [`crate::Body`] or [`crate::Projectile`] constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// Mass must be finite and strictly positive.
    NonPositiveMass {
        /// The value that was rejected.
        value: f32,
    },
    /// Collision radius must be finite and strictly positive.
    NonPositiveRadius {
        /// The value that was rejected.
        value: f32,
    },
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::NonPositiveMass { value } => {
                write!(f, "mass must be a finite value > 0, got {}", value)
            }
            BodyError::NonPositiveRadius { value } => {
                write!(f, "radius must be a finite value > 0, got {}", value)
            }
        }
    }
}

impl std::error::Error for BodyError {}

pub(crate) fn check_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
