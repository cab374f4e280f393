//! Application error types.
//!
//! Nothing in the running simulation is allowed to panic on bad input: invalid
//! setup text falls back to defaults, and a bad config file leaves the
//! compiled defaults in place.  These types carry the reason so it can be
//! logged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slingshot::error::{validate_gravity_const, SimResult};
//!
//! fn check(config: &SlingshotConfig) -> SimResult<()> {
//!     validate_gravity_const(config.gravity_const)?;
//!     Ok(())
//! }
//! ```

use slingshot_core::BodyError;
use std::fmt;

/// Top-level error enum for the slingshot app.
#[derive(Debug)]
pub enum SimError {
    /// The planet or a ship could not be built from the given parameters.
    InvalidBody(BodyError),

    /// A tunable constant is outside the range the integrator can handle.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        safe_range: &'static str,
    },

    /// The config file exists but is not valid TOML for [`crate::config::SlingshotConfig`].
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidBody(err) => write!(f, "invalid body: {}", err),
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::ConfigParse { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::InvalidBody(err) => Some(err),
            SimError::ConfigParse { source, .. } => Some(source),
            SimError::UnsafeConstant { .. } => None,
        }
    }
}

impl From<BodyError> for SimError {
    fn from(err: BodyError) -> Self {
        SimError::InvalidBody(err)
    }
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Gravity must pull (G > 0) and be finite.
pub fn validate_gravity_const(value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name: "gravity_const",
            value: value as f64,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// The launch divisor must be finite and non-zero.
pub fn validate_velocity_scale(value: f32) -> SimResult<()> {
    if value.is_finite() && value != 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name: "velocity_scale",
            value: value as f64,
            safe_range: "finite, ≠ 0.0",
        })
    }
}

/// The fixed tick rate must be a usable frequency.
pub fn validate_tick_rate(value: f64) -> SimResult<()> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name: "target_tick_rate",
            value,
            safe_range: "[1.0, ∞)",
        })
    }
}

/// A default that the setup form falls back to must itself be a valid mass or radius.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value: value as f64,
            safe_range: "(0.0, ∞)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use slingshot_core::Body;

    #[test]
    fn gravity_const_must_be_positive() {
        assert!(validate_gravity_const(5.0).is_ok());
        assert!(validate_gravity_const(0.0).is_err());
        assert!(validate_gravity_const(-1.0).is_err());
        assert!(validate_gravity_const(f32::NAN).is_err());
    }

    #[test]
    fn velocity_scale_rejects_zero() {
        assert!(validate_velocity_scale(100.0).is_ok());
        assert!(validate_velocity_scale(-50.0).is_ok());
        assert!(validate_velocity_scale(0.0).is_err());
    }

    #[test]
    fn tick_rate_rejects_sub_hertz() {
        assert!(validate_tick_rate(60.0).is_ok());
        assert!(validate_tick_rate(0.5).is_err());
    }

    #[test]
    fn body_error_converts_with_question_mark() {
        fn build() -> SimResult<Body> {
            Ok(Body::new(Vec2::ZERO, -1.0, 10.0)?)
        }
        let err = build().unwrap_err();
        assert!(matches!(err, SimError::InvalidBody(BodyError::NonPositiveMass { .. })));
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn unsafe_constant_message_names_constant() {
        let err = validate_gravity_const(-2.0).unwrap_err();
        assert!(err.to_string().contains("gravity_const"));
    }
}
