//! Error types for sandbox configuration.
//!
//! Stepping and mutating a simulation cannot fail; loading and validating a
//! `SandboxConfig` is the only fallible surface.

use std::fmt;

/// Errors produced while parsing or validating a `SandboxConfig`.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON text could not be parsed.
    Parse(serde_json::Error),
    /// Radius bounds are non-positive or inverted.
    RadiusRange { min: i32, max: i32 },
    /// A damping factor lies outside [0, 1].
    Damping(f32),
    /// A configured vector or scalar is NaN or infinite.
    NonFinite(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse sandbox config: {}", e),
            ConfigError::RadiusRange { min, max } => write!(
                f,
                "Invalid radius range [{}, {}): min must be positive and below max",
                min, max
            ),
            ConfigError::Damping(k) => {
                write!(f, "Wall damping {} is outside the range [0, 1]", k)
            }
            ConfigError::NonFinite(field) => write!(f, "Config field `{}` is not finite", field),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
