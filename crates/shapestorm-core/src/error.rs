//! Error types shared by the simulation crates.

use thiserror::Error;

/// A configuration value the simulation cannot run with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size, radius or speed that must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// A thickness that must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// NaN or an infinity.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// A `[min, max]` pair with `min > max`.
    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// Polygons need at least three sides.
    #[error("{field} must be at least 3, got {value}")]
    TooFewVertices { field: &'static str, value: u32 },

    /// A zero interval would never spawn after frame 0.
    #[error("enemy spawn interval must be at least 1 frame")]
    ZeroSpawnInterval,

    /// Enemies cannot be placed without touching a boundary.
    #[error("enemy radius {radius} does not fit in a {width}x{height} play area")]
    EnemyDoesNotFit { radius: f32, width: u32, height: u32 },
}
