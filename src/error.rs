//! Configuration errors
//!
//! The simulation itself is total; only loading and validating a
//! configuration can fail.

use thiserror::Error;

/// Reasons a configuration is rejected at initialization
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A tunable or rectangle coordinate is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Dotted path of the offending field
        field: &'static str,
    },

    /// A value that must be strictly positive is not
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    /// A rate that must not be negative is
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    /// A rectangle with zero or negative extent
    #[error("{name} rectangle must have positive width and height")]
    EmptyRect { name: String },

    /// The hole of the ring pokes out of the outer boundary
    #[error("inner boundary is not fully contained in the outer boundary")]
    InnerNotContained,

    /// No on-track point lies inside the finish rectangle
    #[error("finish rectangle does not overlap the drivable ring")]
    FinishOffTrack,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
