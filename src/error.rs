//! Error types for the non-scoring parts of the crate.
//!
//! Scoring itself never fails: "no match" is `None`. Errors only come from
//! the layers that own data (validation before a user enters a pool),
//! configuration loading, and feedback calibration.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed goal or user data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Progress outside the 0..=100 percentage range
    #[error("goal `{goal_id}` has progress {progress}, expected 0..=100")]
    ProgressOutOfRange { goal_id: String, progress: i32 },

    /// Weight that is zero, negative, NaN or infinite
    #[error("goal `{goal_id}` has weight {weight}, expected a positive finite number")]
    InvalidWeight { goal_id: String, weight: f64 },

    #[error("goal id must not be empty")]
    EmptyGoalId,

    #[error("user id must not be empty")]
    EmptyUserId,

    /// Two nodes in one user's tree share an id
    #[error("goal id `{0}` appears more than once in the goal tree")]
    DuplicateGoalId(String),

    /// A pool already holds a user with this id
    #[error("user `{0}` is already in the candidate pool")]
    DuplicateUser(String),
}

/// Failure to load or validate an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failure to record feedback for a collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalibrationError {
    #[error("collaboration `{0}` is already completed")]
    AlreadyCompleted(String),

    #[error("user `{0}` is not in the candidate pool")]
    UserNotFound(String),
}
