//! Error taxonomy for the inference core
//!
//! Every failure is a caller-side contract violation. Nothing here is
//! transient, so the core never retries: the error is handed straight back
//! and the caller decides how to present it.
//!
//! Degenerate input (an empty item list, a scan history with no entries) is
//! not an error. Those cases produce neutral results.

use thiserror::Error;

/// Coarse grouping of [`CoreError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation not allowed in the session's current stage
    InvalidState,
    /// Argument outside the operation's domain
    InvalidInput,
}

/// Errors raised by the inference core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// `advance` called on a session that already holds every answer
    #[error("session is already complete ({total} of {total} plates answered)")]
    SessionComplete { total: usize },

    /// `classify` called before the last plate was answered
    #[error("session is incomplete ({answered} of {total} plates answered)")]
    SessionIncomplete { answered: usize, total: usize },

    /// Chosen answer is not one of the current plate's options
    #[error("option '{option}' is not offered by plate {plate_id}")]
    OptionNotOffered { plate_id: u32, option: String },

    /// Plate definition is internally inconsistent
    #[error("plate {plate_id} is invalid: {reason}")]
    InvalidPlate { plate_id: u32, reason: String },

    /// A battery needs at least one plate
    #[error("plate battery is empty")]
    EmptyBattery,

    /// Bounding box coordinate outside [0, 1] or not finite
    #[error("bounding box coordinate {axis} = {value} is outside [0, 1]")]
    BoundingBoxOutOfRange { axis: &'static str, value: f64 },

    /// Bounding box corners are swapped
    #[error("bounding box is inverted on the {axis} axis ({low} > {high})")]
    BoundingBoxInverted { axis: &'static str, low: f64, high: f64 },

    /// Recommendation score outside 0-100
    #[error("recommendation score {score} for '{item}' is outside 0-100")]
    ScoreOutOfRange { item: String, score: f64 },

    /// Timestamp string could not be parsed as RFC 3339
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::SessionComplete { .. } | CoreError::SessionIncomplete { .. } => {
                ErrorKind::InvalidState
            }
            CoreError::OptionNotOffered { .. }
            | CoreError::InvalidPlate { .. }
            | CoreError::EmptyBattery
            | CoreError::BoundingBoxOutOfRange { .. }
            | CoreError::BoundingBoxInverted { .. }
            | CoreError::ScoreOutOfRange { .. }
            | CoreError::InvalidTimestamp { .. } => ErrorKind::InvalidInput,
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
