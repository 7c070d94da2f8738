//! Error types shared by the mixer, order matcher and round state.

use thiserror::Error;

use crate::round::RoundState;

/// PaintMix errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintMixError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Cannot {action} while round is {from:?}")]
    InvalidTransition {
        from: RoundState,
        action: &'static str,
    },
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for PaintMix operations.
pub type PaintMixResult<T> = Result<T, PaintMixError>;
