use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Top-level error type returned by stores, services, and drivers.
///
/// Rule violations surface as [`DomainError`] and keep their specific
/// [`ErrorCode`]; everything else is an operational failure of the engine
/// itself.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Bot policy error: {detail}")]
    Policy { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl EngineError {
    /// Helper method to extract the canonical error code from any variant
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Domain(err) => err.code(),
            EngineError::Config { .. } => ErrorCode::ConfigError,
            EngineError::Policy { .. } => ErrorCode::PolicyError,
            EngineError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn policy(detail: impl Into<String>) -> Self {
        Self::Policy {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// True for rejections that are expected when two observers race to act
    /// on the same turn. Callers that merely lost such a race log and move on.
    pub fn is_turn_race(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::TurnChanged | ErrorCode::NotYourTurn | ErrorCode::Conflict
        )
    }
}
