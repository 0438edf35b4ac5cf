//! Domain-level error type used across the rules core, stores, and services.
//!
//! This error type is transport- and store-agnostic. Callers should return
//! `Result<T, crate::error::EngineError>` and convert from `DomainError`
//! using the provided `From<DomainError> for EngineError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Validation kinds for rejected player actions and malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NotYourTurn,
    InvalidCombination,
    MustFollowKind,
    DoesNotBeat,
    CannotLeadPass,
    MustBeatIfPossible,
    MustPlayHighestAvailable,
    CardNotInHand,
    PhaseMismatch,
    InvalidDeal,
    InvalidSeat,
    ParseCard,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    ChannelClosed,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    TurnChanged,
    RoomExists,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("VALIDATION".into()), detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Canonical error code for this error, as exposed to clients.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
                ValidationKind::InvalidCombination => ErrorCode::InvalidCombination,
                ValidationKind::MustFollowKind => ErrorCode::MustFollowKind,
                ValidationKind::DoesNotBeat => ErrorCode::DoesNotBeat,
                ValidationKind::CannotLeadPass => ErrorCode::CannotLeadPass,
                ValidationKind::MustBeatIfPossible => ErrorCode::MustBeatIfPossible,
                ValidationKind::MustPlayHighestAvailable => ErrorCode::MustPlayHighestAvailable,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::InvalidDeal => ErrorCode::InvalidDeal,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::TurnChanged => ErrorCode::TurnChanged,
                ConflictKind::RoomExists => ErrorCode::RoomExists,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => ErrorCode::RoomNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::ChannelClosed => ErrorCode::ChannelClosed,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }
}
