//! Error codes for the table engine.
//!
//! This module defines all error codes used throughout the engine.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that clients see in rejection payloads.

use core::fmt;

/// Centralized error codes for the table engine.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action Validation
    /// Action submitted by a seat that does not hold the turn
    NotYourTurn,
    /// Cards do not form a recognized combination
    InvalidCombination,
    /// Submission does not match the kind of the play to beat
    MustFollowKind,
    /// Submission matches kind but does not rank above the play to beat
    DoesNotBeat,
    /// Pass submitted while leading a trick
    CannotLeadPass,
    /// Pass submitted while holding a card that beats the current single
    MustBeatIfPossible,
    /// Single submitted that is not the highest held while an opponent is on
    /// their last card
    MustPlayHighestAvailable,
    /// Card not in hand
    CardNotInHand,
    /// Action not valid in the table's current phase
    PhaseMismatch,
    /// Dealt hands fail the full-deck check
    InvalidDeal,
    /// Invalid seat number
    InvalidSeat,
    /// Parse card error
    ParseCard,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Room not found
    RoomNotFound,
    /// General not found error
    NotFound,

    // Concurrency Conflicts
    /// Turn moved on between read and commit
    TurnChanged,
    /// Room already exists
    RoomExists,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Event channel closed
    ChannelClosed,
    /// Configuration error
    ConfigError,
    /// Bot policy failure
    PolicyError,
    /// Internal engine error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Action Validation
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::InvalidCombination => "INVALID_COMBINATION",
            Self::MustFollowKind => "MUST_FOLLOW_KIND",
            Self::DoesNotBeat => "DOES_NOT_BEAT",
            Self::CannotLeadPass => "CANNOT_LEAD_PASS",
            Self::MustBeatIfPossible => "MUST_BEAT_IF_POSSIBLE",
            Self::MustPlayHighestAvailable => "MUST_PLAY_HIGHEST_AVAILABLE",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InvalidDeal => "INVALID_DEAL",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource Not Found
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Concurrency Conflicts
            Self::TurnChanged => "TURN_CHANGED",
            Self::RoomExists => "ROOM_EXISTS",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::ChannelClosed => "CHANNEL_CLOSED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::PolicyError => "POLICY_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
