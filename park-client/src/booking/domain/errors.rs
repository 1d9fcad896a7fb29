//! Error types for the booking domain.
//!
//! Field-level validation problems are not errors here: they are data kept in
//! the form's error map (see `field_validator::FieldError`). The types below
//! cover misuse of the form API and failures reported by the collaborators.

use thiserror::Error;

/// Contract violations raised by the participant form and its helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Participant index {index} is out of bounds (roster has {len} participants)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("The selected schedule has no places left")]
    SlotUnavailable,

    #[error("The booking was already confirmed, the form can no longer change")]
    Finalized,

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Unknown participant field: {0}")]
    UnknownField(String),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("Schedule {0} was not found")]
    UnknownSchedule(i64),

    #[error("Participant {index} has an unusable value in {field}")]
    InvalidRecord { index: usize, field: &'static str },

    #[error("Invalid navigation parameters: {0}")]
    Navigation(String),
}

/// Failure reported by the booking collaborator, classified by cause.
///
/// `detail` keeps the raw server or transport text for logs. It is never
/// shown to the user, see [`BookingError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("capacity conflict: {detail}")]
    CapacityConflict { detail: String },

    #[error("rejected by server validation: {detail}")]
    Validation { detail: String },

    #[error("not found: {detail}")]
    NotFound { detail: String },

    #[error("duplicate registration: {detail}")]
    DuplicateRegistration { detail: String },

    #[error("server error (status {status:?}): {detail}")]
    Server { status: Option<u16>, detail: String },

    #[error("network unreachable: {detail}")]
    Network { detail: String },
}

impl BookingError {
    /// Message safe to show to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            BookingError::CapacityConflict { .. } => {
                "There are not enough places left for this schedule. Please lower the number of participants or try again."
            }
            BookingError::Validation { .. } => {
                "The booking was rejected. Please review the participant data and the terms and conditions."
            }
            BookingError::NotFound { .. } => {
                "The selected schedule is no longer available. Please pick another one."
            }
            BookingError::DuplicateRegistration { .. } => {
                "One of the participants is already registered for this schedule. Change the participant data or pick another schedule."
            }
            BookingError::Server { .. } => "Something went wrong on our side. Please try again later.",
            BookingError::Network { .. } => {
                "Could not reach the booking server. Check your connection and try again."
            }
        }
    }

    /// Short category name used in logs
    pub fn category(&self) -> &'static str {
        match self {
            BookingError::CapacityConflict { .. } => "capacity_conflict",
            BookingError::Validation { .. } => "validation",
            BookingError::NotFound { .. } => "not_found",
            BookingError::DuplicateRegistration { .. } => "duplicate_registration",
            BookingError::Server { .. } => "server",
            BookingError::Network { .. } => "network",
        }
    }

    /// Whether resubmitting the same data may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BookingError::CapacityConflict { .. } | BookingError::Server { .. } | BookingError::Network { .. }
        )
    }
}
