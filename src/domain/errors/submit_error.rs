//! Submission error types.

use thiserror::Error;

/// Errors raised while validating or forwarding a submission draft.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SubmitError {
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("funding goal must be at least {min} XRP")]
    GoalTooLow { min: f64 },

    #[error("invalid XRPL wallet address: {reason}")]
    InvalidWalletAddress { reason: String },

    #[error("submission rejected: {message}")]
    Rejected { message: String },
}

impl SubmitError {
    /// Creates a missing-field error.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates a too-long error.
    #[must_use]
    pub const fn too_long(field: &'static str, max: usize) -> Self {
        Self::TooLong { field, max }
    }

    /// Creates an invalid-wallet error.
    #[must_use]
    pub fn invalid_wallet(reason: impl Into<String>) -> Self {
        Self::InvalidWalletAddress {
            reason: reason.into(),
        }
    }

    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Returns whether the error comes from draft validation, i.e. the user
    /// can fix it by editing the form.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::TooLong { .. }
                | Self::GoalTooLow { .. }
                | Self::InvalidWalletAddress { .. }
        )
    }
}
