//! Governance proposal creation workflow.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::SubmitError;
use crate::domain::ports::{ProposalDraft, SubmissionPort, SubmissionReceipt};

/// Maximum length of a proposal title.
pub const TITLE_MAX: usize = 100;

/// Validates a proposal draft and forwards it for review.
#[derive(Clone)]
pub struct CreateProposalUseCase {
    submissions: Arc<dyn SubmissionPort>,
}

impl CreateProposalUseCase {
    /// Creates the use case.
    #[must_use]
    pub const fn new(submissions: Arc<dyn SubmissionPort>) -> Self {
        Self { submissions }
    }

    /// Validates and submits the draft.
    ///
    /// # Errors
    /// Returns a validation error for an unfit draft, or the port's
    /// rejection when forwarding fails.
    pub async fn execute(&self, draft: ProposalDraft) -> Result<SubmissionReceipt, SubmitError> {
        if draft.title.trim().is_empty() {
            return Err(SubmitError::missing("title"));
        }
        if draft.title.chars().count() > TITLE_MAX {
            return Err(SubmitError::too_long("title", TITLE_MAX));
        }
        if draft.description.trim().is_empty() {
            return Err(SubmitError::missing("description"));
        }

        debug!(title = %draft.title, "Proposal draft validated");

        let receipt = self.submissions.submit_proposal(&draft).await.map_err(|e| {
            warn!(error = %e, "Proposal submission rejected");
            e
        })?;

        info!(
            reference = %receipt.reference(),
            title = %draft.title,
            "Proposal submitted for review"
        );

        Ok(receipt)
    }
}
