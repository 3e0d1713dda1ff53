//! Logging submission adapter.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::errors::SubmitError;
use crate::domain::ports::{
    ProjectSubmission, ProposalDraft, SubmissionPort, SubmissionReceipt,
};

/// Submission sink that records accepted drafts in the application log.
///
/// There is no backend by design; this adapter is the explicit collaborator
/// that stands where a review service would plug in.
#[derive(Debug, Clone, Default)]
pub struct LoggingSubmissionService {}

impl LoggingSubmissionService {
    /// Creates the service.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn mint_receipt() -> SubmissionReceipt {
        let now = Utc::now();
        SubmissionReceipt::new(format!("FDN-{}", now.timestamp_millis()), now)
    }
}

#[async_trait]
impl SubmissionPort for LoggingSubmissionService {
    async fn submit_project(
        &self,
        submission: &ProjectSubmission,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let receipt = Self::mint_receipt();

        match serde_json::to_string(submission) {
            Ok(payload) => {
                info!(
                    reference = %receipt.reference(),
                    payload = %payload,
                    "Project submission accepted"
                );
            }
            Err(e) => {
                // Still accept; the payload just goes unrecorded.
                warn!(
                    reference = %receipt.reference(),
                    error = %e,
                    "Failed to serialize project submission"
                );
            }
        }

        Ok(receipt)
    }

    async fn submit_proposal(
        &self,
        draft: &ProposalDraft,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let receipt = Self::mint_receipt();

        match serde_json::to_string(draft) {
            Ok(payload) => {
                info!(
                    reference = %receipt.reference(),
                    payload = %payload,
                    "Proposal submission accepted"
                );
            }
            Err(e) => {
                warn!(
                    reference = %receipt.reference(),
                    error = %e,
                    "Failed to serialize proposal draft"
                );
            }
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProjectCategory;

    #[tokio::test]
    async fn test_project_submission_returns_receipt() {
        let service = LoggingSubmissionService::new();
        let submission = ProjectSubmission {
            title: "Test".to_string(),
            short_description: "Pitch".to_string(),
            description: "Long form".to_string(),
            category: ProjectCategory::Education,
            goal_amount_xrp: 10.0,
            xrpl_wallet: "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH".to_string(),
            socials: Default::default(),
            team: Vec::new(),
        };

        let receipt = service.submit_project(&submission).await.expect("receipt");
        assert!(receipt.reference().starts_with("FDN-"));
    }

    #[tokio::test]
    async fn test_proposal_submission_returns_receipt() {
        let service = LoggingSubmissionService::new();
        let draft = ProposalDraft {
            title: "Test".to_string(),
            description: "Body".to_string(),
        };

        let receipt = service.submit_proposal(&draft).await.expect("receipt");
        assert!(receipt.reference().starts_with("FDN-"));
    }
}
