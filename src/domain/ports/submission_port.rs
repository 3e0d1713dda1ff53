//! Port for handing finished drafts to the review pipeline.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ProjectCategory, Socials, TeamMember};
use crate::domain::errors::SubmitError;

/// A project draft assembled by the submission form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub category: ProjectCategory,
    pub goal_amount_xrp: f64,
    pub xrpl_wallet: String,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

/// A governance proposal draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
}

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    reference: String,
    received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Creates a receipt.
    #[must_use]
    pub fn new(reference: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self {
            reference: reference.into(),
            received_at,
        }
    }

    /// Returns the review reference shown to the user.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns when the submission was accepted.
    #[must_use]
    pub const fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// External collaborator that accepts submissions for DAO review.
///
/// The client never sees beyond the receipt; whatever review happens after
/// acceptance is out of scope.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Submits a project draft for review.
    async fn submit_project(
        &self,
        submission: &ProjectSubmission,
    ) -> Result<SubmissionReceipt, SubmitError>;

    /// Submits a proposal draft for review.
    async fn submit_proposal(
        &self,
        draft: &ProposalDraft,
    ) -> Result<SubmissionReceipt, SubmitError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::{
        ProjectSubmission, ProposalDraft, SubmissionPort, SubmissionReceipt, async_trait,
    };
    use crate::domain::errors::SubmitError;
    use chrono::Utc;

    /// In-memory submission sink recording everything it accepts.
    #[derive(Default)]
    pub struct MockSubmissionSink {
        accept: bool,
        projects: Mutex<Vec<ProjectSubmission>>,
        proposals: Mutex<Vec<ProposalDraft>>,
    }

    impl MockSubmissionSink {
        #[must_use]
        pub fn new(accept: bool) -> Self {
            Self {
                accept,
                ..Self::default()
            }
        }

        pub fn project_count(&self) -> usize {
            self.projects.lock().map(|p| p.len()).unwrap_or(0)
        }

        pub fn proposal_count(&self) -> usize {
            self.proposals.lock().map(|p| p.len()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl SubmissionPort for MockSubmissionSink {
        async fn submit_project(
            &self,
            submission: &ProjectSubmission,
        ) -> Result<SubmissionReceipt, SubmitError> {
            if !self.accept {
                return Err(SubmitError::rejected("mock sink closed"));
            }
            if let Ok(mut projects) = self.projects.lock() {
                projects.push(submission.clone());
            }
            Ok(SubmissionReceipt::new("MOCK-1", Utc::now()))
        }

        async fn submit_proposal(
            &self,
            draft: &ProposalDraft,
        ) -> Result<SubmissionReceipt, SubmitError> {
            if !self.accept {
                return Err(SubmitError::rejected("mock sink closed"));
            }
            if let Ok(mut proposals) = self.proposals.lock() {
                proposals.push(draft.clone());
            }
            Ok(SubmissionReceipt::new("MOCK-1", Utc::now()))
        }
    }
}
