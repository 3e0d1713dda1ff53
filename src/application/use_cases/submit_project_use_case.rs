//! Project submission workflow.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::SubmitError;
use crate::domain::ports::{ProjectSubmission, SubmissionPort, SubmissionReceipt};

/// Maximum length of the one-line pitch shown on project cards.
pub const SHORT_DESCRIPTION_MAX: usize = 150;
/// Minimum funding goal in XRP.
pub const GOAL_MIN_XRP: f64 = 1.0;

/// Validates a project draft and forwards it for review.
#[derive(Clone)]
pub struct SubmitProjectUseCase {
    submissions: Arc<dyn SubmissionPort>,
}

impl SubmitProjectUseCase {
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
    pub async fn execute(
        &self,
        submission: ProjectSubmission,
    ) -> Result<SubmissionReceipt, SubmitError> {
        validate(&submission)?;

        debug!(title = %submission.title, "Project draft validated");

        let receipt = self.submissions.submit_project(&submission).await.map_err(|e| {
            warn!(error = %e, "Project submission rejected");
            e
        })?;

        info!(
            reference = %receipt.reference(),
            title = %submission.title,
            "Project submitted for review"
        );

        Ok(receipt)
    }
}

fn validate(submission: &ProjectSubmission) -> Result<(), SubmitError> {
    if submission.title.trim().is_empty() {
        return Err(SubmitError::missing("title"));
    }
    if submission.short_description.trim().is_empty() {
        return Err(SubmitError::missing("short description"));
    }
    if submission.short_description.chars().count() > SHORT_DESCRIPTION_MAX {
        return Err(SubmitError::too_long("short description", SHORT_DESCRIPTION_MAX));
    }
    if submission.description.trim().is_empty() {
        return Err(SubmitError::missing("description"));
    }
    if submission.goal_amount_xrp < GOAL_MIN_XRP {
        return Err(SubmitError::GoalTooLow { min: GOAL_MIN_XRP });
    }
    validate_classic_address(&submission.xrpl_wallet)
}

/// Checks the shape of an XRPL classic address: a leading `r` followed by
/// 25 to 34 base58 characters (no `0`, `O`, `I`, `l`).
pub fn validate_classic_address(address: &str) -> Result<(), SubmitError> {
    let mut chars = address.chars();
    match chars.next() {
        Some('r') => {}
        _ => return Err(SubmitError::invalid_wallet("must start with 'r'")),
    }

    let rest: Vec<char> = chars.collect();
    if !(25..=34).contains(&rest.len()) {
        return Err(SubmitError::invalid_wallet(
            "must be 26 to 35 characters long",
        ));
    }

    let is_base58 = |c: char| {
        c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l')
    };
    if let Some(bad) = rest.iter().find(|c| !is_base58(**c)) {
        return Err(SubmitError::invalid_wallet(format!(
            "character '{bad}' is not allowed"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProjectCategory;
    use crate::domain::ports::mocks::MockSubmissionSink;

    fn make_submission() -> ProjectSubmission {
        ProjectSubmission {
            title: "Solar Micro-Grids".to_string(),
            short_description: "Community-owned solar power".to_string(),
            description: "Deploy village-scale solar micro-grids.".to_string(),
            category: ProjectCategory::Charity,
            goal_amount_xrp: 50_000.0,
            xrpl_wallet: "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH".to_string(),
            socials: Default::default(),
            team: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_forwarded() {
        let sink = Arc::new(MockSubmissionSink::new(true));
        let use_case = SubmitProjectUseCase::new(sink.clone());

        let receipt = use_case.execute(make_submission()).await;

        assert!(receipt.is_ok());
        assert_eq!(sink.project_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let use_case = SubmitProjectUseCase::new(Arc::new(MockSubmissionSink::new(true)));
        let mut submission = make_submission();
        submission.title = "   ".to_string();

        let result = use_case.execute(submission).await;
        assert!(matches!(result, Err(SubmitError::MissingField { field: "title" })));
    }

    #[tokio::test]
    async fn test_long_short_description_rejected() {
        let use_case = SubmitProjectUseCase::new(Arc::new(MockSubmissionSink::new(true)));
        let mut submission = make_submission();
        submission.short_description = "x".repeat(SHORT_DESCRIPTION_MAX + 1);

        let result = use_case.execute(submission).await;
        assert!(matches!(result, Err(SubmitError::TooLong { .. })));
    }

    #[tokio::test]
    async fn test_goal_below_minimum_rejected() {
        let use_case = SubmitProjectUseCase::new(Arc::new(MockSubmissionSink::new(true)));
        let mut submission = make_submission();
        submission.goal_amount_xrp = 0.5;

        let result = use_case.execute(submission).await;
        assert!(matches!(result, Err(SubmitError::GoalTooLow { .. })));
    }

    #[tokio::test]
    async fn test_port_rejection_propagates() {
        let sink = Arc::new(MockSubmissionSink::new(false));
        let use_case = SubmitProjectUseCase::new(sink.clone());

        let result = use_case.execute(make_submission()).await;
        assert!(matches!(result, Err(SubmitError::Rejected { .. })));
        assert_eq!(sink.project_count(), 0);
    }

    #[test]
    fn test_classic_address_shapes() {
        assert!(validate_classic_address("rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH").is_ok());
        assert!(validate_classic_address("xN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH").is_err());
        assert!(validate_classic_address("rShort").is_err());
        assert!(validate_classic_address("rN7n7otQDd6FczFgLdSqtcsAUxDkw0fzRH").is_err());
        assert!(validate_classic_address("").is_err());
    }
}
