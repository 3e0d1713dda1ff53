mod submission_port;

pub use submission_port::{ProjectSubmission, ProposalDraft, SubmissionPort, SubmissionReceipt};

#[cfg(test)]
pub mod mocks {
    pub use super::submission_port::mock::MockSubmissionSink;
}
