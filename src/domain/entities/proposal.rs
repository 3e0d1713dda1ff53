//! Governance proposal entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a governance proposal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalId(pub String);

impl ProposalId {
    /// Returns the underlying id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProposalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProposalId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Voting status of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    Active,
    Passed,
    Failed,
    Executed,
}

impl ProposalStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Passed, Self::Failed, Self::Executed];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Executed => "Executed",
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Static governance entry. Voting in the UI never mutates the tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    id: ProposalId,
    title: String,
    proposer: String,
    description: String,
    status: ProposalStatus,
    votes_for: u64,
    votes_against: u64,
    end_date: DateTime<Utc>,
}

impl Proposal {
    /// Creates a proposal.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<ProposalId>,
        title: impl Into<String>,
        proposer: impl Into<String>,
        description: impl Into<String>,
        status: ProposalStatus,
        votes_for: u64,
        votes_against: u64,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            proposer: proposer.into(),
            description: description.into(),
            status,
            votes_for,
            votes_against,
            end_date,
        }
    }

    /// Returns the proposal id.
    #[must_use]
    pub const fn id(&self) -> &ProposalId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the proposer address.
    #[must_use]
    pub fn proposer(&self) -> &str {
        &self.proposer
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the voting status.
    #[must_use]
    pub const fn status(&self) -> ProposalStatus {
        self.status
    }

    /// Returns the votes in favor.
    #[must_use]
    pub const fn votes_for(&self) -> u64 {
        self.votes_for
    }

    /// Returns the votes against.
    #[must_use]
    pub const fn votes_against(&self) -> u64 {
        self.votes_against
    }

    /// Returns the voting deadline.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns whether voting is still open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, ProposalStatus::Active)
    }

    /// Share of votes in favor, as a percentage. Zero turnout reads as 0%.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn approval_percent(&self) -> f64 {
        let total = self.votes_for + self.votes_against;
        if total == 0 {
            return 0.0;
        }
        self.votes_for as f64 / total as f64 * 100.0
    }
}

/// Filters proposals by status, preserving order. `None` keeps everything.
#[must_use]
pub fn filter_by_status(
    proposals: &[Proposal],
    status: Option<ProposalStatus>,
) -> Vec<&Proposal> {
    match status {
        None => proposals.iter().collect(),
        Some(status) => proposals.iter().filter(|p| p.status() == status).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_proposal(id: &str, status: ProposalStatus, forv: u64, against: u64) -> Proposal {
        Proposal::new(
            id,
            "Test Proposal",
            "rProposer11111111111111111",
            "Do the thing.",
            status,
            forv,
            against,
            DateTime::<Utc>::from_timestamp(1_760_000_000, 0).unwrap_or_default(),
        )
    }

    #[test]
    fn test_approval_percent() {
        let proposal = make_proposal("gov-1", ProposalStatus::Active, 75, 25);
        assert!((proposal.approval_percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_approval_with_no_votes() {
        let proposal = make_proposal("gov-1", ProposalStatus::Active, 0, 0);
        assert!((proposal.approval_percent()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filter_by_status_preserves_order() {
        let proposals = vec![
            make_proposal("gov-1", ProposalStatus::Passed, 1, 0),
            make_proposal("gov-2", ProposalStatus::Active, 1, 0),
            make_proposal("gov-3", ProposalStatus::Passed, 1, 0),
        ];

        let passed = filter_by_status(&proposals, Some(ProposalStatus::Passed));
        assert_eq!(passed.len(), 2);
        assert_eq!(passed[0].id().as_str(), "gov-1");
        assert_eq!(passed[1].id().as_str(), "gov-3");

        let all = filter_by_status(&proposals, None);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_is_active() {
        assert!(make_proposal("gov-1", ProposalStatus::Active, 0, 0).is_active());
        assert!(!make_proposal("gov-2", ProposalStatus::Executed, 0, 0).is_active());
    }
}
