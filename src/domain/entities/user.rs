//! Connected wallet session identity.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::ProjectId;

/// A single donation made by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    project_id: ProjectId,
    amount_xrp: f64,
    date: DateTime<Utc>,
}

impl Donation {
    /// Creates a donation record.
    #[must_use]
    pub fn new(project_id: impl Into<ProjectId>, amount_xrp: f64, date: DateTime<Utc>) -> Self {
        Self {
            project_id: project_id.into(),
            amount_xrp,
            date,
        }
    }

    /// Returns the donated-to project id.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the donated amount in XRP.
    #[must_use]
    pub const fn amount_xrp(&self) -> f64 {
        self.amount_xrp
    }

    /// Returns the donation date.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Kind of entry in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Donation,
    Vote,
}

impl ActivityKind {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Donation => "Donation",
            Self::Vote => "Vote",
        }
    }
}

/// A single entry in the user's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    id: String,
    kind: ActivityKind,
    description: String,
    date: DateTime<Utc>,
    #[serde(default)]
    amount_xrp: Option<f64>,
}

impl Activity {
    /// Creates an activity entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: ActivityKind,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            description: description.into(),
            date,
            amount_xrp: None,
        }
    }

    /// Attaches an XRP amount to the entry.
    #[must_use]
    pub const fn with_amount_xrp(mut self, amount: f64) -> Self {
        self.amount_xrp = Some(amount);
        self
    }

    /// Returns the entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the entry kind.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the entry description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the entry date.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the attached XRP amount, if any.
    #[must_use]
    pub const fn amount_xrp(&self) -> Option<f64> {
        self.amount_xrp
    }
}

/// The mock connected-wallet identity.
///
/// Created whole on connect and discarded on disconnect; never mutated in
/// place while a session is live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    address: String,
    xrp_balance: f64,
    fort_balance: f64,
    avatar: String,
    donations: Vec<Donation>,
    activity_log: Vec<Activity>,
}

impl User {
    /// Creates a user with the given address and balances.
    #[must_use]
    pub fn new(address: impl Into<String>, xrp_balance: f64, fort_balance: f64) -> Self {
        Self {
            address: address.into(),
            xrp_balance,
            fort_balance,
            avatar: String::new(),
            donations: Vec::new(),
            activity_log: Vec::new(),
        }
    }

    /// Sets the avatar handle.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Sets the donation history.
    #[must_use]
    pub fn with_donations(mut self, donations: Vec<Donation>) -> Self {
        self.donations = donations;
        self
    }

    /// Sets the activity log.
    #[must_use]
    pub fn with_activity_log(mut self, activity_log: Vec<Activity>) -> Self {
        self.activity_log = activity_log;
        self
    }

    /// Returns the wallet address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the XRP balance.
    #[must_use]
    pub const fn xrp_balance(&self) -> f64 {
        self.xrp_balance
    }

    /// Returns the FORT governance token balance.
    #[must_use]
    pub const fn fort_balance(&self) -> f64 {
        self.fort_balance
    }

    /// Returns the avatar handle.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the donation history.
    #[must_use]
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    /// Returns the activity log.
    #[must_use]
    pub fn activity_log(&self) -> &[Activity] {
        &self.activity_log
    }

    /// Address shortened to `head...tail` for compact display.
    #[must_use]
    pub fn short_address(&self) -> String {
        let len = self.address.chars().count();
        if len <= 12 {
            return self.address.clone();
        }
        let head: String = self.address.chars().take(6).collect();
        let tail: String = self.address.chars().skip(len - 6).collect();
        format!("{head}...{tail}")
    }

    /// Sum of all donations in XRP.
    #[must_use]
    pub fn total_donated_xrp(&self) -> f64 {
        self.donations.iter().map(Donation::amount_xrp).sum()
    }

    /// Number of distinct projects the user has donated to.
    #[must_use]
    pub fn projects_supported(&self) -> usize {
        self.donations
            .iter()
            .map(Donation::project_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of governance votes in the activity log.
    #[must_use]
    pub fn votes_cast(&self) -> usize {
        self.activity_log
            .iter()
            .filter(|a| a.kind() == ActivityKind::Vote)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
    }

    fn make_user() -> User {
        User::new("rFortunaTester1111111111111111", 1_000.0, 250.0)
            .with_donations(vec![
                Donation::new("p-1", 100.0, date(1_750_000_000)),
                Donation::new("p-2", 50.0, date(1_751_000_000)),
                Donation::new("p-1", 25.0, date(1_752_000_000)),
            ])
            .with_activity_log(vec![
                Activity::new("act-1", ActivityKind::Donation, "Donated", date(1_750_000_000))
                    .with_amount_xrp(100.0),
                Activity::new("act-2", ActivityKind::Vote, "Voted for gov-1", date(1_753_000_000)),
                Activity::new("act-3", ActivityKind::Vote, "Voted against gov-2", date(1_754_000_000)),
            ])
    }

    #[test]
    fn test_total_donated() {
        assert!((make_user().total_donated_xrp() - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projects_supported_deduplicates() {
        assert_eq!(make_user().projects_supported(), 2);
    }

    #[test]
    fn test_votes_cast() {
        assert_eq!(make_user().votes_cast(), 2);
    }

    #[test]
    fn test_short_address() {
        let user = make_user();
        let short = user.short_address();
        assert!(short.starts_with("rFortu"));
        assert!(short.contains("..."));
        assert!(short.len() < user.address().len());
    }

    #[test]
    fn test_short_address_keeps_tiny_addresses() {
        let user = User::new("rShort", 0.0, 0.0);
        assert_eq!(user.short_address(), "rShort");
    }
}
