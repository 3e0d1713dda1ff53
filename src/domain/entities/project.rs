//! Fundable project entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a project in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl ProjectId {
    /// Returns the underlying id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Funding category a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Nft,
    GameFi,
    DeFi,
    Charity,
    Education,
}

impl ProjectCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Nft,
        Self::GameFi,
        Self::DeFi,
        Self::Charity,
        Self::Education,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nft => "NFT",
            Self::GameFi => "GameFi",
            Self::DeFi => "DeFi",
            Self::Charity => "Charity",
            Self::Education => "Education",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle status of a project's funding round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Pending,
}

impl ProjectStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Optional social links attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl Socials {
    /// Returns `(label, url)` pairs for every link that is set.
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(url) = self.twitter.as_deref() {
            links.push(("Twitter", url));
        }
        if let Some(url) = self.website.as_deref() {
            links.push(("Website", url));
        }
        if let Some(url) = self.linkedin.as_deref() {
            links.push(("LinkedIn", url));
        }
        if let Some(url) = self.github.as_deref() {
            links.push(("GitHub", url));
        }
        links
    }
}

/// A member of a project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    name: String,
    role: String,
}

impl TeamMember {
    /// Creates a team member.
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Static catalog entry describing a fundable initiative.
///
/// Projects are read-only for the whole session; all mutation paths in the
/// UI operate on copies of the selected entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    slug: String,
    title: String,
    short_description: String,
    description: String,
    category: ProjectCategory,
    goal_amount_xrp: f64,
    raised_amount_xrp: f64,
    xrpl_wallet: String,
    status: ProjectStatus,
    donors: u64,
    #[serde(default)]
    socials: Socials,
    #[serde(default)]
    team: Vec<TeamMember>,
}

impl Project {
    /// Creates a project with the required fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<ProjectId>,
        slug: impl Into<String>,
        title: impl Into<String>,
        category: ProjectCategory,
        goal_amount_xrp: f64,
        raised_amount_xrp: f64,
        xrpl_wallet: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            short_description: String::new(),
            description: String::new(),
            category,
            goal_amount_xrp,
            raised_amount_xrp,
            xrpl_wallet: xrpl_wallet.into(),
            status,
            donors: 0,
            socials: Socials::default(),
            team: Vec::new(),
        }
    }

    /// Sets the one-line pitch.
    #[must_use]
    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    /// Sets the full description.
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Sets the donor count.
    #[must_use]
    pub const fn with_donors(mut self, donors: u64) -> Self {
        self.donors = donors;
        self
    }

    /// Sets the social links.
    #[must_use]
    pub fn with_socials(mut self, socials: Socials) -> Self {
        self.socials = socials;
        self
    }

    /// Sets the team roster.
    #[must_use]
    pub fn with_team(mut self, team: Vec<TeamMember>) -> Self {
        self.team = team;
        self
    }

    /// Returns the project id.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the URL slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the one-line pitch.
    #[must_use]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Returns the full description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> ProjectCategory {
        self.category
    }

    /// Returns the funding goal in XRP.
    #[must_use]
    pub const fn goal_amount_xrp(&self) -> f64 {
        self.goal_amount_xrp
    }

    /// Returns the amount raised so far in XRP.
    #[must_use]
    pub const fn raised_amount_xrp(&self) -> f64 {
        self.raised_amount_xrp
    }

    /// Returns the receiving XRPL wallet address.
    #[must_use]
    pub fn xrpl_wallet(&self) -> &str {
        &self.xrpl_wallet
    }

    /// Returns the funding status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the donor count.
    #[must_use]
    pub const fn donors(&self) -> u64 {
        self.donors
    }

    /// Returns the social links.
    #[must_use]
    pub const fn socials(&self) -> &Socials {
        &self.socials
    }

    /// Returns the team roster.
    #[must_use]
    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    /// Funding progress as a percentage of the goal, clamped to 0..=100
    /// for display. A zero goal reads as fully funded.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.goal_amount_xrp <= 0.0 {
            return 100.0;
        }
        (self.raised_amount_xrp / self.goal_amount_xrp * 100.0).clamp(0.0, 100.0)
    }
}
