//! Static demo dataset.
//!
//! The whole product is a mock front-end; this module is its "backend".
//! Every value here is fictitious and lives for the process lifetime.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Activity, ActivityKind, Donation, Project, ProjectCatalog, ProjectCategory, ProjectStatus,
    Proposal, ProposalStatus, Socials, TeamMember, User,
};

fn date(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

/// The project catalog shown across the app.
#[must_use]
pub fn project_catalog() -> ProjectCatalog {
    ProjectCatalog::new(vec![
        Project::new(
            "proj-aurora",
            "aurora-badges",
            "Aurora Badges",
            ProjectCategory::Nft,
            120_000.0,
            87_400.0,
            "rhXbNbGzqJk43XwMXvDSdE6V5CTCYfkyBo",
            ProjectStatus::Active,
        )
        .with_short_description("Dynamic NFT badges that evolve with every donation you make.")
        .with_description(
            "Aurora Badges mints a soul-bound NFT for every Fortuna donor. The badge \
             artwork evolves on-chain as your cumulative contributions grow, giving \
             long-term supporters a visible history of their impact.",
        )
        .with_donors(412)
        .with_socials(Socials {
            twitter: Some("https://twitter.com/aurorabadges".to_string()),
            website: Some("https://aurorabadges.art".to_string()),
            ..Socials::default()
        })
        .with_team(vec![
            TeamMember::new("Mara Lindqvist", "Founder"),
            TeamMember::new("Jonas Brehm", "Smart Contract Engineer"),
        ]),
        Project::new(
            "proj-gridfall",
            "gridfall",
            "Gridfall",
            ProjectCategory::GameFi,
            250_000.0,
            151_200.0,
            "rLHzPsX6oXkzU2qL35kHvEUQkzXCtSNdWy",
            ProjectStatus::Active,
        )
        .with_short_description("A tactics game where season rewards are funded by the community.")
        .with_description(
            "Gridfall is a free-to-play tactics game. Season prize pools are raised \
             through Fortuna instead of a publisher, and every funder gets a share of \
             season revenue streamed back to their wallet.",
        )
        .with_donors(958)
        .with_socials(Socials {
            twitter: Some("https://twitter.com/gridfallgame".to_string()),
            website: Some("https://gridfall.gg".to_string()),
            github: Some("https://github.com/gridfall".to_string()),
            ..Socials::default()
        })
        .with_team(vec![
            TeamMember::new("Ivy Chen", "Game Director"),
            TeamMember::new("Tomás Herrera", "Lead Developer"),
            TeamMember::new("Saskia Veld", "Economy Design"),
        ]),
        Project::new(
            "proj-driftpool",
            "driftpool",
            "Driftpool",
            ProjectCategory::DeFi,
            400_000.0,
            400_000.0,
            "rU6k2D3nqAVhMXDrEfSvzbDaZqgE9fqeBp",
            ProjectStatus::Completed,
        )
        .with_short_description("Auto-rebalancing liquidity pools for XRPL-issued assets.")
        .with_description(
            "Driftpool keeps XRPL AMM positions on target allocation without manual \
             rebalancing. The funded milestone shipped the rebalancer and an open \
             source monitoring dashboard.",
        )
        .with_donors(1_204)
        .with_socials(Socials {
            website: Some("https://driftpool.fi".to_string()),
            github: Some("https://github.com/driftpool".to_string()),
            ..Socials::default()
        })
        .with_team(vec![
            TeamMember::new("Pavel Morozov", "Protocol Lead"),
            TeamMember::new("Aiko Tanaka", "Quant Research"),
        ]),
        Project::new(
            "proj-solarbloom",
            "solar-bloom",
            "Solar Bloom",
            ProjectCategory::Charity,
            80_000.0,
            23_650.0,
            "rDsKJJQz4mFcZnxrKY8MvUfUT97BMLkdrC",
            ProjectStatus::Active,
        )
        .with_short_description("Village-scale solar micro-grids across East Africa.")
        .with_description(
            "Solar Bloom installs community-owned micro-grids and trains local \
             operators. Every grid's output and payout ledger is published monthly, \
             so donors can audit exactly where the funding went.",
        )
        .with_donors(687)
        .with_socials(Socials {
            twitter: Some("https://twitter.com/solarbloomorg".to_string()),
            website: Some("https://solarbloom.org".to_string()),
            linkedin: Some("https://linkedin.com/company/solarbloom".to_string()),
            ..Socials::default()
        })
        .with_team(vec![
            TeamMember::new("Nadia Okonkwo", "Program Director"),
            TeamMember::new("Liam Byrne", "Field Engineering"),
        ]),
        Project::new(
            "proj-ledgerschool",
            "ledger-school",
            "Ledger School",
            ProjectCategory::Education,
            60_000.0,
            12_300.0,
            "rPbvCmQXq9FDFPzwqxGiwBnbYREMUVUKvi",
            ProjectStatus::Active,
        )
        .with_short_description("Free, localized courses on ledger technology for new developers.")
        .with_description(
            "Ledger School produces a free curriculum covering payments, tokenization \
             and on-ledger governance, translated by community contributors into nine \
             languages. Funding pays translators and hosts workshops.",
        )
        .with_donors(233)
        .with_socials(Socials {
            website: Some("https://ledgerschool.dev".to_string()),
            github: Some("https://github.com/ledgerschool".to_string()),
            ..Socials::default()
        })
        .with_team(vec![TeamMember::new("Priya Raman", "Curriculum Lead")]),
        Project::new(
            "proj-wildtrace",
            "wildtrace",
            "Wildtrace",
            ProjectCategory::Nft,
            150_000.0,
            4_900.0,
            "rJbVrXZkDMUcYrtFtMOwZDfTYssRjWbyxL",
            ProjectStatus::Pending,
        )
        .with_short_description("Photographic wildlife NFTs funding anti-poaching patrols.")
        .with_description(
            "Wildtrace partners with reserve photographers. Each drop funds a named \
             patrol unit, and holders receive quarterly field reports from the \
             rangers their purchase equips.",
        )
        .with_donors(51)
        .with_socials(Socials {
            twitter: Some("https://twitter.com/wildtrace".to_string()),
            ..Socials::default()
        })
        .with_team(vec![
            TeamMember::new("Elena Duarte", "Founder"),
            TeamMember::new("Kofi Mensah", "Conservation Liaison"),
        ]),
    ])
}

/// The governance proposal list.
#[must_use]
pub fn proposals() -> Vec<Proposal> {
    vec![
        Proposal::new(
            "gov-12",
            "Fund a security audit for Driftpool v2",
            "rU6k2D3nqAVhMXDrEfSvzbDaZqgE9fqeBp",
            "Allocate 40,000 XRP from the treasury to a third-party audit of the \
             Driftpool v2 contracts before the next funding round opens.",
            ProposalStatus::Active,
            18_420,
            3_150,
            date(1_762_992_000),
        ),
        Proposal::new(
            "gov-11",
            "Raise the proposal submission fee to 50 FORT",
            "rhXbNbGzqJk43XwMXvDSdE6V5CTCYfkyBo",
            "Spam proposals have tripled since launch. Raising the submission fee \
             from 10 to 50 FORT keeps the bar low for serious proposers while \
             pricing out drive-by submissions.",
            ProposalStatus::Active,
            9_870,
            8_440,
            date(1_761_350_400),
        ),
        Proposal::new(
            "gov-10",
            "Add a quarterly transparency report requirement",
            "rDsKJJQz4mFcZnxrKY8MvUfUT97BMLkdrC",
            "Funded projects must publish a quarterly spend report or have further \
             disbursements paused until they do.",
            ProposalStatus::Passed,
            22_310,
            1_980,
            date(1_757_894_400),
        ),
        Proposal::new(
            "gov-9",
            "Reduce the voting period from 14 to 7 days",
            "rLHzPsX6oXkzU2qL35kHvEUQkzXCtSNdWy",
            "Most votes are decided within the first five days. A shorter period \
             lets funding decisions land a week earlier.",
            ProposalStatus::Failed,
            6_240,
            14_730,
            date(1_755_907_200),
        ),
        Proposal::new(
            "gov-8",
            "Launch the dynamic donor badge program",
            "rPbvCmQXq9FDFPzwqxGiwBnbYREMUVUKvi",
            "Commission Aurora Badges to mint evolving donor badges for every \
             Fortuna contributor, funded with 15,000 XRP.",
            ProposalStatus::Executed,
            19_860,
            2_410,
            date(1_751_328_000),
        ),
    ]
}

/// The fixed identity installed when the mock wallet connects.
#[must_use]
pub fn wallet_identity() -> User {
    User::new("rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH", 18_540.0, 1_275.0)
        .with_avatar("fortuna-fox")
        .with_donations(vec![
            Donation::new("proj-solarbloom", 500.0, date(1_748_736_000)),
            Donation::new("proj-gridfall", 1_200.0, date(1_750_550_400)),
            Donation::new("proj-solarbloom", 250.0, date(1_753_142_400)),
            Donation::new("proj-aurora", 300.0, date(1_754_870_400)),
        ])
        .with_activity_log(vec![
            Activity::new(
                "act-9",
                ActivityKind::Donation,
                "Donated to Aurora Badges",
                date(1_754_870_400),
            )
            .with_amount_xrp(300.0),
            Activity::new(
                "act-8",
                ActivityKind::Vote,
                "Voted for \"Fund a security audit for Driftpool v2\"",
                date(1_754_265_600),
            ),
            Activity::new(
                "act-7",
                ActivityKind::Donation,
                "Donated to Solar Bloom",
                date(1_753_142_400),
            )
            .with_amount_xrp(250.0),
            Activity::new(
                "act-6",
                ActivityKind::Vote,
                "Voted against \"Reduce the voting period from 14 to 7 days\"",
                date(1_752_019_200),
            ),
            Activity::new(
                "act-5",
                ActivityKind::Donation,
                "Donated to Gridfall",
                date(1_750_550_400),
            )
            .with_amount_xrp(1_200.0),
            Activity::new(
                "act-4",
                ActivityKind::Vote,
                "Voted for \"Add a quarterly transparency report requirement\"",
                date(1_749_945_600),
            ),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProjectId;

    #[test]
    fn test_catalog_is_nonempty_and_ids_unique() {
        let catalog = project_catalog();
        assert!(!catalog.is_empty());

        let mut ids: Vec<_> = catalog.all().iter().map(|p| p.id().as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_user_donations_resolve_in_catalog() {
        let catalog = project_catalog();
        let user = wallet_identity();

        for donation in user.donations() {
            assert!(
                catalog.by_id(donation.project_id()).is_some(),
                "donation references unknown project {}",
                donation.project_id()
            );
        }
    }

    #[test]
    fn test_proposal_statuses_cover_active() {
        let proposals = proposals();
        assert!(proposals.iter().any(Proposal::is_active));
    }

    #[test]
    fn test_known_lookup() {
        let catalog = project_catalog();
        let project = catalog.by_id(&ProjectId::from("proj-gridfall")).expect("gridfall");
        assert_eq!(project.title(), "Gridfall");
    }
}
