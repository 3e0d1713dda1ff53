//! Landing screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::ProjectCatalog;
use crate::presentation::ui::format::{format_count, format_xrp};
use crate::presentation::widgets::{KeyHint, StatCard, StatCardRow};

/// Action requested by the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    OpenProjects,
    OpenGovernance,
    OpenAbout,
    OpenDashboard,
    StartProject,
}

/// Landing screen: hero copy, aggregate stats and the how-it-works walk.
pub struct HomeScreen {
    stats: Vec<StatCard>,
}

impl HomeScreen {
    pub const KEY_HINTS: [KeyHint; 6] = [
        ("p", "Projects"),
        ("g", "Governance"),
        ("d", "Dashboard"),
        ("a", "About"),
        ("n", "Start a project"),
        ("w", "Wallet"),
    ];

    /// Creates the screen, deriving the hero stats from the catalog.
    #[must_use]
    pub fn new(catalog: &ProjectCatalog) -> Self {
        let total_raised: f64 = catalog.all().iter().map(|p| p.raised_amount_xrp()).sum();
        let donors: u64 = catalog.all().iter().map(|p| p.donors()).sum();

        let stats = vec![
            StatCard::new("Total Raised", format_xrp(total_raised)),
            StatCard::new("Projects Funded", format_count(catalog.len() as u64)),
            StatCard::new("Active Donors", format_count(donors)),
        ];

        Self { stats }
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> HomeAction {
        match key.code {
            KeyCode::Char('p') => HomeAction::OpenProjects,
            KeyCode::Char('g') => HomeAction::OpenGovernance,
            KeyCode::Char('a') => HomeAction::OpenAbout,
            KeyCode::Char('d') => HomeAction::OpenDashboard,
            KeyCode::Char('n') | KeyCode::Enter => HomeAction::StartProject,
            _ => HomeAction::None,
        }
    }
}

impl StatefulWidget for &HomeScreen {
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        let [hero_area, stats_area, body_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(StatCardRow::HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

        let hero = vec![
            Line::styled(
                "Fund what matters, on the ledger.",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(
                "Fortuna is a community-governed funding pool. Back projects with XRP, \
                 vote with FORT, and follow every drop of funding on-chain.",
            ),
        ];
        Paragraph::new(hero)
            .wrap(Wrap { trim: true })
            .render(hero_area, buf);

        StatCardRow::new(&self.stats).render(stats_area, buf);

        let body = vec![
            Line::styled(
                "How it works",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw("  1. Connect a wallet and browse the project catalog."),
            Line::raw("  2. Donate XRP directly to a project's escrow wallet."),
            Line::raw("  3. Earn FORT and vote on how the treasury is spent."),
            Line::raw("  4. Track funded milestones from your dashboard."),
            Line::raw(""),
            Line::styled("Why Fortuna", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw("  - Every donation settles on the XRP Ledger, visible to anyone."),
            Line::raw("  - Projects only unlock funds as the community approves milestones."),
            Line::raw("  - Proposals and votes are open to every FORT holder."),
            Line::raw(""),
            Line::styled(
                "Press n to start a project of your own.",
                Style::default().fg(Color::Yellow),
            ),
        ];
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((*scroll, 0))
            .render(body_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Project, ProjectCategory, ProjectStatus};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_screen() -> HomeScreen {
        HomeScreen::new(&ProjectCatalog::new(vec![
            Project::new(
                "p-1",
                "one",
                "One",
                ProjectCategory::DeFi,
                1_000.0,
                400.0,
                "rWallet1111111111111111111",
                ProjectStatus::Active,
            )
            .with_donors(10),
            Project::new(
                "p-2",
                "two",
                "Two",
                ProjectCategory::Charity,
                2_000.0,
                600.0,
                "rWallet2222222222222222222",
                ProjectStatus::Active,
            )
            .with_donors(5),
        ]))
    }

    #[test]
    fn test_navigation_actions() {
        let screen = make_screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('p'))), HomeAction::OpenProjects);
        assert_eq!(screen.handle_key(key(KeyCode::Char('g'))), HomeAction::OpenGovernance);
        assert_eq!(screen.handle_key(key(KeyCode::Char('a'))), HomeAction::OpenAbout);
        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), HomeAction::OpenDashboard);
        assert_eq!(screen.handle_key(key(KeyCode::Char('n'))), HomeAction::StartProject);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), HomeAction::None);
    }

    #[test]
    fn test_stats_derived_from_catalog() {
        let screen = make_screen();
        assert_eq!(screen.stats[0].value(), "1,000 XRP");
        assert_eq!(screen.stats[1].value(), "2");
        assert_eq!(screen.stats[2].value(), "15");
    }
}
