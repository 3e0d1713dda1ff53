//! Project detail screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::Project;
use crate::presentation::ui::format::{format_count, format_xrp};
use crate::presentation::widgets::KeyHint;

/// Action requested by the project detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectAction {
    None,
    Consumed,
    Share(Project),
    CopyWallet(String),
    Back,
}

/// Full detail view of one catalog entry.
pub struct ProjectScreen {
    project: Project,
    donate_notice: bool,
}

impl ProjectScreen {
    pub const KEY_HINTS: [KeyHint; 4] = [
        ("d", "Donate"),
        ("s", "Share"),
        ("c", "Copy wallet"),
        ("Esc", "Back"),
    ];

    /// Creates the screen for one project.
    #[must_use]
    pub const fn new(project: Project) -> Self {
        Self {
            project,
            donate_notice: false,
        }
    }

    /// Returns the project on display.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> ProjectAction {
        match key.code {
            KeyCode::Char('d') => {
                // Donations are not wired to a ledger in the mock build.
                self.donate_notice = true;
                ProjectAction::Consumed
            }
            KeyCode::Char('s') => ProjectAction::Share(self.project.clone()),
            KeyCode::Char('c') => ProjectAction::CopyWallet(self.project.xrpl_wallet().to_string()),
            KeyCode::Esc => ProjectAction::Back,
            _ => ProjectAction::None,
        }
    }
}

impl StatefulWidget for &ProjectScreen {
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        let [banner_area, gauge_area, body_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let project = &self.project;
        let banner = vec![
            Line::from(vec![
                Span::styled(
                    project.title().to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    project.category().label(),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw("  "),
                Span::styled(project.status().label(), Style::default().fg(Color::Yellow)),
            ]),
            Line::raw(format!(
                "{} raised of {}  ·  {} donors",
                format_xrp(project.raised_amount_xrp()),
                format_xrp(project.goal_amount_xrp()),
                format_count(project.donors()),
            )),
        ];
        Paragraph::new(banner).render(banner_area, buf);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = project.progress_percent().round() as u16;
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent.min(100))
            .render(gauge_area, buf);

        let mut body = vec![Line::raw(""), Line::raw(project.description().to_string())];

        body.push(Line::raw(""));
        body.push(Line::styled(
            "Receiving wallet",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        body.push(Line::styled(
            format!("  {}", project.xrpl_wallet()),
            Style::default().fg(Color::Green),
        ));

        if !project.team().is_empty() {
            body.push(Line::raw(""));
            body.push(Line::styled(
                "Team",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for member in project.team() {
                body.push(Line::raw(format!("  {} — {}", member.name(), member.role())));
            }
        }

        let links = project.socials().links();
        if !links.is_empty() {
            body.push(Line::raw(""));
            body.push(Line::styled(
                "Links",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for (label, url) in links {
                body.push(Line::raw(format!("  {label}: {url}")));
            }
        }

        if self.donate_notice {
            body.push(Line::raw(""));
            body.push(Line::styled(
                "Donations are simulated in this preview build; nothing was sent.",
                Style::default().fg(Color::Yellow),
            ));
        }

        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((*scroll, 0))
            .render(body_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProjectCategory, ProjectStatus};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_screen() -> ProjectScreen {
        ProjectScreen::new(Project::new(
            "p-1",
            "solar",
            "Solar",
            ProjectCategory::Charity,
            1_000.0,
            250.0,
            "rDsKJJQz4mFcZnxrKY8MvUfUT97BMLkdrC",
            ProjectStatus::Active,
        ))
    }

    #[test]
    fn test_copy_wallet_carries_address() {
        let mut screen = make_screen();
        match screen.handle_key(key(KeyCode::Char('c'))) {
            ProjectAction::CopyWallet(address) => {
                assert_eq!(address, "rDsKJJQz4mFcZnxrKY8MvUfUT97BMLkdrC");
            }
            other => panic!("expected CopyWallet, got {other:?}"),
        }
    }

    #[test]
    fn test_donate_sets_notice_without_action() {
        let mut screen = make_screen();
        assert!(!screen.donate_notice);
        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), ProjectAction::Consumed);
        assert!(screen.donate_notice);
    }

    #[test]
    fn test_share_and_back() {
        let mut screen = make_screen();
        assert!(matches!(
            screen.handle_key(key(KeyCode::Char('s'))),
            ProjectAction::Share(_)
        ));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ProjectAction::Back);
    }
}
