//! Wallet dashboard screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{Project, ProjectCatalog, User};
use crate::presentation::ui::format::{format_count, format_date, format_xrp};
use crate::presentation::widgets::{KeyHint, StatCard, StatCardRow};

const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Action requested by the dashboard screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    None,
    Consumed,
    OpenProject(Project),
    CopyAddress(String),
    OpenSubmitProject,
    Back,
}

/// Session-gated overview of the connected wallet's participation.
///
/// Without a session the main content area renders empty; the surrounding
/// chrome stays.
pub struct DashboardScreen {
    user: Option<User>,
    /// Donated-to projects resolved against the catalog; ids with no
    /// catalog entry are skipped.
    participated: Vec<Project>,
    stats: Vec<StatCard>,
    selected: usize,
    date_format: String,
}

impl DashboardScreen {
    pub const KEY_HINTS: [KeyHint; 4] = [
        ("↑↓ Enter", "Open project"),
        ("c", "Copy address"),
        ("s", "Submit project"),
        ("Esc", "Home"),
    ];

    /// Creates the screen for the current session, if any.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(user: Option<User>, catalog: &ProjectCatalog, date_format: &str) -> Self {
        let participated = user.as_ref().map_or_else(Vec::new, |u| {
            let mut seen = Vec::new();
            for donation in u.donations() {
                if seen
                    .iter()
                    .any(|p: &Project| p.id() == donation.project_id())
                {
                    continue;
                }
                if let Some(project) = catalog.by_id(donation.project_id()) {
                    seen.push(project.clone());
                }
            }
            seen
        });

        let stats = user.as_ref().map_or_else(Vec::new, |u| {
            vec![
                StatCard::new("Total Donated", format_xrp(u.total_donated_xrp())),
                StatCard::new(
                    "Projects Supported",
                    format_count(u.projects_supported() as u64),
                ),
                StatCard::new("Votes Cast", format_count(u.votes_cast() as u64)),
            ]
        });

        Self {
            user,
            participated,
            stats,
            selected: 0,
            date_format: date_format.to_string(),
        }
    }

    /// Returns whether a session is present.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the highlighted participated project, if any.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.participated.get(self.selected)
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        if self.user.is_none() {
            return match key.code {
                KeyCode::Esc => DashboardAction::Back,
                _ => DashboardAction::None,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                DashboardAction::Consumed
            }
            KeyCode::Down => {
                if self.selected + 1 < self.participated.len() {
                    self.selected += 1;
                }
                DashboardAction::Consumed
            }
            KeyCode::Enter => self
                .selected_project()
                .cloned()
                .map_or(DashboardAction::None, DashboardAction::OpenProject),
            KeyCode::Char('c') => self.user.as_ref().map_or(DashboardAction::None, |u| {
                DashboardAction::CopyAddress(u.address().to_string())
            }),
            KeyCode::Char('s') => DashboardAction::OpenSubmitProject,
            KeyCode::Esc => DashboardAction::Back,
            _ => DashboardAction::None,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_profile(user: &User, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("@{} ", user.avatar()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(user.short_address(), Style::default().fg(Color::Green)),
            ]),
            Line::raw(format!(
                "{}  ·  {} FORT",
                format_xrp(user.xrp_balance()),
                format_count(user.fort_balance().round() as u64),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_activity(&self, user: &User, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recent Activity ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = user
            .activity_log()
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(|activity| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:<9}", activity.kind().label()),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::raw(activity.description().to_string()),
                ];
                if let Some(amount) = activity.amount_xrp() {
                    spans.push(Span::styled(
                        format!("  {}", format_xrp(amount)),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                spans.push(Span::styled(
                    format!("  {}", format_date(activity.date(), &self.date_format)),
                    Style::default().fg(Color::DarkGray),
                ));
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for &DashboardScreen {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        // No session, no content. Header and footer are drawn by the app.
        let Some(user) = &self.user else {
            return;
        };

        let [profile_area, stats_area, projects_area, activity_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(StatCardRow::HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(RECENT_ACTIVITY_LIMIT as u16 + 2),
        ])
        .areas(area);

        DashboardScreen::render_profile(user, profile_area, buf);
        StatCardRow::new(&self.stats).render(stats_area, buf);

        let items: Vec<ListItem> = self
            .participated
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<28}", p.title())),
                    Span::styled(
                        format!("{:>10}", p.status().label()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(format!("  {:>3.0}%", p.progress_percent())),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        if !self.participated.is_empty() {
            state.select(Some(self.selected.min(self.participated.len() - 1)));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Your Projects "),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        StatefulWidget::render(list, projects_area, buf, &mut state);

        self.render_activity(user, activity_area, buf);
    }
}
