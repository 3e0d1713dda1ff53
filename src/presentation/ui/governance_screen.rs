//! Governance screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::{Proposal, ProposalStatus, filter_by_status};
use crate::presentation::ui::format::{format_count, format_date};
use crate::presentation::widgets::{KeyHint, StatCard, StatCardRow};

/// Action requested by the governance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernanceAction {
    None,
    Consumed,
    NewProposal,
    Back,
}

/// Proposal list with an independent status filter.
pub struct GovernanceScreen {
    proposals: Vec<Proposal>,
    filter: Option<ProposalStatus>,
    stats: Vec<StatCard>,
    date_format: String,
}

impl GovernanceScreen {
    pub const KEY_HINTS: [KeyHint; 3] = [
        ("←→", "Status"),
        ("n", "New proposal"),
        ("Esc", "Home"),
    ];

    /// Creates the screen over the proposal list. `voting_power` is the
    /// session's FORT balance, absent without a wallet.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(proposals: Vec<Proposal>, voting_power: Option<f64>, date_format: &str) -> Self {
        let active = proposals.iter().filter(|p| p.is_active()).count();
        let stats = vec![
            StatCard::new("Active Proposals", format_count(active as u64)),
            StatCard::new("Total Proposals", format_count(proposals.len() as u64)),
            StatCard::new(
                "Voting Power",
                voting_power.map_or_else(
                    || "N/A".to_string(),
                    |fort| format!("{} FORT", format_count(fort.round() as u64)),
                ),
            ),
        ];

        Self {
            proposals,
            filter: None,
            stats,
            date_format: date_format.to_string(),
        }
    }

    /// Returns the active status filter, `None` meaning all.
    #[must_use]
    pub const fn filter(&self) -> Option<ProposalStatus> {
        self.filter
    }

    fn cycle_filter(&mut self, forward: bool) {
        let mut tabs: Vec<Option<ProposalStatus>> = vec![None];
        tabs.extend(ProposalStatus::ALL.map(Some));

        let current = tabs.iter().position(|t| *t == self.filter).unwrap_or(0);
        let next = if forward {
            (current + 1) % tabs.len()
        } else {
            (current + tabs.len() - 1) % tabs.len()
        };
        self.filter = tabs[next];
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> GovernanceAction {
        match key.code {
            KeyCode::Right | KeyCode::Tab => {
                self.cycle_filter(true);
                GovernanceAction::Consumed
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.cycle_filter(false);
                GovernanceAction::Consumed
            }
            KeyCode::Char('n') => GovernanceAction::NewProposal,
            KeyCode::Esc => GovernanceAction::Back,
            _ => GovernanceAction::None,
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let mut tabs: Vec<(Option<ProposalStatus>, &str)> = vec![(None, "All")];
        tabs.extend(ProposalStatus::ALL.map(|s| (Some(s), s.label())));

        let mut spans = Vec::new();
        for (i, (tab, label)) in tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if tab == self.filter {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn proposal_lines(&self, proposal: &Proposal) -> Vec<Line<'static>> {
        let status_color = match proposal.status() {
            ProposalStatus::Active => Color::Cyan,
            ProposalStatus::Passed | ProposalStatus::Executed => Color::Green,
            ProposalStatus::Failed => Color::Red,
        };

        vec![
            Line::from(vec![
                Span::styled(
                    proposal.title().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", proposal.status().label()),
                    Style::default().fg(status_color),
                ),
            ]),
            Line::styled(
                format!("  by {}", proposal.proposer()),
                Style::default().fg(Color::DarkGray),
            ),
            Line::raw(format!("  {}", proposal.description())),
            Line::from(vec![
                Span::styled(
                    format!("  for {}", format_count(proposal.votes_for())),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("  against {}", format_count(proposal.votes_against())),
                    Style::default().fg(Color::Red),
                ),
                Span::raw(format!(
                    "  ·  {:.0}% approval  ·  ends {}",
                    proposal.approval_percent(),
                    format_date(proposal.end_date(), &self.date_format),
                )),
            ]),
            Line::raw(""),
        ]
    }
}

impl StatefulWidget for &GovernanceScreen {
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        let [tabs_area, stats_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(StatCardRow::HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);

        self.render_tabs(tabs_area, buf);
        StatCardRow::new(&self.stats).render(stats_area, buf);

        let mut lines = Vec::new();
        for proposal in filter_by_status(&self.proposals, self.filter) {
            lines.extend(self.proposal_lines(proposal));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((*scroll, 0))
            .render(list_area, buf);
    }
}
