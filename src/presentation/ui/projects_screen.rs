//! Project catalog screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{CategoryFilter, Project, ProjectCatalog};
use crate::presentation::ui::format::format_xrp;
use crate::presentation::widgets::KeyHint;

/// Action requested by the projects screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsAction {
    None,
    Consumed,
    Open(Project),
    Share(Project),
    Back,
}

/// Filterable, ordered catalog list with a detail preview.
pub struct ProjectsScreen {
    catalog: ProjectCatalog,
    filter: CategoryFilter,
    selected: usize,
}

impl ProjectsScreen {
    pub const KEY_HINTS: [KeyHint; 5] = [
        ("↑↓", "Select"),
        ("←→", "Category"),
        ("Enter", "Open"),
        ("s", "Share"),
        ("Esc", "Home"),
    ];

    /// Creates the screen over a snapshot of the catalog. The category
    /// filter is app-owned state and is handed back in on every rebuild.
    #[must_use]
    pub const fn new(catalog: ProjectCatalog, filter: CategoryFilter) -> Self {
        Self {
            catalog,
            filter,
            selected: 0,
        }
    }

    /// Returns the active category filter.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    fn visible(&self) -> Vec<&Project> {
        self.catalog.filtered(self.filter)
    }

    /// Returns the currently highlighted project, if any.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.visible().into_iter().nth(self.selected)
    }

    fn cycle_filter(&mut self, forward: bool) {
        let tabs = CategoryFilter::tabs();
        let current = tabs.iter().position(|t| *t == self.filter).unwrap_or(0);
        let next = if forward {
            (current + 1) % tabs.len()
        } else {
            (current + tabs.len() - 1) % tabs.len()
        };
        self.filter = tabs[next];
        self.selected = 0;
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> ProjectsAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ProjectsAction::Consumed
            }
            KeyCode::Down => {
                let count = self.visible().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                ProjectsAction::Consumed
            }
            KeyCode::Right | KeyCode::Tab => {
                self.cycle_filter(true);
                ProjectsAction::Consumed
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.cycle_filter(false);
                ProjectsAction::Consumed
            }
            KeyCode::Enter => self
                .selected_project()
                .cloned()
                .map_or(ProjectsAction::None, ProjectsAction::Open),
            KeyCode::Char('s') => self
                .selected_project()
                .cloned()
                .map_or(ProjectsAction::None, ProjectsAction::Share),
            KeyCode::Esc => ProjectsAction::Back,
            _ => ProjectsAction::None,
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, tab) in CategoryFilter::tabs().into_iter().enumerate() {
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
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_preview(project: &Project, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", project.title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, gauge_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let lines = vec![
            Line::raw(project.short_description().to_string()),
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    format!("{} ", project.category().label()),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    project.status().label(),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::raw(format!(
                "{} raised of {}",
                format_xrp(project.raised_amount_xrp()),
                format_xrp(project.goal_amount_xrp()),
            )),
        ];
        Paragraph::new(lines).render(text_area, buf);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = project.progress_percent().round() as u16;
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent.min(100))
            .render(gauge_area, buf);
    }
}

impl Widget for &ProjectsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [tabs_area, list_area, preview_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(8),
        ])
        .areas(area);

        self.render_tabs(tabs_area, buf);

        let visible = self.visible();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<28}", p.title())),
                    Span::styled(
                        format!("{:>10}", p.category().label()),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::raw(format!("  {:>3.0}%", p.progress_percent())),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        if !visible.is_empty() {
            state.select(Some(self.selected.min(visible.len() - 1)));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Projects "),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        StatefulWidget::render(list, list_area, buf, &mut state);

        if let Some(project) = self.selected_project() {
            ProjectsScreen::render_preview(project, preview_area, buf);
        }
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

    fn make_catalog() -> ProjectCatalog {
        let make = |id: &str, category| {
            Project::new(
                id,
                id,
                format!("Project {id}"),
                category,
                1_000.0,
                100.0,
                "rWallet1111111111111111111",
                ProjectStatus::Active,
            )
        };
        ProjectCatalog::new(vec![
            make("p-1", ProjectCategory::DeFi),
            make("p-2", ProjectCategory::Charity),
            make("p-3", ProjectCategory::DeFi),
        ])
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut screen = ProjectsScreen::new(make_catalog(), CategoryFilter::All);
        assert_eq!(screen.selected_project().map(|p| p.id().as_str()), Some("p-1"));

        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_project().map(|p| p.id().as_str()), Some("p-3"));

        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected_project().map(|p| p.id().as_str()), Some("p-2"));
    }

    #[test]
    fn test_filter_cycle_resets_selection() {
        let mut screen = ProjectsScreen::new(make_catalog(), CategoryFilter::All);
        screen.handle_key(key(KeyCode::Down));

        screen.handle_key(key(KeyCode::Right));
        assert_eq!(screen.filter(), CategoryFilter::Category(ProjectCategory::Nft));
        assert_eq!(screen.selected, 0);

        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_open_carries_selected_project() {
        let mut screen = ProjectsScreen::new(make_catalog(), CategoryFilter::All);
        screen.handle_key(key(KeyCode::Down));

        match screen.handle_key(key(KeyCode::Enter)) {
            ProjectsAction::Open(project) => assert_eq!(project.id().as_str(), "p-2"),
            other => panic!("expected Open, got {other:?}"),
        }
    }

    #[test]
    fn test_share_and_back() {
        let mut screen = ProjectsScreen::new(make_catalog(), CategoryFilter::All);
        assert!(matches!(
            screen.handle_key(key(KeyCode::Char('s'))),
            ProjectsAction::Share(_)
        ));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ProjectsAction::Back);
    }

    #[test]
    fn test_open_with_empty_filter_is_noop() {
        let mut screen = ProjectsScreen::new(ProjectCatalog::default(), CategoryFilter::All);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ProjectsAction::None);
    }
}
