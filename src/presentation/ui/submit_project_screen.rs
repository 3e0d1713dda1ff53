//! Project submission form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::TextArea;

use crate::application::use_cases::SHORT_DESCRIPTION_MAX;
use crate::domain::entities::{ProjectCategory, Socials};
use crate::domain::ports::{ProjectSubmission, SubmissionReceipt};
use crate::presentation::widgets::{
    KeyHint, TextInput, edit_textarea, render_textarea, textarea_text,
};

/// Action requested by the submission form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitProjectAction {
    None,
    Consumed,
    Submit(ProjectSubmission),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    ShortDescription,
    Description,
    Category,
    Goal,
    Wallet,
}

impl FormField {
    const ORDER: [Self; 6] = [
        Self::Title,
        Self::ShortDescription,
        Self::Description,
        Self::Category,
        Self::Goal,
        Self::Wallet,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Sectioned project submission form, submitted with `Ctrl+S`.
pub struct SubmitProjectScreen {
    title: TextInput,
    short_description: TextInput,
    description: TextArea<'static>,
    category_index: usize,
    goal: TextInput,
    wallet: TextInput,
    focus: FormField,
    error: Option<String>,
    receipt: Option<SubmissionReceipt>,
}

impl SubmitProjectScreen {
    pub const KEY_HINTS: [KeyHint; 3] = [
        ("Tab", "Next field"),
        ("C-s", "Submit"),
        ("Esc", "Dashboard"),
    ];

    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        let mut title = TextInput::new("Title").placeholder("Project name");
        title.set_focused(true);

        let mut description = TextArea::default();
        description.set_placeholder_text("What will the funding build?");

        Self {
            title,
            short_description: TextInput::new("Short description")
                .placeholder("One-line pitch shown on project cards")
                .char_limit(SHORT_DESCRIPTION_MAX),
            description,
            category_index: 0,
            goal: TextInput::new("Goal (XRP)").placeholder("Minimum 1"),
            wallet: TextInput::new("XRPL wallet").placeholder("r..."),
            focus: FormField::Title,
            error: None,
            receipt: None,
        }
    }

    /// Shows a validation or rejection message inline.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.receipt = None;
    }

    /// Shows the acceptance receipt inline.
    pub fn set_receipt(&mut self, receipt: SubmissionReceipt) {
        self.receipt = Some(receipt);
        self.error = None;
    }

    fn category(&self) -> ProjectCategory {
        ProjectCategory::ALL[self.category_index % ProjectCategory::ALL.len()]
    }

    fn set_focus(&mut self, focus: FormField) {
        self.focus = focus;
        self.title.set_focused(focus == FormField::Title);
        self.short_description
            .set_focused(focus == FormField::ShortDescription);
        self.goal.set_focused(focus == FormField::Goal);
        self.wallet.set_focused(focus == FormField::Wallet);
    }

    fn build_submission(&mut self) -> Option<ProjectSubmission> {
        let goal_text = self.goal.value().trim();
        let goal_amount_xrp = if goal_text.is_empty() {
            0.0
        } else {
            match goal_text.parse::<f64>() {
                Ok(goal) => goal,
                Err(_) => {
                    self.set_error("Goal must be a number");
                    return None;
                }
            }
        };

        Some(ProjectSubmission {
            title: self.title.value().to_string(),
            short_description: self.short_description.value().to_string(),
            description: textarea_text(&self.description),
            category: self.category(),
            goal_amount_xrp,
            xrpl_wallet: self.wallet.value().trim().to_string(),
            socials: Socials::default(),
            team: Vec::new(),
        })
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> SubmitProjectAction {
        use crate::presentation::events::EventHandler;

        if EventHandler::is_back_event(&key) {
            return SubmitProjectAction::Back;
        }
        if EventHandler::is_submit_event(&key) {
            return self
                .build_submission()
                .map_or(SubmitProjectAction::Consumed, SubmitProjectAction::Submit);
        }

        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return SubmitProjectAction::Consumed;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                return SubmitProjectAction::Consumed;
            }
            _ => {}
        }

        let consumed = match self.focus {
            FormField::Title => self.title.handle_key(key),
            FormField::ShortDescription => self.short_description.handle_key(key),
            FormField::Description => edit_textarea(&mut self.description, key),
            FormField::Category => match key.code {
                KeyCode::Right => {
                    self.category_index = (self.category_index + 1) % ProjectCategory::ALL.len();
                    true
                }
                KeyCode::Left => {
                    self.category_index = (self.category_index + ProjectCategory::ALL.len() - 1)
                        % ProjectCategory::ALL.len();
                    true
                }
                _ => false,
            },
            FormField::Goal => match key.code {
                // Digits and a dot only; parsing happens on submit.
                KeyCode::Char(c) if !c.is_ascii_digit() && c != '.' => true,
                _ => self.goal.handle_key(key),
            },
            FormField::Wallet => self.wallet.handle_key(key),
        };

        if consumed {
            SubmitProjectAction::Consumed
        } else {
            SubmitProjectAction::None
        }
    }

    fn render_category(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == FormField::Category;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            })
            .title("Category");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for (i, category) in ProjectCategory::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if *category == self.category() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", category.label()), style));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(error) = &self.error {
            Line::styled(format!("✗ {error}"), Style::default().fg(Color::Red))
        } else if let Some(receipt) = &self.receipt {
            Line::styled(
                format!("✓ Submitted for review — reference {}", receipt.reference()),
                Style::default().fg(Color::Green),
            )
        } else {
            Line::styled(
                "Ctrl+S submits the draft for DAO review.",
                Style::default().fg(Color::DarkGray),
            )
        };
        Paragraph::new(line).render(area, buf);
    }
}

impl Default for SubmitProjectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &SubmitProjectScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, short_area, description_area, category_area, goal_area, wallet_area, status_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(area);

        (&self.title).render(title_area, buf);
        (&self.short_description).render(short_area, buf);

        let description_focused = self.focus == FormField::Description;
        let description_block = Block::default()
            .borders(Borders::ALL)
            .border_style(if description_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            })
            .title("Description");
        let description_inner = description_block.inner(description_area);
        description_block.render(description_area, buf);
        render_textarea(&self.description, description_focused, description_inner, buf);

        self.render_category(category_area, buf);
        (&self.goal).render(goal_area, buf);
        (&self.wallet).render(wallet_area, buf);
        self.render_status(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut SubmitProjectScreen, text: &str) {
        for c in text.chars() {
            let _ = screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn submit_key() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut screen = SubmitProjectScreen::new();
        assert_eq!(screen.focus, FormField::Title);

        for _ in 0..6 {
            let _ = screen.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(screen.focus, FormField::Title);

        let _ = screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.focus, FormField::Wallet);
    }

    #[test]
    fn test_submit_builds_draft_from_fields() {
        let mut screen = SubmitProjectScreen::new();
        type_text(&mut screen, "Solar Grids");
        let _ = screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Community solar");
        let _ = screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Long form description.");
        let _ = screen.handle_key(key(KeyCode::Tab));
        let _ = screen.handle_key(key(KeyCode::Right)); // Category -> GameFi
        let _ = screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "50000");
        let _ = screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH");

        match screen.handle_key(submit_key()) {
            SubmitProjectAction::Submit(submission) => {
                assert_eq!(submission.title, "Solar Grids");
                assert_eq!(submission.short_description, "Community solar");
                assert_eq!(submission.description, "Long form description.");
                assert_eq!(submission.category, ProjectCategory::GameFi);
                assert!((submission.goal_amount_xrp - 50_000.0).abs() < f64::EPSILON);
                assert_eq!(submission.xrpl_wallet, "rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_goal_field_rejects_letters() {
        let mut screen = SubmitProjectScreen::new();
        for _ in 0..4 {
            let _ = screen.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(screen.focus, FormField::Goal);
        type_text(&mut screen, "12a.5");
        assert_eq!(screen.goal.value(), "12.5");
    }

    #[test]
    fn test_receipt_replaces_error() {
        let mut screen = SubmitProjectScreen::new();
        screen.set_error("title is required");
        assert!(screen.error.is_some());

        screen.set_receipt(SubmissionReceipt::new("FDN-1", Utc::now()));
        assert!(screen.error.is_none());
        assert!(screen.receipt.is_some());
    }

    #[test]
    fn test_escape_backs_out() {
        let mut screen = SubmitProjectScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), SubmitProjectAction::Back);
    }
}
