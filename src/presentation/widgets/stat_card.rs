use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A single value/label pair rendered as a bordered card.
#[derive(Debug, Clone)]
pub struct StatCard {
    label: String,
    value: String,
}

impl StatCard {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Evenly spaced row of stat cards, shared by the overview screens.
pub struct StatCardRow<'a> {
    cards: &'a [StatCard],
}

impl<'a> StatCardRow<'a> {
    #[must_use]
    pub const fn new(cards: &'a [StatCard]) -> Self {
        Self { cards }
    }

    /// Height needed to render the row.
    pub const HEIGHT: u16 = 4;
}

impl Widget for StatCardRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() || area.height == 0 {
            return;
        }

        let constraints: Vec<Constraint> = self
            .cards
            .iter()
            .map(|_| Constraint::Ratio(1, self.cards.len() as u32))
            .collect();
        let columns = Layout::horizontal(constraints).split(area);

        for (card, column) in self.cards.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(*column);
            block.render(*column, buf);

            let lines = vec![
                Line::styled(
                    card.value.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(card.label.clone(), Style::default().fg(Color::DarkGray)),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_card_fields() {
        let card = StatCard::new("Total Raised", "679,450 XRP");
        assert_eq!(card.label(), "Total Raised");
        assert_eq!(card.value(), "679,450 XRP");
    }

    #[test]
    fn test_empty_row_renders_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 4));
        StatCardRow::new(&[]).render(Rect::new(0, 0, 30, 4), &mut buf);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 30, 4)));
    }
}
