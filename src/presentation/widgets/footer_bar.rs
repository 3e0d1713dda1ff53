use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A `(key, label)` hint shown in the footer.
pub type KeyHint = (&'static str, &'static str);

pub struct FooterBarStyle {
    pub background: Style,
    pub key_style: Style,
    pub label_style: Style,
    pub info: Style,
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            key_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        }
    }
}

/// Bottom bar with the active screen's keybind hints and a transient
/// right-aligned notice (for example "Copied!").
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    show_hints: bool,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self {
            hints,
            show_hints: true,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn show_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        if !self.show_hints {
            return spans;
        }

        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
            spans.push(Span::styled(format!(" {label} "), self.style.label_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self.right_info.map_or(0, |s| s.chars().count() as u16);
        let left_width = area.width.saturating_sub(right_width + 1);

        let left_line = Line::from(self.build_left_spans());
        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(left_line).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(Span::styled(info, self.style.info)))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HINTS: [KeyHint; 2] = [("Enter", "Open"), ("Esc", "Back")];

    #[test]
    fn test_hints_rendered_in_order() {
        let footer = FooterBar::new(&HINTS);
        let spans = footer.build_left_spans();
        assert_eq!(spans[0].content, " Enter ");
        assert_eq!(spans[1].content, " Open ");
    }

    #[test]
    fn test_hints_hidden() {
        let footer = FooterBar::new(&HINTS).show_hints(false);
        assert!(footer.build_left_spans().is_empty());
    }
}
