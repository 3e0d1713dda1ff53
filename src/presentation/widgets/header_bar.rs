use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub screen_title: Style,
    pub session_connected: Style,
    pub session_disconnected: Style,
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            screen_title: Style::default().fg(Color::DarkGray),
            session_connected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            session_disconnected: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar: app name, the active screen's title and the wallet session chip.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    screen_title: &'a str,
    session_address: Option<String>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, screen_title: &'a str) -> Self {
        Self {
            app_name,
            screen_title,
            session_address: None,
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets the truncated address shown when a wallet is connected.
    #[must_use]
    pub fn session_address(mut self, address: Option<String>) -> Self {
        self.session_address = address;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build_session_span(&self) -> (Span<'static>, u16) {
        let (text, style) = match &self.session_address {
            Some(address) => (format!(" ● {address} "), self.style.session_connected),
            None => (" ○ no wallet ".to_string(), self.style.session_disconnected),
        };
        let width = text.chars().count() as u16;
        (Span::styled(text, style), width)
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(self.screen_title.to_string(), self.style.screen_title),
        ];
        let left_width =
            (self.app_name.chars().count() + 3 + self.screen_title.chars().count()) as u16;

        let left_line = Line::from(left_spans);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let (session_span, session_width) = self.build_session_span();
        if session_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(session_width);
            let right_area = Rect::new(right_x, area.y, session_width, 1);
            Paragraph::new(Line::from(session_span)).render(right_area, buf);
        }
    }
}
