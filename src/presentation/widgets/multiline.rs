//! Key routing and rendering for multi-line text areas.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use tui_textarea::{CursorMove, TextArea};

/// Routes an editing key to a text area. Returns `true` if consumed.
pub fn edit_textarea(textarea: &mut TextArea<'_>, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char(c) => textarea.insert_char(c),
        KeyCode::Enter => textarea.insert_newline(),
        KeyCode::Backspace => {
            textarea.delete_char();
        }
        KeyCode::Delete => {
            textarea.delete_next_char();
        }
        KeyCode::Left => textarea.move_cursor(CursorMove::Back),
        KeyCode::Right => textarea.move_cursor(CursorMove::Forward),
        KeyCode::Up => textarea.move_cursor(CursorMove::Up),
        KeyCode::Down => textarea.move_cursor(CursorMove::Down),
        KeyCode::Home => textarea.move_cursor(CursorMove::Head),
        KeyCode::End => textarea.move_cursor(CursorMove::End),
        _ => return false,
    }
    true
}

/// Joins the text area's logical lines into one string.
#[must_use]
pub fn textarea_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

/// Draws the text area manually instead of through tui-textarea's widget,
/// which is built against an older ratatui and cannot draw into this
/// crate's buffers. Keeps the cursor row in view; long lines are clipped.
pub fn render_textarea(textarea: &TextArea<'_>, focused: bool, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let lines = textarea.lines();
    let empty = lines.len() == 1 && lines[0].is_empty();
    let (cursor_row, cursor_col) = textarea.cursor();
    let height = area.height as usize;
    let skip = cursor_row.saturating_sub(height.saturating_sub(1));

    if empty {
        Paragraph::new(textarea.placeholder_text().to_string())
            .style(Style::default().fg(Color::DarkGray))
            .render(area, buf);
    } else {
        let text: Vec<Line<'_>> = lines
            .iter()
            .skip(skip)
            .take(height)
            .map(|line| Line::raw(line.clone()))
            .collect();
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .render(area, buf);
    }

    if focused {
        let col = lines
            .get(cursor_row)
            .map_or(0, |line| line.chars().take(cursor_col).count());
        #[allow(clippy::cast_possible_truncation)]
        let cursor_x = area.x + col as u16;
        #[allow(clippy::cast_possible_truncation)]
        let cursor_y = area.y + (cursor_row - skip) as u16;
        if cursor_x < area.x + area.width {
            buf[(cursor_x, cursor_y)].set_style(Style::default().bg(Color::White).fg(Color::Black));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_newlines() {
        let mut textarea = TextArea::default();
        for c in "ab".chars() {
            edit_textarea(&mut textarea, key(KeyCode::Char(c)));
        }
        edit_textarea(&mut textarea, key(KeyCode::Enter));
        edit_textarea(&mut textarea, key(KeyCode::Char('c')));

        assert_eq!(textarea_text(&textarea), "ab\nc");
    }

    #[test]
    fn test_backspace() {
        let mut textarea = TextArea::default();
        edit_textarea(&mut textarea, key(KeyCode::Char('x')));
        edit_textarea(&mut textarea, key(KeyCode::Backspace));
        assert_eq!(textarea_text(&textarea), "");
    }

    #[test]
    fn test_render_draws_typed_text() {
        let mut textarea = TextArea::default();
        for c in "hi".chars() {
            edit_textarea(&mut textarea, key(KeyCode::Char(c)));
        }
        edit_textarea(&mut textarea, key(KeyCode::Enter));
        edit_textarea(&mut textarea, key(KeyCode::Char('!')));

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        render_textarea(&textarea, true, area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "h");
        assert_eq!(buf[(1, 0)].symbol(), "i");
        assert_eq!(buf[(0, 1)].symbol(), "!");
        // Cursor cell is highlighted after the '!'.
        assert_eq!(buf[(1, 1)].style().bg, Some(Color::White));
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("Tell us more");

        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        render_textarea(&textarea, false, area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "T");
        assert_eq!(buf[(0, 0)].style().fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_control_chords_not_consumed() {
        let mut textarea = TextArea::default();
        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!edit_textarea(&mut textarea, chord));
    }
}
