//! Tag search input box

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::Theme;

/// Single-line search box bound to the current term
pub struct SearchBox<'a> {
    pub term: &'a str,
    pub focused: bool,
}

impl<'a> SearchBox<'a> {
    pub fn new(term: &'a str, focused: bool) -> Self {
        Self { term, focused }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (text, text_style) = if self.term.is_empty() && !self.focused {
            ("Press / to search by tag".to_string(), Theme::muted())
        } else {
            (self.term.to_string(), Theme::normal())
        };

        let border_style = if self.focused {
            Theme::focused_border()
        } else {
            Theme::normal()
        };

        let input = Paragraph::new(Span::styled(format!(" {}", text), text_style)).block(
            Block::default()
                .title(" Search tags ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, area);

        if self.focused {
            // One column for the border, one for the leading space
            let x = area.x + 2 + self.term.chars().count() as u16;
            let max_x = area.x + area.width.saturating_sub(2);
            frame.set_cursor_position((x.min(max_x), area.y + 1));
        }
    }
}
