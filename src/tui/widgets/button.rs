//! Previous/next navigation button

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::Theme;

/// A labeled button that renders dimmed when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button<'a> {
    pub label: &'a str,
    pub enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, enabled: bool) -> Self {
        Self { label, enabled }
    }

    pub fn style(&self) -> Style {
        if self.enabled {
            Theme::button()
        } else {
            Theme::button_disabled()
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = self.style();
        let button = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, area);
    }
}
