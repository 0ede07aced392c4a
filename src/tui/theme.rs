//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color
    pub const SECONDARY: Color = Color::Yellow;

    /// Price and other positive values
    pub const SUCCESS: Color = Color::Green;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Card title style
    pub fn card_title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Tag chip style
    pub fn tag() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Price style
    pub fn price() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    /// Enabled navigation button
    pub fn button() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    /// Disabled navigation button
    pub fn button_disabled() -> Style {
        Style::default().fg(Self::MUTED).add_modifier(Modifier::DIM)
    }

    /// Border of the focused search box
    pub fn focused_border() -> Style {
        Style::default().fg(Self::SECONDARY)
    }
}
