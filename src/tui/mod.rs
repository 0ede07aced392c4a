//! Terminal User Interface module
//!
//! This module contains the ratatui-based TUI implementation.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;

/// `pct` percent of a terminal dimension, computed without u16 overflow
pub fn percent_of(len: u16, pct: u16) -> u16 {
    let scaled = u32::from(len) * u32::from(pct) / 100;
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_wide_terminal() {
        assert_eq!(percent_of(100, 60), 60);
        assert_eq!(percent_of(1000, 70), 700);
        assert_eq!(percent_of(u16::MAX, 100), u16::MAX);
    }
}
