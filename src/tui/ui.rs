//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::tui::app::App;
use crate::tui::percent_of;
use crate::tui::theme::Theme;
use crate::tui::widgets::{Button, Card, SearchBox};

/// Shown in place of the cards when the page is empty
pub const EMPTY_MESSAGE: &str = "No products found matching your search.";

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Cards
            Constraint::Length(3), // Navigation
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    SearchBox::new(&app.search_input, app.search_focused).render(frame, chunks[1]);
    render_cards(frame, chunks[2], app);
    render_navigation(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    if app.show_detail {
        if let Some(product) = app.selected_product() {
            Card::new(product, true).render_detail(frame);
        }
    }

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let filter = if app.list.term().trim().is_empty() {
        "All products".to_string()
    } else {
        format!("Tag: \"{}\"", app.list.term().trim())
    };

    let title = format!(" cardlist │ {} │ {} total ", filter, app.list.total_len());

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the cards of the current page
fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.list.page();

    let items: Vec<ListItem> = if page.is_empty() {
        vec![
            ListItem::new(""),
            ListItem::new(Line::from(EMPTY_MESSAGE).alignment(Alignment::Center)),
        ]
    } else {
        page.into_iter()
            .enumerate()
            .map(|(i, product)| Card::new(product, i == app.selection.selected).list_item())
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(
                " Products (page {} of {}) ",
                app.list.page_number(),
                app.list.page_count()
            ))
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );

    frame.render_widget(list, area);
}

/// Render previous/next buttons around the range summary
fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(16),
        ])
        .split(area);

    Button::new("◀ Previous", !app.list.is_at_start()).render(frame, chunks[0]);

    let summary = Paragraph::new(app.list.summary().to_string())
        .alignment(Alignment::Center)
        .style(Theme::muted())
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(summary, chunks[1]);

    Button::new("Next ▶", !app.list.is_at_end()).render(frame, chunks[2]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = if let Some(msg) = &app.status_message {
        format!(" {}", msg)
    } else if app.search_focused {
        " Type to filter │ Enter/Esc done │ Ctrl+u clear ".to_string()
    } else {
        " [/] Search  [p/n] Page  [j/k] Select  [Enter] Details  [?] Help  [q] Quit ".to_string()
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Calculate centered popup area (60% width, 70% height)
    let popup_width = percent_of(area.width, 60).clamp(30.min(area.width), 60);
    let popup_height = percent_of(area.height, 70).min(17);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let text: Vec<Line> = help_content()
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

fn help_content() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/", "Search by tag"),
        ("Ctrl+u", "Clear search (while typing)"),
        ("n / → / l", "Next page"),
        ("p / ← / h", "Previous page"),
        ("g / G", "First / last page"),
        ("j / ↓", "Select next card"),
        ("k / ↑", "Select previous card"),
        ("Enter", "Show card details"),
        ("Esc", "Clear search / Quit"),
        ("q", "Quit"),
        ("?", "Show this help"),
    ]
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::pagination::Direction as PageDirection;
    use crate::core::product::Product;

    fn app(count: u64) -> App {
        let products = (1..=count)
            .map(|i| {
                let colour = if i <= 3 { "red" } else { "blue" };
                Product::new(i)
                    .with_title(format!("Item {:02}", i))
                    .with_tags([colour])
            })
            .collect();
        App::new(Catalog::new(products))
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        draw_sized(app, 100, 50)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_first_page_renders_ten_cards_and_summary() {
        let app = app(25);
        let text = screen_text(&draw(&app));
        assert!(text.contains("Item 01"));
        assert!(text.contains("Item 10"));
        assert!(!text.contains("Item 11"));
        assert!(text.contains("Showing 1 - 10 of 25 products"));
        assert!(text.contains("page 1 of 3"));
    }

    #[test]
    fn test_last_page_renders_remaining_cards() {
        let mut app = app(25);
        app.paginate(PageDirection::Next);
        app.paginate(PageDirection::Next);
        let text = screen_text(&draw(&app));
        assert!(text.contains("Item 21"));
        assert!(text.contains("Item 25"));
        assert!(!text.contains("Item 20"));
        assert!(text.contains("Showing 21 - 25 of 25 products"));
    }

    #[test]
    fn test_empty_page_message() {
        let mut app = app(5);
        app.list.filter("green");
        let text = screen_text(&draw(&app));
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_disabled_buttons_are_dimmed() {
        let mut app = app(25);
        app.list.filter("red");
        let terminal = draw(&app);
        let buffer = terminal.backend().buffer();

        // Button labels sit on the middle row of the navigation bar
        let nav_y: u16 = 50 - 2 - 2;
        let prev_x = (0u16..16)
            .find(|&x| buffer[(x, nav_y)].symbol() == "P")
            .expect("previous label");
        let next_x = (84u16..100)
            .find(|&x| buffer[(x, nav_y)].symbol() == "N")
            .expect("next label");

        assert_eq!(buffer[(prev_x, nav_y)].fg, Theme::MUTED);
        assert_eq!(buffer[(next_x, nav_y)].fg, Theme::MUTED);
        assert!(screen_text(&terminal).contains("Showing 1 - 3 of 3 products"));
    }

    #[test]
    fn test_enabled_next_button() {
        let app = app(25);
        let terminal = draw(&app);
        let buffer = terminal.backend().buffer();
        let nav_y: u16 = 50 - 2 - 2;
        let next_x = (84u16..100)
            .find(|&x| buffer[(x, nav_y)].symbol() == "N")
            .expect("next label");
        assert_eq!(buffer[(next_x, nav_y)].fg, Theme::PRIMARY);
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app(1);
        app.show_help = true;
        let text = screen_text(&draw(&app));
        assert!(text.contains("Search by tag"));
    }

    #[test]
    fn test_overlays_on_wide_terminal() {
        let mut app = app(3);
        app.show_help = true;
        app.show_detail = true;
        let text = screen_text(&draw_sized(&app, 1000, 40));
        assert!(text.contains("Search by tag"));
        assert!(text.contains("Showing 1 - 3 of 3 products"));
    }
}
