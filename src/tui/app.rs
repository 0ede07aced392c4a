//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing::{info, warn};

use crate::core::catalog::Catalog;
use crate::core::pagination::{CardList, Direction};
use crate::core::product::Product;
use crate::error::{CardListError, Result};
use crate::tui::event::{is_interrupt_key, is_quit_key, page_direction, AppEvent, EventHandler};
use crate::tui::ui;

/// Default interval between tick events
const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Filtered, paginated product list
    pub list: CardList,
    /// Card selection within the visible page
    pub selection: ListState,
    /// Whether keystrokes go to the search box
    pub search_focused: bool,
    /// Text typed into the search box
    pub search_input: String,
    /// Whether the selected card is expanded
    pub show_detail: bool,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Interval between tick events
    pub tick_rate: Duration,
}

impl App {
    /// Create a new app over the given dataset
    pub fn new(catalog: Catalog) -> Self {
        let list = CardList::new(catalog);
        let selection = ListState::new(list.page().len());

        Self {
            running: true,
            list,
            selection,
            search_focused: false,
            search_input: String::new(),
            show_detail: false,
            show_help: false,
            status_message: None,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }

    /// Override the tick rate
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| CardListError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| CardListError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| CardListError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| CardListError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| CardListError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| CardListError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(self.tick_rate);
        info!(products = self.list.total_len(), "Starting TUI");

        let result = self.event_loop(&mut terminal, &mut events).await;
        let restored = Self::restore_terminal(&mut terminal);
        first_error(result, restored)
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| CardListError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                Some(AppEvent::Resize(_, _)) => {
                    // Terminal resize is handled automatically by ratatui
                }
                Some(AppEvent::Tick) => {}
                None => self.quit(),
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if self.show_detail {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_detail = false;
            }
            return;
        }

        // Search box takes all input while focused
        if self.search_focused {
            self.handle_search_key(key);
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        if let Some(direction) = page_direction(&key) {
            self.paginate(direction);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.search_input.is_empty() {
                    self.quit();
                } else {
                    self.search_input.clear();
                    self.apply_search();
                }
            }
            KeyCode::Char('/') => {
                self.search_focused = true;
                self.status_message = None;
            }
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.selection.previous(),
            KeyCode::Char('g') | KeyCode::Home => {
                if self.list.first_page() {
                    self.on_page_changed();
                }
            }
            KeyCode::Char('G') | KeyCode::End => {
                if self.list.last_page() {
                    self.on_page_changed();
                }
            }
            KeyCode::Enter => {
                if self.selected_product().is_some() {
                    self.show_detail = true;
                }
            }
            _ => {}
        }
    }

    /// Handle typing while the search box is focused
    ///
    /// Every change to the term refilters the list.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.search_focused = false;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !self.search_input.is_empty() {
                    self.search_input.clear();
                    self.apply_search();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_input.push(c);
                self.apply_search();
            }
            KeyCode::Backspace => {
                if self.search_input.pop().is_some() {
                    self.apply_search();
                }
            }
            _ => {}
        }
    }

    fn apply_search(&mut self) {
        self.list.filter(&self.search_input);
        self.on_page_changed();
    }

    /// Move one page, reporting when the move is refused
    pub fn paginate(&mut self, direction: Direction) {
        if self.list.paginate(direction) {
            self.on_page_changed();
        } else {
            self.status_message = Some(match direction {
                Direction::Next => "Already on the last page".to_string(),
                Direction::Previous => "Already on the first page".to_string(),
            });
        }
    }

    /// Reset per-page state after the visible page changed
    fn on_page_changed(&mut self) {
        self.selection = ListState::new(self.list.page().len());
        self.show_detail = false;
        self.status_message = None;
    }

    /// The card under the selection cursor, if the page is not empty
    pub fn selected_product(&self) -> Option<&Product> {
        self.list.page().get(self.selection.selected).copied()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Combine the event loop outcome with terminal restoration, reporting the
/// loop's error first
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            warn!(error = %restore_err, "Failed to restore terminal");
            Err(e)
        }
        (result, restored) => result.and(restored),
    }
}
