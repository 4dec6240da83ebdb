//! Application state management for the ang pao counter.
//!
//! This module contains the session state behind the terminal user
//! interface: the counter engine, the selected button, the theme and the
//! mode that decides how key presses are interpreted.

use crate::domain::CounterEngine;

/// Buttons are laid out in a grid this many columns wide.
pub const GRID_COLUMNS: usize = 2;

pub const DEFAULT_EXPORT_FILENAME: &str = "angpao.csv";

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Tapping mode - keys add, undo and reset
    Normal,
    /// Help screen is displayed
    Help,
    /// CSV export dialog is open
    ExportCsv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Session state for one counting session.
///
/// # Examples
///
/// ```
/// use angpao::application::App;
///
/// let mut app = App::default();
/// app.add_selected();
/// assert_eq!(app.engine.total(), 100);
/// ```
#[derive(Debug)]
pub struct App {
    /// Counts, history and derived totals
    pub engine: CounterEngine,
    /// Index of the highlighted denomination button
    pub selected: usize,
    /// Current application mode
    pub mode: AppMode,
    pub theme: Theme,
    /// Prefix used when displaying amounts
    pub currency_symbol: String,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Input buffer for filename entry
    pub filename_input: String,
    /// Cursor position within the filename buffer, in characters
    pub cursor_position: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new(CounterEngine::default(), "$", false)
    }
}

impl App {
    pub fn new(engine: CounterEngine, currency_symbol: impl Into<String>, dark: bool) -> Self {
        Self {
            engine,
            selected: 0,
            mode: AppMode::Normal,
            theme: if dark { Theme::Dark } else { Theme::Light },
            currency_symbol: currency_symbol.into(),
            help_scroll: 0,
            status_message: None,
            filename_input: String::new(),
            cursor_position: 0,
        }
    }

    /// Adds one packet of the highlighted denomination.
    pub fn add_selected(&mut self) {
        self.add_at(self.selected);
    }

    /// Adds one packet of the denomination at `index` and highlights it.
    pub fn add_at(&mut self, index: usize) {
        if self.engine.add_at(index).is_some() {
            self.selected = index;
        }
    }

    pub fn undo(&mut self) {
        if self.engine.undo().is_none() {
            self.status_message = Some("Nothing to undo".to_string());
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.status_message = Some("Tally reset".to_string());
        log::info!("Tally reset by user");
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn move_left(&mut self) {
        if self.selected % GRID_COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected % GRID_COLUMNS < GRID_COLUMNS - 1
            && self.selected + 1 < self.engine.denominations().len()
        {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + GRID_COLUMNS < self.engine.denominations().len() {
            self.selected += GRID_COLUMNS;
        }
    }

    /// Switches to CSV export mode to prompt for a filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = DEFAULT_EXPORT_FILENAME.to_string();
        self.cursor_position = self.filename_input.chars().count();
        self.status_message = None;
    }

    /// Gets the filename to use for CSV export.
    ///
    /// Returns the filename input if not empty, otherwise the default filename.
    pub fn get_csv_export_filename(&self) -> String {
        if self.filename_input.is_empty() {
            DEFAULT_EXPORT_FILENAME.to_string()
        } else {
            self.filename_input.clone()
        }
    }

    fn cursor_byte_index(&self) -> usize {
        self.filename_input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.filename_input.len(), |(i, _)| i)
    }

    pub fn insert_at_cursor(&mut self, c: char) {
        let index = self.cursor_byte_index();
        self.filename_input.insert(index, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.cursor_byte_index();
            self.filename_input.remove(index);
        }
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor_position < self.filename_input.chars().count() {
            let index = self.cursor_byte_index();
            self.filename_input.remove(index);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.filename_input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Cancels filename input and returns to normal mode.
    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Processes the result of a CSV export and returns to normal mode.
    pub fn set_csv_export_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                log::info!("Exported tally to {}", filename);
                self.status_message = Some(format!("Exported to {}", filename));
            }
            Err(error) => {
                log::warn!("Export failed: {}", error);
                self.status_message = Some(format!("Export failed: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    pub fn set_copy_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                log::info!("Copied summary to clipboard");
                self.status_message = Some("Copied summary to clipboard".to_string());
            }
            Err(error) => {
                log::warn!("Copy failed: {}", error);
                self.status_message = Some(format!("Copy failed: {}", error));
            }
        }
    }
}
