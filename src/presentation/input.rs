use crate::application::{App, AppMode};
use crate::infrastructure::{ClipboardService, ReportExporter};
use crate::presentation::format::summary_text;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::ExportCsv => Self::handle_filename_input_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        app.status_message = None;

        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('z') {
                app.undo();
            }
            return;
        }

        match key {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                app.add_at(index);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.add_selected();
            }
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Left | KeyCode::Char('h') => app.move_left(),
            KeyCode::Right | KeyCode::Char('l') => app.move_right(),
            KeyCode::Char('u') | KeyCode::Backspace => {
                app.undo();
            }
            KeyCode::Char('r') => {
                app.reset();
            }
            KeyCode::Char('t') => {
                app.toggle_theme();
            }
            KeyCode::Char('e') => {
                app.start_csv_export();
            }
            KeyCode::Char('y') => {
                let text = summary_text(&app.engine, &app.currency_symbol);
                let result = ClipboardService::copy(&text).map_err(|e| e.to_string());
                app.set_copy_result(result);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_filename_input_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_csv_export_filename();
                let result = ReportExporter::export_csv(&app.engine, &filename)
                    .map_err(|e| e.to_string());
                app.set_csv_export_result(result);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => app.delete_before_cursor(),
            KeyCode::Delete => app.delete_at_cursor(),
            KeyCode::Left => app.cursor_left(),
            KeyCode::Right => app.cursor_right(),
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.chars().count();
            }
            KeyCode::Char(c) => app.insert_at_cursor(c),
            _ => {}
        }
    }
}
