//! Keyboard Input Handling Module
//!
//! Translates key events into state changes on `App`. The dispatcher returns
//! true when the application should quit.

use crate::app::{App, AppState, InputMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const SCROLL_STEP: usize = 5;

pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.input_mode {
        InputMode::Search => {
            handle_search_keys(key, app);
            return false;
        }
        InputMode::HelpMenu => {
            app.input_mode = InputMode::Normal;
            return false;
        }
        InputMode::Normal => {}
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,

        KeyCode::Char('?') => {
            app.input_mode = InputMode::HelpMenu;
            false
        }

        KeyCode::Char('/') => {
            if !matches!(app.state, AppState::Unavailable { .. }) {
                app.input_mode = InputMode::Search;
            }
            false
        }

        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            if !clear_query(app) && app.can_go_back() {
                app.go_back();
            }
            false
        }

        _ => {
            match app.state {
                AppState::StartPage => handle_start_page_keys(key, app),
                AppState::Reference => handle_reference_keys(key, app),
                AppState::Unavailable { .. } => {}
            }
            false
        }
    }
}

/// Clears a non-empty query on the current screen. Returns true if there was one.
fn clear_query(app: &mut App) -> bool {
    match app.state {
        AppState::StartPage if !app.home.query.is_empty() => {
            app.home.clear_query();
            true
        }
        AppState::Reference => match app.page.as_mut() {
            Some(view) if !view.query.is_empty() => {
                view.clear_query();
                true
            }
            _ => false,
        },
        _ => false,
    }
}

fn handle_search_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            clear_query(app);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter | KeyCode::Tab => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => match app.state {
            AppState::StartPage => app.home.pop_query(),
            _ => {
                if let Some(view) = app.page.as_mut() {
                    view.pop_query();
                }
            }
        },
        KeyCode::Down => move_selection(app, true),
        KeyCode::Up => move_selection(app, false),
        KeyCode::Char(c) => match app.state {
            AppState::StartPage => app.home.push_query(c),
            _ => {
                if let Some(view) = app.page.as_mut() {
                    view.push_query(c);
                }
            }
        },
        _ => {}
    }
}

fn move_selection(app: &mut App, forward: bool) {
    match app.state {
        AppState::StartPage if forward => app.home.next_topic(),
        AppState::StartPage => app.home.previous_topic(),
        AppState::Reference => {
            if let Some(view) = app.page.as_mut() {
                if forward {
                    view.next_row();
                } else {
                    view.previous_row();
                }
            }
        }
        AppState::Unavailable { .. } => {}
    }
}

/// Maps `1`..`9` to a filter index
fn filter_digit(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| (1..=9).contains(d))
        .map(|d| d as usize - 1)
}

fn handle_start_page_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.home.next_topic(),
        KeyCode::Up | KeyCode::Char('k') => app.home.previous_topic(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_selected_topic(),
        KeyCode::Tab => app.home.cycle_filter(true),
        KeyCode::BackTab => app.home.cycle_filter(false),
        KeyCode::Char(c) => {
            if let Some(index) = filter_digit(c) {
                app.home.set_filter(index);
            }
        }
        _ => {}
    }
}

fn handle_reference_keys(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('c')) {
        app.copy_selected();
        return;
    }

    let Some(view) = app.page.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => view.next_row(),
        KeyCode::Up | KeyCode::Char('k') => view.previous_row(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some((section, expanded)) = view.toggle_selected_section() {
                log::debug!(
                    "Section {} {}",
                    section,
                    if expanded { "expanded" } else { "collapsed" }
                );
            }
        }
        KeyCode::Tab => view.cycle_filter(true),
        KeyCode::BackTab => view.cycle_filter(false),
        KeyCode::PageDown => {
            view.content_scroll_position = view.content_scroll_position.saturating_add(SCROLL_STEP);
        }
        KeyCode::PageUp => {
            view.content_scroll_position = view.content_scroll_position.saturating_sub(SCROLL_STEP);
        }
        KeyCode::Char(c) => {
            if let Some(index) = filter_digit(c) {
                view.set_filter(index);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::clipboard::tests::{denied_worker, next_outcome, recording_worker};
    use crate::handlers::clipboard::CopyOutcome;
    use crate::state::PageRow;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        let (worker, _store) = recording_worker();
        App::with_clipboard(Config::default(), worker)
    }

    fn open_express(app: &mut App) {
        assert!(app.open_page("express"));
    }

    #[test]
    fn q_quits_outside_search() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));

        press(&mut app, KeyCode::Char('/'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.home.query, "q");
    }

    #[test]
    fn searching_narrows_the_topic_list() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "mongo");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        let ids: Vec<_> = app.home.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["databases"]);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.home.query, "");
    }

    #[test]
    fn digits_and_tab_pick_filters() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.home.filter().map(|f| f.id), Some("backend"));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.home.filter().map(|f| f.id), Some("tools"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.home.filter().map(|f| f.id), Some("all"));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.home.filter().map(|f| f.id), Some("tools"));

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.home.filter().map(|f| f.id), Some("tools"));
    }

    #[test]
    fn enter_opens_a_page_and_escape_returns() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Reference);
        assert_eq!(app.page.as_ref().map(|v| v.page.id), Some("nextjs"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::StartPage);
        assert!(app.page.is_none());
    }

    #[test]
    fn space_folds_the_section_under_the_cursor() {
        let mut app = app();
        open_express(&mut app);

        let header = app
            .page
            .as_ref()
            .and_then(|view| {
                view.rows().iter().position(|row| {
                    matches!(row, PageRow::SectionHeader { section, .. } if section.key == "mongodb")
                })
            })
            .expect("mongodb header");
        if let Some(view) = app.page.as_mut() {
            view.selected = header;
        }

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.page.as_ref().map(|v| v.sections.is_expanded("mongodb")),
            Some(true)
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.page.as_ref().map(|v| v.sections.is_expanded("mongodb")),
            Some(false)
        );
    }

    #[test]
    fn y_copies_the_selected_snippet() {
        let mut app = app();
        open_express(&mut app);
        press(&mut app, KeyCode::Down);

        let (view, selected) = app
            .page
            .as_ref()
            .and_then(|v| v.selected_snippet().map(|s| (v.token, s.id.to_string())))
            .expect("snippet selected");

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(
            next_outcome(&app.clipboard),
            CopyOutcome::Copied {
                page: "express",
                view,
                id: selected
            }
        );
    }

    #[test]
    fn failed_copy_does_not_hold_up_the_next_key() {
        let mut app = App::with_clipboard(Config::default(), denied_worker());
        open_express(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('y'));

        let outcome = next_outcome(&app.clipboard);
        assert!(matches!(outcome, CopyOutcome::Failed { .. }));
        app.handle_copy_outcome(outcome, std::time::Instant::now());

        let before = app.page.as_ref().map(|v| v.selected);
        assert!(!press(&mut app, KeyCode::Down));
        let after = app.page.as_ref().map(|v| v.selected);
        assert_eq!(after, before.map(|i| i + 1));
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
