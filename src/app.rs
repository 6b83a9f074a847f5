use std::time::Instant;

use ratatui::Frame;

use crate::catalog;
use crate::config::Config;
use crate::handlers::clipboard::{ClipboardWorker, CopyOutcome, CopyRequest};
use crate::state::{HomeView, PageView};
use crate::ui::{components, reference, start_page};

/// Application State Enumeration
/// Each variant is one screen. Reference pages keep their own view state in
/// `App::page`; the variant only says which screen is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    StartPage,
    Reference,
    /// A topic announced on the start page with no reference page behind it
    Unavailable { topic: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    HelpMenu,
}

/// Main Application State Container
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub page_history: Vec<AppState>,
    pub input_mode: InputMode,
    pub home: HomeView,
    /// View of the open reference page, dropped when the page is left
    pub page: Option<PageView>,
    pub config: Config,
    pub clipboard: ClipboardWorker,
    views_opened: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_clipboard(config, ClipboardWorker::system())
    }

    pub fn with_clipboard(config: Config, clipboard: ClipboardWorker) -> Self {
        let start_page = config.start_page.clone();
        let mut app = Self {
            state: AppState::StartPage,
            page_history: Vec::new(),
            input_mode: InputMode::Normal,
            home: HomeView::default(),
            page: None,
            config,
            clipboard,
            views_opened: 0,
        };

        if let Some(id) = start_page {
            if !app.open_page(&id) {
                log::warn!("Configured start page {} does not exist", id);
            }
        }

        app
    }

    pub fn navigate_to(&mut self, new_state: AppState) {
        if self.state != new_state {
            self.page_history.push(self.state.clone());
            self.state = new_state;
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn go_back(&mut self) {
        if let Some(previous_state) = self.page_history.pop() {
            if self.state == AppState::Reference && previous_state != AppState::Reference {
                if let Some(view) = self.page.take() {
                    log::info!("Closed page {}", view.page.id);
                }
            }
            self.state = previous_state;
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.page_history.is_empty()
    }

    /// Opens a reference page with fresh view state. Returns false for unknown ids.
    pub fn open_page(&mut self, id: &str) -> bool {
        let Some(page) = catalog::page(id) else {
            return false;
        };

        self.views_opened += 1;
        log::info!("Opened page {}", page.id);
        self.page = Some(PageView::new(page, self.views_opened));
        self.navigate_to(AppState::Reference);
        true
    }

    /// Opens the topic under the cursor on the start page
    pub fn open_selected_topic(&mut self) {
        let Some(topic) = self.home.selected_topic() else {
            return;
        };

        match topic.page {
            Some(page_id) if self.open_page(page_id) => {}
            _ => {
                log::debug!("Topic {} has no page yet", topic.id);
                self.navigate_to(AppState::Unavailable { topic: topic.title });
            }
        }
    }

    /// Hands the selected snippet's body to the clipboard worker. The outcome
    /// arrives later through `tick`.
    pub fn copy_selected(&mut self) {
        let Some(view) = self.page.as_ref() else {
            return;
        };
        let Some(snippet) = view.selected_snippet() else {
            return;
        };

        log::debug!("Copy requested for {}/{}", view.page.id, snippet.id);
        self.clipboard.copy(CopyRequest {
            page: view.page.id,
            view: view.token,
            id: snippet.id.to_string(),
            text: snippet.body.to_string(),
        });
    }

    /// A failed copy is only logged: the user sees no confirmation and keeps
    /// working. Outcomes for a view that has since closed are dropped.
    pub fn handle_copy_outcome(&mut self, outcome: CopyOutcome, now: Instant) {
        match outcome {
            CopyOutcome::Copied { page, view, id } => match self.page.as_mut() {
                Some(open) if open.token == view => {
                    log::info!("Copied {}/{} to clipboard", page, id);
                    open.copied.mark(id, now);
                }
                _ => log::debug!("Copy of {}/{} finished after its view closed", page, id),
            },
            CopyOutcome::Failed { page, id, error, .. } => {
                log::warn!("Failed to copy {}/{}: {}", page, id, error);
            }
        }
    }

    /// Applies finished clipboard writes and expires the copy indicator
    pub fn tick(&mut self, now: Instant) {
        for outcome in self.clipboard.drain() {
            self.handle_copy_outcome(outcome, now);
        }
        if let Some(view) = self.page.as_mut() {
            view.copied.tick(now);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.state {
            AppState::StartPage => start_page::render(frame, self),
            AppState::Reference => match &self.page {
                Some(view) => reference::render(frame, self, view),
                None => start_page::render(frame, self),
            },
            AppState::Unavailable { topic } => {
                components::render_wip_dialog(frame, frame.area(), topic, self)
            }
        }

        if self.input_mode == InputMode::HelpMenu {
            components::render_help_overlay(frame, frame.area(), self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::clipboard::tests::{denied_worker, next_outcome, recording_worker};
    use crate::state::COPY_INDICATOR_TTL;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn express_app(worker: ClipboardWorker) -> App {
        let config = Config {
            start_page: Some("express".to_string()),
            ..Config::default()
        };
        App::with_clipboard(config, worker)
    }

    fn select_snippet(app: &mut App, id: &str) {
        let view = app.page.as_mut().expect("page open");
        let index = view
            .rows()
            .iter()
            .position(|row| row.snippet().map(|s| s.id) == Some(id))
            .expect("snippet listed");
        view.selected = index;
    }

    fn copied(app: &App, now: Instant) -> Option<String> {
        app.page
            .as_ref()
            .and_then(|view| view.copied.current(now).map(str::to_string))
    }

    #[test]
    fn copy_success_shows_indicator_for_two_seconds() {
        let (worker, store) = recording_worker();
        let mut app = express_app(worker);
        select_snippet(&mut app, "basic-setup");
        app.copy_selected();

        let start = Instant::now();
        let outcome = next_outcome(&app.clipboard);
        app.handle_copy_outcome(outcome, start);

        assert_eq!(copied(&app, start).as_deref(), Some("basic-setup"));
        assert_eq!(
            copied(&app, start + Duration::from_millis(1999)).as_deref(),
            Some("basic-setup")
        );

        app.tick(start + COPY_INDICATOR_TTL);
        assert_eq!(copied(&app, start + COPY_INDICATOR_TTL), None);

        let body = catalog::page("express")
            .and_then(|p| p.snippet("basic-setup"))
            .map(|s| s.body.to_string());
        assert_eq!(store.lock().expect("lock").first().cloned(), body);
    }

    #[test]
    fn copy_failure_leaves_indicator_unset() {
        let mut app = express_app(denied_worker());
        select_snippet(&mut app, "basic-setup");
        app.copy_selected();

        let now = Instant::now();
        let outcome = next_outcome(&app.clipboard);
        app.handle_copy_outcome(outcome, now);

        assert_eq!(copied(&app, now), None);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.state, AppState::Reference);
    }

    #[test]
    fn outcome_for_a_closed_view_is_ignored() {
        let (worker, _store) = recording_worker();
        let mut app = express_app(worker);
        let old_view = app.page.as_ref().map(|v| v.token).expect("page open");
        app.go_back();
        assert!(app.page.is_none());

        let late = || CopyOutcome::Copied {
            page: "express",
            view: old_view,
            id: "basic-setup".to_string(),
        };
        let now = Instant::now();
        app.handle_copy_outcome(late(), now);
        assert!(app.page.is_none());

        // Reopening the same page starts a fresh view
        assert!(app.open_page("express"));
        app.handle_copy_outcome(late(), now);
        assert_eq!(copied(&app, now), None);

        assert!(app.open_page("nextjs"));
        app.handle_copy_outcome(late(), now);
        assert_eq!(copied(&app, now), None);
    }

    #[test]
    fn leaving_a_page_discards_its_view_state() {
        let (worker, _store) = recording_worker();
        let mut app = express_app(worker);
        assert_eq!(app.state, AppState::Reference);

        if let Some(view) = app.page.as_mut() {
            view.push_query('m');
        }
        app.go_back();
        assert_eq!(app.state, AppState::StartPage);
        assert!(!app.can_go_back());

        assert!(app.open_page("express"));
        assert_eq!(app.page.as_ref().map(|v| v.query.as_str()), Some(""));
    }

    #[test]
    fn topics_without_a_page_show_the_unavailable_screen() {
        let (worker, _store) = recording_worker();
        let mut app = App::with_clipboard(Config::default(), worker);
        let git = app
            .home
            .visible()
            .iter()
            .position(|t| t.id == "git")
            .expect("git topic");
        app.home.selected = git;

        app.open_selected_topic();
        assert_eq!(
            app.state,
            AppState::Unavailable {
                topic: "Git & GitHub Commands"
            }
        );
        assert!(app.page.is_none());

        app.go_back();
        assert_eq!(app.state, AppState::StartPage);
    }

    #[test]
    fn unknown_start_page_falls_back_to_topic_index() {
        let (worker, _store) = recording_worker();
        let config = Config {
            start_page: Some("cobol".to_string()),
            ..Config::default()
        };
        let app = App::with_clipboard(config, worker);
        assert_eq!(app.state, AppState::StartPage);
        assert!(app.page.is_none());
    }
}
