//! Application state and core logic

use crate::config::TuiConfig;
use crate::handlers::{LoggingRouter, LoggingSubmission, Router, SubmissionHandler};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, FieldValue, FormNavigation, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Collaborator receiving valid form submissions
    submission: Box<dyn SubmissionHandler>,
    /// Collaborator receiving activated route paths
    router: Box<dyn Router>,
    /// Whether the app should quit
    quit: bool,
    /// Show keyboard hints in the status bar
    pub show_hints: bool,
}

impl App {
    /// Create a new App instance with the default logging collaborators
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_collaborators(
            config,
            Box::new(LoggingSubmission),
            Box::new(LoggingRouter),
        )
    }

    /// Create an App with explicit collaborators (used by tests)
    pub fn with_collaborators(
        config: &TuiConfig,
        submission: Box<dyn SubmissionHandler>,
        router: Box<dyn Router>,
    ) -> Self {
        let mut state = AppState::default();
        if let Some(view) = config
            .start_route
            .as_deref()
            .and_then(View::from_route)
        {
            state.set_view(view);
        }

        Self {
            state,
            submission,
            router,
            quit: false,
            show_hints: config.show_hints(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Each interaction starts with a clean status line
        self.state.status_message = None;

        if key.code == KeyCode::Esc {
            if self.state.current_view != View::Hero {
                self.state.set_view(View::Hero);
            }
            return;
        }

        match self.state.current_view {
            View::Hero => self.handle_hero_key(key),
            View::Fashion => self.handle_static_page_key(key),
            View::YoungFavourite => self.handle_favourite_key(key),
            View::CompanyDetails => self.handle_company_key(key),
            View::Navigation => self.handle_navigation_key(key),
        }
    }

    /// Report a route to the router collaborator, then resolve it locally.
    /// Unregistered routes leave the current view unchanged.
    fn open_route(&mut self, route: &str) {
        self.router.navigate(route);
        match View::from_route(route) {
            Some(view) => self.state.set_view(view),
            None => {
                self.state.status_message = Some(format!("No registered view for {route}"));
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                true
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(route) = self
                    .state
                    .sidebar
                    .items()
                    .get(index)
                    .map(|link| link.route)
                {
                    self.open_route(route);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_hero_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.hero_nav.select_prev();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.hero_nav.select_next();
            }
            KeyCode::Enter => {
                if let Some(route) = self.state.hero_nav.selected().map(|link| link.route) {
                    self.open_route(route);
                }
            }
            _ => {}
        }
    }

    fn handle_static_page_key(&mut self, key: KeyEvent) {
        self.handle_global_key(key);
    }

    fn handle_favourite_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(card) = self.state.favourites.select_prev() {
                    info!(card = card.id, "favourite card selected");
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(card) = self.state.favourites.select_next() {
                    info!(card = card.id, "favourite card selected");
                }
            }
            _ => {}
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(item) = self.state.nav_demo.select_next() {
                    info!(item = item.label, "navigation item clicked");
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(item) = self.state.nav_demo.select_prev() {
                    info!(item = item.label, "navigation item clicked");
                }
            }
            KeyCode::Enter => {
                if let Some(item) = self.state.nav_demo.selected() {
                    info!(item = item.label, "navigation item clicked");
                }
            }
            KeyCode::Char('a') | KeyCode::Char('b') => {
                let index = usize::from(key.code == KeyCode::Char('b'));
                if let Some(action) = self.state.demo_card.actions.get(index) {
                    info!(action = action.id, "card action clicked");
                    self.state.status_message = Some(format!("Card action: {}", action.label));
                }
            }
            _ => {}
        }
    }

    fn handle_company_key(&mut self, key: KeyEvent) {
        // Submit shortcut first so 's' still types into text fields
        if key.code == KeyCode::Char('s') && key.modifiers.contains(SUBMIT_MODIFIER) {
            self.submit_company_details();
            return;
        }

        let form = &mut self.state.company_form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Left => form.prev_option(),
            KeyCode::Right => form.next_option(),
            KeyCode::Char(' ') => {
                // Space flips booleans, types into everything else
                let on_bool =
                    matches!(form.active_leaf().map(|f| &f.value), Some(FieldValue::Bool(_)));
                if on_bool {
                    form.toggle_active();
                } else {
                    form.push_char(' ');
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c);
            }
            _ => {}
        }
    }

    /// Submit the company form; validation failure is a status-bar notice
    fn submit_company_details(&mut self) {
        match self.state.company_form.submit(self.submission.as_mut()) {
            Ok(()) => {
                self.state.status_message = Some("Company details submitted".to_string());
            }
            Err(err) => {
                self.state.status_message = Some(err.to_string());
            }
        }
    }
}
