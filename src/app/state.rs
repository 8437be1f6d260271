//! Root application state.
//!
//! [`AppState`] owns everything the plugin knows: the navigator, the session
//! flag, the mounted screen's local state, pending timers and the theme. It is
//! the target of every message; screens never reach into each other and raise an
//! [`Intent`] instead when they need something done at the root.
//!
//! # Screen lifecycle
//!
//! Navigating to a different screen tears the current one down and mounts fresh
//! local state for the target. Navigating to the screen already shown keeps its
//! state. Mounting the splash screen schedules its transition to login; tearing
//! it down cancels that transition.
//!
//! # Compound transitions
//!
//! Login, sign-up and logout each update the session and navigate in one call,
//! so no observer ever sees one change without the other.
//!
//! # Example
//!
//! ```rust
//! use worklink::app::AppState;
//! use worklink::domain::ScreenId;
//!
//! let mut state = AppState::default();
//! state.navigate(ScreenId::Login);
//! state.login();
//! assert!(state.is_logged_in());
//! assert_eq!(state.current_screen(), ScreenId::Home);
//! ```

use super::modes::InputMode;
use super::navigation::Navigator;
use super::screens::{Intent, ScreenState};
use super::session::Session;
use super::timer::{Scheduler, TimerId};
use super::Action;
use crate::domain::{ProfileUpdate, ScreenId};
use crate::ui::theme::Theme;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    navigator: Navigator,
    session: Session,
    screen: ScreenState,
    scheduler: Scheduler,

    /// Colour theme used by the renderer.
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl AppState {
    /// Creates the state on the splash screen, logged out.
    ///
    /// The splash transition is not scheduled until [`AppState::start`] runs, so the
    /// host can subscribe to timer events first.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            navigator: Navigator::default(),
            session: Session::default(),
            screen: ScreenState::default(),
            scheduler: Scheduler::default(),
            theme,
        }
    }

    /// Arms the splash transition if the splash screen is showing.
    pub fn start(&mut self) -> Vec<Action> {
        match &mut self.screen {
            ScreenState::Splash(splash) => splash.arm(&mut self.scheduler).into_iter().collect(),
            _ => vec![],
        }
    }

    #[must_use]
    pub const fn current_screen(&self) -> ScreenId {
        self.navigator.current()
    }

    /// Local state of the mounted screen.
    #[must_use]
    pub const fn screen(&self) -> &ScreenState {
        &self.screen
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    #[must_use]
    pub const fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Input mode derived from the overlay and the focused control.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.screen.sidebar_open() {
            InputMode::Menu
        } else if self.screen.focus_position().0 == 0 {
            InputMode::Idle
        } else if self.screen.text_focused() {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }

    /// Displays `target`.
    ///
    /// Returns host actions needed by the mounted screen (the splash timer).
    pub fn navigate(&mut self, target: ScreenId) -> Vec<Action> {
        let transition = self.navigator.navigate(target);
        if !transition.changes_screen() {
            return vec![];
        }
        self.screen.tear_down(&mut self.scheduler);
        let (screen, actions) = ScreenState::mount(target, &mut self.scheduler);
        self.screen = screen;
        actions
    }

    /// Navigates by raw identifier. Unknown identifiers land on the splash screen.
    pub fn navigate_to(&mut self, raw: &str) -> Vec<Action> {
        self.navigate(ScreenId::resolve(raw))
    }

    /// Marks the session logged in and shows the dashboard.
    pub fn login(&mut self) -> Vec<Action> {
        self.session.login();
        self.navigate(ScreenId::Home)
    }

    /// Completes sign-up: logged in, on the dashboard.
    pub fn sign_up(&mut self) -> Vec<Action> {
        self.session.sign_up();
        self.navigate(ScreenId::Home)
    }

    /// Clears the session and returns to the login screen.
    pub fn logout(&mut self) -> Vec<Action> {
        self.session.logout();
        self.navigate(ScreenId::Login)
    }

    /// Handles a timer firing. `None` if the transition was cancelled meanwhile.
    pub fn timer_elapsed(&mut self, id: TimerId) -> Option<Vec<Action>> {
        let target = self.scheduler.fire(id)?;
        Some(self.navigate(target))
    }

    /// Replaces the search text of the listing on screen.
    pub fn set_query(&mut self, text: &str) -> bool {
        let current = self.current_screen();
        match &mut self.screen {
            ScreenState::FindJobs(jobs) => jobs.listing.set_query(text),
            ScreenState::Resources(resources) => resources.listing.set_query(text),
            _ => {
                tracing::debug!(screen = %current, "no listing to search");
                return false;
            }
        }
        true
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let ScreenState::FindJobs(jobs) = &mut self.screen else {
            return false;
        };
        jobs.listing.toggle_tag(tag);
        true
    }

    /// Selects a resource tab. An unknown id selects a tab with no records.
    pub fn select_category(&mut self, id: &str) -> bool {
        let ScreenState::Resources(resources) = &mut self.screen else {
            return false;
        };
        resources.listing.select_category(id);
        true
    }

    /// Resets query and selection of the listing on screen in one step.
    pub fn clear_filters(&mut self) -> bool {
        match &mut self.screen {
            ScreenState::FindJobs(jobs) => jobs.listing.clear_filters(),
            ScreenState::Resources(resources) => resources.listing.clear_filters(),
            _ => return false,
        }
        true
    }

    pub fn update_profile_field(&mut self, update: ProfileUpdate) -> bool {
        let ScreenState::Profile(profile) = &mut self.screen else {
            return false;
        };
        profile.update(update);
        true
    }

    pub fn save_profile(&mut self) -> bool {
        let ScreenState::Profile(profile) = &mut self.screen else {
            return false;
        };
        profile.save();
        true
    }

    pub fn open_sidebar(&mut self) -> bool {
        let current = self.current_screen();
        self.screen.sidebar_mut().map(|s| s.open(current)).is_some()
    }

    pub fn close_sidebar(&mut self) -> bool {
        self.screen.sidebar_mut().map(|s| s.close()).is_some()
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        let current = self.current_screen();
        self.screen.sidebar_mut().map(|s| s.toggle(current)).is_some()
    }

    /// Navigates to `target`, then closes the sidebar of whatever screen is showing.
    pub fn select_and_close(&mut self, target: ScreenId) -> Vec<Action> {
        let actions = self.navigate(target);
        self.close_sidebar();
        actions
    }

    /// Moves the sidebar cursor while the overlay is open, screen focus otherwise.
    pub fn focus_next(&mut self) {
        if self.screen.sidebar_open() {
            if let Some(sidebar) = self.screen.sidebar_mut() {
                sidebar.cursor_down();
            }
        } else {
            self.screen.focus_next();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.screen.sidebar_open() {
            if let Some(sidebar) = self.screen.sidebar_mut() {
                sidebar.cursor_up();
            }
        } else {
            self.screen.focus_prev();
        }
    }

    /// Types into the focused field. Ignored while the sidebar is open.
    pub fn input_char(&mut self, c: char) -> bool {
        !self.screen.sidebar_open() && self.screen.input_char(c)
    }

    pub fn backspace(&mut self) -> bool {
        !self.screen.sidebar_open() && self.screen.backspace()
    }

    /// Activates the sidebar entry under the cursor, or the focused control.
    pub fn activate(&mut self) -> Vec<Action> {
        if let Some(sidebar) = self.screen.sidebar().filter(|s| s.is_open()) {
            let target = sidebar.highlighted();
            return self.select_and_close(target);
        }
        match self.screen.activate() {
            Some(intent) => self.apply_intent(intent),
            None => vec![],
        }
    }

    fn apply_intent(&mut self, intent: Intent) -> Vec<Action> {
        tracing::debug!(intent = ?intent, "applying screen intent");
        match intent {
            Intent::Navigate(target) => self.navigate(target),
            Intent::Login => self.login(),
            Intent::SignUp => self.sign_up(),
            Intent::Logout => self.logout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_screen_navigation_keeps_local_state() {
        let mut state = AppState::default();
        state.navigate(ScreenId::FindJobs);
        state.set_query("data");
        state.navigate(ScreenId::FindJobs);
        let ScreenState::FindJobs(jobs) = state.screen() else {
            panic!("expected jobs screen");
        };
        assert_eq!(jobs.listing.query(), "data");
    }

    #[test]
    fn leaving_a_listing_resets_its_query() {
        let mut state = AppState::default();
        state.navigate(ScreenId::FindJobs);
        state.set_query("data");
        state.toggle_tag("Youth");
        state.navigate(ScreenId::Home);
        state.navigate(ScreenId::FindJobs);
        let ScreenState::FindJobs(jobs) = state.screen() else {
            panic!("expected jobs screen");
        };
        assert!(!jobs.listing.is_filtered());
    }

    #[test]
    fn listing_operations_ignored_elsewhere() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Home);
        assert!(!state.set_query("x"));
        assert!(!state.toggle_tag("PWDs"));
        assert!(!state.clear_filters());
        assert!(!state.select_category("training"));
    }

    #[test]
    fn unknown_category_empties_the_listing() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Resources);
        assert!(state.select_category("training"));
        assert!(state.select_category("astrology"));
        let ScreenState::Resources(resources) = state.screen() else {
            panic!("expected resources screen");
        };
        assert_eq!(resources.listing.selection().tab_id(), "astrology");
        assert!(resources.listing.has_no_matches());
    }

    #[test]
    fn sidebar_selection_navigates_and_closes() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Home);
        assert!(state.open_sidebar());
        assert_eq!(state.input_mode(), InputMode::Menu);
        state.focus_next();
        state.activate();
        assert_eq!(state.current_screen(), ScreenId::FindJobs);
        assert!(!state.screen().sidebar_open());
    }

    #[test]
    fn sidebar_selection_of_current_screen_still_closes() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Profile);
        state.open_sidebar();
        state.select_and_close(ScreenId::Profile);
        assert_eq!(state.current_screen(), ScreenId::Profile);
        assert!(!state.screen().sidebar_open());
    }

    #[test]
    fn no_sidebar_on_auth_screens() {
        let mut state = AppState::default();
        state.navigate(ScreenId::Login);
        assert!(!state.toggle_sidebar());
        assert_eq!(state.input_mode(), InputMode::Editing);
    }

    #[test]
    fn splash_is_idle() {
        assert_eq!(AppState::default().input_mode(), InputMode::Idle);
    }
}
