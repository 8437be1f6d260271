//! Event handling and state transition logic.
//!
//! Every change to [`AppState`] arrives as an [`Event`]. [`handle_event`] applies it
//! and reports whether the UI should re-render along with any [`Action`]s the
//! plugin runtime has to carry out.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `TimerElapsed`
//! - **Navigation**: `Navigate`, `NavigateTo`, sidebar events
//! - **Session**: `Login`, `SignUp`, `Logout`
//! - **Listings**: `SetQuery`, `ToggleTag`, `SelectCategory`, `ClearFilters`
//! - **Profile**: `UpdateProfile`, `SaveProfile`
//! - **Keyboard**: `FocusNext`, `FocusPrev`, `Activate`, `Char`, `Backspace`, `Escape`
//!
//! # Example
//!
//! ```rust
//! use worklink::app::{handle_event, AppState, Event};
//! use worklink::domain::ScreenId;
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::Navigate(ScreenId::FindJobs))?;
//! let (should_render, _) = handle_event(&mut state, &Event::SetQuery("data entry".into()))?;
//! assert!(should_render);
//! # Ok::<(), worklink::WorkLinkError>(())
//! ```

use super::timer::TimerId;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{ProfileUpdate, ScreenId};

/// Messages dispatched to the root state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Plugin loaded; arms the splash transition.
    Start,
    /// A timer requested through [`Action::SetTimeout`] fired.
    TimerElapsed(TimerId),

    /// Shows a screen.
    Navigate(ScreenId),
    /// Shows a screen by raw identifier, falling back to the splash screen.
    NavigateTo(String),

    /// Login success: session flag set, dashboard shown.
    Login,
    /// Sign-up completion: session flag set, dashboard shown.
    SignUp,
    /// Sign out: session flag cleared, login shown.
    Logout,

    /// Replaces the search text of the listing on screen.
    SetQuery(String),
    /// Toggles a job tag filter.
    ToggleTag(String),
    /// Selects a resource tab by id.
    SelectCategory(String),
    /// Resets query and selection of the listing on screen.
    ClearFilters,

    /// Applies one field update to the profile draft.
    UpdateProfile(ProfileUpdate),
    /// Acknowledges the profile draft locally.
    SaveProfile,

    OpenSidebar,
    CloseSidebar,
    ToggleSidebar,
    /// Navigates to a sidebar entry and closes the overlay.
    SelectSidebarItem(ScreenId),

    /// Moves focus (or the sidebar cursor) forward.
    FocusNext,
    /// Moves focus (or the sidebar cursor) backward.
    FocusPrev,
    /// Activates the focused control or the highlighted sidebar entry.
    Activate,
    /// Types a character into the focused text field.
    Char(char),
    /// Deletes the last character of the focused text field.
    Backspace,
    /// Closes the sidebar, or hides the plugin when no overlay is open.
    Escape,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed by the plugin runtime in order.
///
/// # Errors
///
/// No event currently fails. The shim logs any error and skips the render.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => Ok((true, state.start())),
        Event::TimerElapsed(id) => Ok(state
            .timer_elapsed(*id)
            .map_or((false, vec![]), |actions| (true, actions))),
        Event::Navigate(target) => Ok((true, state.navigate(*target))),
        Event::NavigateTo(raw) => Ok((true, state.navigate_to(raw))),
        Event::Login => Ok((true, state.login())),
        Event::SignUp => Ok((true, state.sign_up())),
        Event::Logout => Ok((true, state.logout())),
        Event::SetQuery(text) => Ok((state.set_query(text), vec![])),
        Event::ToggleTag(tag) => Ok((state.toggle_tag(tag), vec![])),
        Event::SelectCategory(id) => Ok((state.select_category(id), vec![])),
        Event::ClearFilters => Ok((state.clear_filters(), vec![])),
        Event::UpdateProfile(update) => Ok((state.update_profile_field(update.clone()), vec![])),
        Event::SaveProfile => Ok((state.save_profile(), vec![])),
        Event::OpenSidebar => Ok((state.open_sidebar(), vec![])),
        Event::CloseSidebar => Ok((state.close_sidebar(), vec![])),
        Event::ToggleSidebar => Ok((state.toggle_sidebar(), vec![])),
        Event::SelectSidebarItem(target) => Ok((true, state.select_and_close(*target))),
        Event::FocusNext => {
            state.focus_next();
            Ok((true, vec![]))
        }
        Event::FocusPrev => {
            state.focus_prev();
            Ok((true, vec![]))
        }
        Event::Activate => Ok((true, state.activate())),
        Event::Char(c) => Ok((state.input_char(*c), vec![])),
        Event::Backspace => Ok((state.backspace(), vec![])),
        Event::Escape => {
            if state.screen().sidebar_open() {
                state.close_sidebar();
                Ok((true, vec![]))
            } else {
                tracing::debug!("hiding plugin");
                Ok((false, vec![Action::CloseFocus]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputMode;

    #[test]
    fn escape_closes_sidebar_before_hiding() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Navigate(ScreenId::Home)).unwrap();
        handle_event(&mut state, &Event::ToggleSidebar).unwrap();
        assert_eq!(state.input_mode(), InputMode::Menu);

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert!(actions.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn typing_is_ignored_while_menu_open() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Navigate(ScreenId::FindJobs)).unwrap();
        handle_event(&mut state, &Event::OpenSidebar).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
    }

    #[test]
    fn unknown_category_renders_empty_state() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Navigate(ScreenId::Resources)).unwrap();
        let (render, actions) =
            handle_event(&mut state, &Event::SelectCategory("bogus".into())).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        let vm = state.compute_viewmodel(40, 100);
        assert!(vm
            .lines
            .iter()
            .any(|line| matches!(line, crate::ui::BodyLine::Empty(_))));
    }

    #[test]
    fn stale_timer_does_not_render() {
        let mut state = AppState::default();
        let (_, actions) = handle_event(&mut state, &Event::Start).unwrap();
        let Some(Action::SetTimeout { timer, .. }) = actions.first().cloned() else {
            panic!("expected a timer");
        };
        handle_event(&mut state, &Event::Navigate(ScreenId::Login)).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::TimerElapsed(timer)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }
}
