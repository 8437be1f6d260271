//! Side effects returned by the event handler for the plugin runtime to execute.
//!
//! State transitions themselves are synchronous and pure with respect to the host.
//! Anything that needs Zellij (waking up later, hiding the pane) comes back from
//! [`handle_event`](super::handle_event) as an [`Action`] and is carried out by the
//! shim in `main.rs`.
//!
//! # Example
//!
//! ```rust
//! use worklink::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(matches!(actions.as_slice(), [Action::SetTimeout { .. }]));
//! # Ok::<(), worklink::WorkLinkError>(())
//! ```

use super::timer::TimerId;
use std::time::Duration;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when Escape is pressed with no overlay open.
    CloseFocus,

    /// Requests a wake-up after `delay`.
    ///
    /// The runtime must answer with [`Event::TimerElapsed`](super::Event::TimerElapsed)
    /// carrying the same `timer`. Whether the transition still happens is decided by
    /// the scheduler when the firing arrives.
    SetTimeout {
        /// Handle of the scheduled transition.
        timer: TimerId,
        /// Time to wait before reporting back.
        delay: Duration,
    },
}
