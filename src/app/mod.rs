//! Application layer: root state, screens, and message handling.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain/filter layers.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer → Event → handle_event → AppState mutations → Actions → Zellij calls
//!                                           │
//!                                           └→ compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing
//! - [`state`]: Root state with navigation and compound transitions
//! - [`screens`]: Per-screen local state, mounted and torn down by navigation
//! - [`forms`]: Login and sign-up forms
//! - [`navigation`], [`session`], [`sidebar`], [`timer`], [`focus`]: the pieces
//!   `AppState` is built from
//! - [`modes`]: Input modes derived from focus and overlay
//!
//! # Example
//!
//! ```rust
//! use worklink::app::{handle_event, AppState, Event};
//! use worklink::domain::ScreenId;
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::NavigateTo("bogus".into()))?;
//! assert_eq!(state.current_screen(), ScreenId::Splash);
//! # Ok::<(), worklink::WorkLinkError>(())
//! ```

pub mod actions;
pub mod focus;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod navigation;
mod presenter;
pub mod screens;
pub mod session;
pub mod sidebar;
pub mod state;
pub mod timer;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use screens::{Intent, ScreenState};
pub use state::AppState;
pub use timer::{Scheduler, TimerId, SPLASH_DELAY};
