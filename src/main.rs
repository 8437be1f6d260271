//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the WorkLink library and Zellij: it maps keys and
//! timer ticks to library [`Event`]s, runs the resulting [`Action`]s against
//! the Zellij API, and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Start**: Dispatch `Event::Start`, which arms the splash timer
//! 4. **Update**: Translate events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library render function
//!
//! # Timers
//!
//! Zellij reports an elapsed timer only with its duration, not an identity.
//! Every requested timer is queued here and matched to `Event::Timer` in FIFO
//! order, which is exact because all timers the library requests share one
//! delay. Cancelled timers still fire; the library's scheduler ignores them.
//!
//! # Keybindings
//!
//! Global:
//! - `Tab` / `Down` / `Ctrl+n`: Next control (or sidebar entry)
//! - `Shift+Tab` / `Up` / `Ctrl+p`: Previous control
//! - `Enter`: Activate
//! - `Ctrl+b`: Toggle the sidebar on screens that have one
//! - `Esc`: Close the sidebar, otherwise hide the plugin
//!
//! On a focused text field printable keys are typed and `Backspace` deletes.
//! Elsewhere `j`/`k` move, `Space` activates and `q` closes or hides.

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use worklink::{handle_event, Action, Config, Event, InputMode, TimerId};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: worklink::AppState,

    /// Timers requested from Zellij that have not fired yet, oldest first.
    pending_timers: VecDeque<TimerId>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: worklink::initialize(&Config::default()),
            pending_timers: VecDeque::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        worklink::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = worklink::initialize(&config);
        tracing::debug!("app state initialized");

        subscribe(&[EventType::Key, EventType::Timer]);

        self.dispatch(&Event::Start);
        tracing::debug!(screen = %self.app.current_screen(), "plugin load complete");
    }

    /// Translates a Zellij event, delegates it, and reports whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => match self.pending_timers.pop_front() {
                Some(timer) => {
                    tracing::debug!(timer = timer.raw(), elapsed, "timer fired");
                    Event::TimerElapsed(timer)
                }
                None => {
                    tracing::warn!(elapsed, "timer fired with none pending");
                    return false;
                }
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        worklink::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let mode = self.app.input_mode();
        tracing::debug!(bare_key = ?key.bare_key, mode = ?mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('b') => Some(Event::ToggleSidebar),
                BareKey::Char('n') => Some(Event::FocusNext),
                BareKey::Char('p') => Some(Event::FocusPrev),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab | BareKey::Down => Event::FocusNext,
            BareKey::Up => Event::FocusPrev,
            BareKey::Enter => Event::Activate,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace if mode == InputMode::Editing => Event::Backspace,
            BareKey::Char(c) => return Self::map_char(mode, c),
            _ => return None,
        })
    }

    fn map_char(mode: InputMode, c: char) -> Option<Event> {
        match (mode, c) {
            (InputMode::Editing, c) => Some(Event::Char(c)),
            (InputMode::Normal | InputMode::Menu, 'j') => Some(Event::FocusNext),
            (InputMode::Normal | InputMode::Menu, 'k') => Some(Event::FocusPrev),
            (InputMode::Normal | InputMode::Menu, ' ') => Some(Event::Activate),
            (InputMode::Menu, 'q') => Some(Event::CloseSidebar),
            (InputMode::Normal | InputMode::Idle, 'q') => Some(Event::Escape),
            _ => None,
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::SetTimeout { timer, delay } => {
                tracing::debug!(timer = timer.raw(), delay = ?delay, "setting timeout");
                self.pending_timers.push_back(*timer);
                set_timeout(delay.as_secs_f64());
            }
        }
    }
}
