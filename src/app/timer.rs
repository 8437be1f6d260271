//! Cancellable scheduled screen transitions.
//!
//! Zellij timers cannot be revoked once requested, so cancellation lives here: the
//! host is told to wake us after a delay ([`Action::SetTimeout`](super::Action::SetTimeout))
//! and reports back with the [`TimerId`]. A firing for a timer that was cancelled in
//! the meantime resolves to nothing.

use crate::domain::ScreenId;
use std::time::Duration;

/// Delay before the splash screen advances to the login screen.
pub const SPLASH_DELAY: Duration = Duration::from_millis(1000);

/// Opaque handle of a scheduled transition. Never reused within a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A transition waiting for its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub id: TimerId,
    pub target: ScreenId,
    pub delay: Duration,
}

/// Registry of pending transitions.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<ScheduledTransition>,
}

impl Scheduler {
    /// Registers a transition to `target` after `delay`.
    pub fn schedule(&mut self, target: ScreenId, delay: Duration) -> ScheduledTransition {
        self.next_id += 1;
        let transition = ScheduledTransition {
            id: TimerId(self.next_id),
            target,
            delay,
        };
        tracing::debug!(timer = self.next_id, target = %target, delay_ms = delay.as_millis(), "transition scheduled");
        self.pending.push(transition.clone());
        transition
    }

    /// Cancels a pending transition. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        let cancelled = self.pending.len() != before;
        tracing::debug!(timer = id.0, cancelled, "transition cancelled");
        cancelled
    }

    /// Consumes a timer firing, returning the target if the transition is still pending.
    pub fn fire(&mut self, id: TimerId) -> Option<ScreenId> {
        let pos = self.pending.iter().position(|t| t.id == id);
        match pos {
            Some(pos) => Some(self.pending.remove(pos).target),
            None => {
                tracing::debug!(timer = id.0, "ignoring stale timer");
                None
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_resolves_once() {
        let mut scheduler = Scheduler::default();
        let t = scheduler.schedule(ScreenId::Login, SPLASH_DELAY);
        assert_eq!(scheduler.fire(t.id), Some(ScreenId::Login));
        assert_eq!(scheduler.fire(t.id), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::default();
        let t = scheduler.schedule(ScreenId::Login, SPLASH_DELAY);
        assert!(scheduler.cancel(t.id));
        assert!(!scheduler.cancel(t.id));
        assert_eq!(scheduler.fire(t.id), None);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut scheduler = Scheduler::default();
        let first = scheduler.schedule(ScreenId::Login, SPLASH_DELAY).id;
        scheduler.cancel(first);
        let second = scheduler.schedule(ScreenId::Login, SPLASH_DELAY).id;
        assert_ne!(first, second);
        assert!(scheduler.is_pending(second));
        assert!(!scheduler.is_pending(first));
    }

    /// Plays the plugin shim: executes `SetTimeout` against a virtual clock and
    /// reports `TimerElapsed` once a deadline passes.
    mod splash_runtime {
        use std::time::Duration;

        use crate::app::{handle_event, Action, AppState, Event, TimerId};
        use crate::domain::ScreenId;

        struct FakeRuntime {
            state: AppState,
            now: Duration,
            timers: Vec<(Duration, TimerId)>,
            hidden: bool,
        }

        impl FakeRuntime {
            fn start() -> Self {
                let mut runtime = Self {
                    state: AppState::default(),
                    now: Duration::ZERO,
                    timers: vec![],
                    hidden: false,
                };
                runtime.send(Event::Start);
                runtime
            }

            fn send(&mut self, event: Event) {
                let (_, actions) = handle_event(&mut self.state, &event).expect("event handled");
                for action in actions {
                    match action {
                        Action::SetTimeout { timer, delay } => self.timers.push((self.now + delay, timer)),
                        Action::CloseFocus => self.hidden = true,
                    }
                }
            }

            /// Moves the clock forward, firing due timers in deadline order.
            fn advance_to(&mut self, millis: u64) {
                let until = Duration::from_millis(millis);
                loop {
                    let next = self
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, (due, _))| *due <= until)
                        .min_by_key(|(_, (due, _))| *due)
                        .map(|(i, _)| i);
                    let Some(index) = next else { break };
                    let (due, timer) = self.timers.remove(index);
                    self.now = due;
                    self.send(Event::TimerElapsed(timer));
                }
                self.now = until;
            }

            fn screen(&self) -> ScreenId {
                self.state.current_screen()
            }
        }

        #[test]
        fn splash_hands_over_to_login_after_one_second() {
            let mut runtime = FakeRuntime::start();
            runtime.advance_to(999);
            assert_eq!(runtime.screen(), ScreenId::Splash);
            runtime.advance_to(1000);
            assert_eq!(runtime.screen(), ScreenId::Login);
            assert_eq!(runtime.state.scheduler().pending_count(), 0);
        }

        #[test]
        fn leaving_splash_early_cancels_the_transition() {
            let mut runtime = FakeRuntime::start();
            runtime.advance_to(500);
            runtime.send(Event::Navigate(ScreenId::SignUp));
            assert_eq!(runtime.state.scheduler().pending_count(), 0);

            runtime.advance_to(1000);
            assert_eq!(runtime.screen(), ScreenId::SignUp);
        }

        #[test]
        fn returning_to_splash_schedules_a_fresh_transition() {
            let mut runtime = FakeRuntime::start();
            runtime.advance_to(300);
            runtime.send(Event::Navigate(ScreenId::Home));
            runtime.advance_to(600);
            runtime.send(Event::NavigateTo("nowhere".into()));
            assert_eq!(runtime.screen(), ScreenId::Splash);

            // The first timer fires at 1000 ms but was cancelled.
            runtime.advance_to(1000);
            assert_eq!(runtime.screen(), ScreenId::Splash);

            runtime.advance_to(1600);
            assert_eq!(runtime.screen(), ScreenId::Login);
        }

        #[test]
        fn start_twice_does_not_double_schedule() {
            let mut runtime = FakeRuntime::start();
            runtime.send(Event::Start);
            assert_eq!(runtime.timers.len(), 1);
            assert_eq!(runtime.state.scheduler().pending_count(), 1);
        }

        #[test]
        fn splash_ignores_keys_except_escape() {
            let mut runtime = FakeRuntime::start();
            runtime.send(Event::Char('x'));
            runtime.send(Event::Activate);
            assert_eq!(runtime.screen(), ScreenId::Splash);
            runtime.send(Event::Escape);
            assert!(runtime.hidden);
            runtime.advance_to(1000);
            assert_eq!(runtime.screen(), ScreenId::Login);
        }
    }
}
