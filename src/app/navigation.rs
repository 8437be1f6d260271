//! Navigation controller.
//!
//! [`Navigator`] holds the identifier of the displayed screen and is its only
//! mutator. Navigation is absolute; there is no back stack.

use crate::domain::ScreenId;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    pub to: ScreenId,
}

impl Transition {
    /// Whether the displayed screen actually changes.
    #[must_use]
    pub fn changes_screen(&self) -> bool {
        self.from != self.to
    }
}

/// Owner of the current screen identifier.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: ScreenId,
}

impl Navigator {
    #[must_use]
    pub const fn current(&self) -> ScreenId {
        self.current
    }

    /// Replaces the current screen.
    pub fn navigate(&mut self, target: ScreenId) -> Transition {
        let transition = Transition {
            from: self.current,
            to: target,
        };
        self.current = target;
        tracing::debug!(from = %transition.from, to = %transition.to, "navigated");
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_splash() {
        assert_eq!(Navigator::default().current(), ScreenId::Splash);
    }

    #[test]
    fn bogus_identifier_lands_on_splash() {
        let mut nav = Navigator::default();
        nav.navigate(ScreenId::Resources);
        let t = nav.navigate(ScreenId::resolve("bogus"));
        assert_eq!(t.from, ScreenId::Resources);
        assert_eq!(nav.current(), ScreenId::Splash);
        assert!(t.changes_screen());
    }

    #[test]
    fn same_screen_is_not_a_change() {
        let mut nav = Navigator::default();
        nav.navigate(ScreenId::Home);
        assert!(!nav.navigate(ScreenId::Home).changes_screen());
    }
}
