//! Keyboard focus over a screen's interactive elements.

/// Cyclic focus position. The control count is supplied per call because some
/// screens grow or shrink their control list (the sign-up wizard between steps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
}

impl FocusRing {
    /// Focus position clamped to `len` controls.
    #[must_use]
    pub fn index(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    /// Moves forward, wrapping to the first control.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index(len) + 1) % len;
    }

    /// Moves backward, wrapping to the last control.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.index(len);
        self.index = if current == 0 { len - 1 } else { current - 1 };
    }

    /// Moves focus to an explicit position.
    pub fn set(&mut self, index: usize) {
        self.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut focus = FocusRing::default();
        focus.prev(3);
        assert_eq!(focus.index(3), 2);
        focus.next(3);
        assert_eq!(focus.index(3), 0);
    }

    #[test]
    fn clamps_when_controls_shrink() {
        let mut focus = FocusRing::default();
        focus.set(6);
        assert_eq!(focus.index(4), 3);
        focus.next(4);
        assert_eq!(focus.index(4), 0);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut focus = FocusRing::default();
        focus.next(0);
        focus.prev(0);
        assert_eq!(focus.index(0), 0);
    }
}
