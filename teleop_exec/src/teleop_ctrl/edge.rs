//! Button edge detection

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Turns a level-triggered button into press events.
///
/// The latch is set on the cycle a press is reported and cleared on any cycle the button reads
/// released, so holding a button produces exactly one press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RisingEdge {
    held: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl RisingEdge {
    /// Feed the button's current level, returning true if this cycle is a new press.
    pub fn update(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.held = false;
            return false;
        }

        if self.held {
            false
        } else {
            self.held = true;
            true
        }
    }

    /// True if the button has been held since the last reported press.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_press_per_hold() {
        let mut edge = RisingEdge::default();

        let levels = [false, true, true, true, false, true, false, false, true];
        let events: Vec<bool> = levels.iter().map(|l| edge.update(*l)).collect();

        assert_eq!(
            events,
            vec![false, true, false, false, false, true, false, false, true]
        );
        assert!(edge.is_held());
    }

    #[test]
    fn test_release_clears_latch() {
        let mut edge = RisingEdge::default();

        assert!(edge.update(true));
        assert!(edge.is_held());
        assert!(!edge.update(false));
        assert!(!edge.is_held());

        // Releasing an unlatched button is harmless
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }
}
