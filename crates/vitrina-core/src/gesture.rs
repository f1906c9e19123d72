//! Swipe gesture classifier.
//!
//! Converts a horizontal touch displacement into a discrete
//! previous/next command. A fixed deadzone keeps taps and finger jitter
//! from navigating.

/// Default deadzone in input coordinate units (device pixels on a touch
/// surface). Displacement must strictly exceed this to count as a swipe.
pub const DEFAULT_DEADZONE: i32 = 50;

/// A classified swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved rightward — navigate to the previous product.
    Prev,
    /// Finger moved leftward — navigate to the next product.
    Next,
}

/// Tracks one in-flight horizontal gesture.
///
/// Record the start coordinate on touch-start, overwrite the end
/// coordinate on every touch-move, classify on touch-end. If either
/// coordinate is missing (a tap that never moved, or an end without a
/// start) the gesture is discarded.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    deadzone: i32,
    start: Option<i32>,
    end: Option<i32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_deadzone(DEFAULT_DEADZONE)
    }

    /// Tracker with a custom deadzone, in whatever coordinate units the
    /// caller feeds it. The TUI uses terminal cells and a proportionally
    /// smaller deadzone.
    pub fn with_deadzone(deadzone: i32) -> Self {
        Self {
            deadzone,
            start: None,
            end: None,
        }
    }

    /// Begin a gesture. Clears any end coordinate from a previous one.
    pub fn touch_start(&mut self, x: i32) {
        self.start = Some(x);
        self.end = None;
    }

    /// Update the gesture's current position; the last value wins.
    pub fn touch_move(&mut self, x: i32) {
        self.end = Some(x);
    }

    /// Finish the gesture and classify it. Resets the tracker either way.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let start = self.start.take();
        let end = self.end.take();
        let distance = start? - end?;

        if distance > self.deadzone {
            Some(Swipe::Next)
        } else if distance < -self.deadzone {
            Some(Swipe::Prev)
        } else {
            None
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn classify(start: i32, end: i32) -> Option<Swipe> {
        let mut t = SwipeTracker::new();
        t.touch_start(start);
        t.touch_move(end);
        t.touch_end()
    }

    #[test]
    fn leftward_swipe_past_deadzone_is_next() {
        assert_eq!(classify(151, 100), Some(Swipe::Next));
    }

    #[test]
    fn rightward_swipe_past_deadzone_is_prev() {
        assert_eq!(classify(100, 151), Some(Swipe::Prev));
    }

    #[test]
    fn deadzone_boundary_is_exclusive() {
        // Exactly ±50 is still a tap, ±51 is a swipe.
        assert_eq!(classify(150, 100), None);
        assert_eq!(classify(100, 150), None);
        assert_eq!(classify(120, 100), None);
        assert_eq!(classify(151, 100), Some(Swipe::Next));
        assert_eq!(classify(100, 151), Some(Swipe::Prev));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut t = SwipeTracker::new();
        t.touch_move(400);
        assert_eq!(t.touch_end(), None);
    }

    #[test]
    fn tap_without_movement_is_ignored() {
        let mut t = SwipeTracker::new();
        t.touch_start(200);
        assert_eq!(t.touch_end(), None);
    }

    #[test]
    fn new_gesture_clears_stale_end_coordinate() {
        let mut t = SwipeTracker::new();
        t.touch_start(0);
        t.touch_move(500);
        // Finger lifted and re-placed without us seeing the end.
        t.touch_start(300);
        assert_eq!(t.touch_end(), None);
    }

    #[test]
    fn last_move_wins() {
        let mut t = SwipeTracker::new();
        t.touch_start(200);
        t.touch_move(0);
        t.touch_move(195);
        assert_eq!(t.touch_end(), None);
    }

    #[test]
    fn custom_deadzone_scales_the_threshold() {
        let mut t = SwipeTracker::with_deadzone(5);
        t.touch_start(10);
        t.touch_move(4);
        assert_eq!(t.touch_end(), Some(Swipe::Next));
    }
}
