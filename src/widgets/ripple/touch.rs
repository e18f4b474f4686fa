use std::time::Duration;

use crate::widgets::{Rect, TouchEvent};

/// A gesture recognised from raw pointer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Press(TouchEvent),
    LongPress(TouchEvent),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TouchState {
    Idle,
    /// Pointer is down and no gesture has fired yet
    Armed { down: TouchEvent, held: Duration },
    /// Long press already fired; the release is swallowed
    LongPressed,
}

/// Press / long-press recogniser wrapped by the ripple widget.
///
/// Held time is advanced by the host, like every other clock in this crate.
#[derive(Debug, Clone)]
pub struct TouchTarget {
    state: TouchState,
    delay_long_press: Duration,
    disabled: bool,
}

impl TouchTarget {
    pub fn new(delay_long_press: Duration, disabled: bool) -> Self {
        Self {
            state: TouchState::Idle,
            delay_long_press,
            disabled,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn pointer_down(&mut self, touch: TouchEvent) {
        if self.disabled {
            return;
        }
        self.state = TouchState::Armed {
            down: touch,
            held: Duration::ZERO,
        };
    }

    /// Release the pointer. Fires a press if it lands inside `bounds` before
    /// the long-press delay ran out. Without bounds every release counts.
    pub fn pointer_up(&mut self, touch: TouchEvent, bounds: Option<Rect>) -> Option<Gesture> {
        let state = std::mem::replace(&mut self.state, TouchState::Idle);
        let inside = bounds.map_or(true, |rect| rect.contains(touch.x, touch.y));
        match state {
            TouchState::Armed { .. } if inside => Some(Gesture::Press(touch)),
            _ => None,
        }
    }

    /// Abandon the current gesture without firing anything
    pub fn pointer_leave(&mut self) {
        self.state = TouchState::Idle;
    }

    /// Advance held time. Fires a long press at the down location once the
    /// pointer has been held for the configured delay.
    pub fn advance(&mut self, dt: Duration) -> Option<Gesture> {
        let TouchState::Armed { down, held } = self.state else {
            return None;
        };
        let held = held.saturating_add(dt);
        if held >= self.delay_long_press {
            self.state = TouchState::LongPressed;
            return Some(Gesture::LongPress(down));
        }
        self.state = TouchState::Armed { down, held };
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(x, y).unwrap()
    }

    fn bounds() -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 100.0, 50.0))
    }

    fn target() -> TouchTarget {
        TouchTarget::new(Duration::from_millis(500), false)
    }

    #[test]
    fn test_tap_is_press() {
        let mut t = target();
        t.pointer_down(touch(10.0, 10.0));
        assert_eq!(t.advance(Duration::from_millis(100)), None);
        assert_eq!(
            t.pointer_up(touch(12.0, 11.0), bounds()),
            Some(Gesture::Press(touch(12.0, 11.0)))
        );
        // Released, so holding time no longer matters
        assert_eq!(t.advance(Duration::from_secs(1)), None);
    }

    #[test]
    fn test_hold_is_long_press_and_swallows_release() {
        let mut t = target();
        t.pointer_down(touch(10.0, 20.0));
        assert_eq!(t.advance(Duration::from_millis(300)), None);
        assert_eq!(
            t.advance(Duration::from_millis(200)),
            Some(Gesture::LongPress(touch(10.0, 20.0)))
        );
        assert_eq!(t.advance(Duration::from_millis(500)), None);
        assert_eq!(t.pointer_up(touch(10.0, 20.0), bounds()), None);
    }

    #[test]
    fn test_release_outside_is_ignored() {
        let mut t = target();
        t.pointer_down(touch(10.0, 10.0));
        assert_eq!(t.pointer_up(touch(150.0, 10.0), bounds()), None);
    }

    #[test]
    fn test_leave_cancels() {
        let mut t = target();
        t.pointer_down(touch(10.0, 10.0));
        t.pointer_leave();
        assert_eq!(t.advance(Duration::from_secs(1)), None);
        assert_eq!(t.pointer_up(touch(10.0, 10.0), bounds()), None);
    }

    #[test]
    fn test_up_without_down_is_ignored() {
        let mut t = target();
        assert_eq!(t.pointer_up(touch(10.0, 10.0), bounds()), None);
    }

    #[test]
    fn test_unmeasured_bounds_accept_release() {
        let mut t = target();
        t.pointer_down(touch(10.0, 10.0));
        assert_eq!(
            t.pointer_up(touch(10.0, 10.0), None),
            Some(Gesture::Press(touch(10.0, 10.0)))
        );
    }

    #[test]
    fn test_disabled_recognises_nothing() {
        let mut t = TouchTarget::new(Duration::from_millis(500), true);
        t.pointer_down(touch(10.0, 10.0));
        assert_eq!(t.advance(Duration::from_secs(1)), None);
        assert_eq!(t.pointer_up(touch(10.0, 10.0), bounds()), None);
    }
}
