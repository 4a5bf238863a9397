//! GPIO button input with a shared debounce timer.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP      - previous menu entry / previous network
//!   - DOWN    - next menu entry / next network
//!   - CONFIRM - enter the highlighted feature / select a network
//!   - BACK    - leave the active feature
//!
//! Lines are polled once per main-loop cycle. A press is reported only if
//! the line is active and at least `BUTTON_DEBOUNCE_MS` have passed since
//! the last press reported for *any* button, so rapid alternation between
//! two buttons is suppressed as well.

use embedded_hal::digital::InputPin;

use crate::clock::elapsed_ms;
use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::Button;

/// Raw button line levels.
pub trait ButtonLines {
    /// True while the button is held down.
    fn is_active(&mut self, button: Button) -> bool;
}

/// The four button inputs of the board.
pub struct ButtonPins<U, D, C, B> {
    up: U,
    down: D,
    confirm: C,
    back: B,
}

impl<U, D, C, B> ButtonPins<U, D, C, B>
where
    U: InputPin,
    D: InputPin,
    C: InputPin,
    B: InputPin,
{
    /// Pins must already be configured as inputs with pull-ups.
    pub fn new(up: U, down: D, confirm: C, back: B) -> Self {
        Self {
            up,
            down,
            confirm,
            back,
        }
    }
}

impl<U, D, C, B> ButtonLines for ButtonPins<U, D, C, B>
where
    U: InputPin,
    D: InputPin,
    C: InputPin,
    B: InputPin,
{
    fn is_active(&mut self, button: Button) -> bool {
        // Active-low. A failed read is indistinguishable from "not pressed".
        match button {
            Button::Up => self.up.is_low().unwrap_or(false),
            Button::Down => self.down.is_low().unwrap_or(false),
            Button::Confirm => self.confirm.is_low().unwrap_or(false),
            Button::Back => self.back.is_low().unwrap_or(false),
        }
    }
}

/// Debounce filter shared by all buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputDebouncer {
    last_press_ms: Option<u32>,
    window_ms: u32,
}

impl InputDebouncer {
    pub const fn new() -> Self {
        Self::with_window(BUTTON_DEBOUNCE_MS)
    }

    pub const fn with_window(window_ms: u32) -> Self {
        Self {
            last_press_ms: None,
            window_ms,
        }
    }

    /// Filter one raw sample. Returns `true` if this sample counts as a press.
    pub fn pressed(&mut self, line_active: bool, now_ms: u32) -> bool {
        if !line_active {
            return false;
        }

        if let Some(last) = self.last_press_ms {
            if elapsed_ms(last, now_ms) < self.window_ms {
                return false;
            }
        }

        self.last_press_ms = Some(now_ms);
        true
    }

    /// Read `button` from `lines` and filter it.
    pub fn poll<L: ButtonLines + ?Sized>(&mut self, lines: &mut L, button: Button, now_ms: u32) -> bool {
        let pressed = self.pressed(lines.is_active(button), now_ms);
        if pressed {
            trace!("button: {}", button.name());
        }
        pressed
    }
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::HeldButtons;

    #[test]
    fn first_press_is_reported_immediately() {
        let mut debouncer = InputDebouncer::new();
        assert!(debouncer.pressed(true, 0));
    }

    #[test]
    fn idle_line_never_reports() {
        let mut debouncer = InputDebouncer::new();
        assert!(!debouncer.pressed(false, 0));
        assert!(!debouncer.pressed(false, 10_000));
    }

    #[test]
    fn held_button_reports_once_per_window() {
        let mut debouncer = InputDebouncer::new();
        assert!(debouncer.pressed(true, 1_000));
        assert!(!debouncer.pressed(true, 1_010));
        assert!(!debouncer.pressed(true, 1_199));
        assert!(debouncer.pressed(true, 1_200));
    }

    #[test]
    fn each_button_is_read_from_its_own_line() {
        for button in Button::ALL {
            let mut debouncer = InputDebouncer::new();
            let mut lines = HeldButtons::default();
            lines.hold(button);
            for other in Button::ALL {
                assert_eq!(debouncer.poll(&mut lines, other, 0), other == button);
            }
        }
    }

    #[test]
    fn window_is_shared_between_buttons() {
        let mut debouncer = InputDebouncer::new();
        let mut lines = HeldButtons::default();

        lines.hold(Button::Up);
        assert!(debouncer.poll(&mut lines, Button::Up, 500));

        lines.release_all();
        lines.hold(Button::Down);
        assert!(!debouncer.poll(&mut lines, Button::Down, 550));
        assert!(debouncer.poll(&mut lines, Button::Down, 700));
    }

    #[test]
    fn window_survives_clock_wraparound() {
        let mut debouncer = InputDebouncer::new();
        assert!(debouncer.pressed(true, u32::MAX - 50));
        assert!(!debouncer.pressed(true, 100));
        assert!(debouncer.pressed(true, 150));
    }
}
