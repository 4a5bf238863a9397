//! User interface subsystem - OLED display + physical buttons.
//!
//! Everything the navigator draws goes through the [`surface::Surface`]
//! trait; everything it reads goes through [`buttons::ButtonLines`].
//!
//! ## Components
//!
//! - **Surface**: drawing primitives + text measurement, backed by
//!   embedded-graphics (SSD1306 128×64 OLED via I²C on hardware)
//! - **Buttons**: 4 tactile switches with a shared debounce timer
//!   (UP, DOWN, CONFIRM, BACK)
//! - **Transition**: horizontal slide between two visuals
//! - **Widgets / effects**: header, selection box, decorative animations

pub mod buttons;
pub mod display;
pub mod effects;
pub mod input_logic;
pub mod surface;
pub mod transition;
pub mod widgets;

/// Physical buttons, active-low with pull-ups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Confirm,
    Back,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Up, Button::Down, Button::Confirm, Button::Back];

    pub const fn name(self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Confirm => "confirm",
            Button::Back => "back",
        }
    }
}
