//! pocketnav: menu navigation and WiFi scan browsing for a four-button
//! handheld with a 128×64 monochrome OLED.
//!
//! Everything here is `no_std` and hardware-agnostic. Board code provides
//! the collaborators and hands them to a [`Navigator`]:
//!
//! - a [`Surface`] (the `ssd1306` feature ships one over I²C),
//! - a [`ScanProvider`] for the radio,
//! - [`ButtonLines`] (e.g. [`ButtonPins`] over `embedded-hal` input pins),
//! - a [`Clock`] (the `embassy` feature ships [`clock::EmbassyClock`]),
//! - an `embedded_hal::delay::DelayNs`.
//!
//! Usage: `cargo test` runs the host test suite.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod menu;
pub mod navigator;
pub mod ui;
pub mod wifi;

#[cfg(test)]
mod mock;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use clock::Clock;
pub use error::Error;
pub use menu::{Entry, MenuState};
pub use navigator::{Navigator, NavigatorContext};
pub use ui::buttons::{ButtonLines, ButtonPins, InputDebouncer};
pub use ui::display::{Flush, GraphicsSurface};
pub use ui::surface::{Surface, TextSize};
pub use ui::transition::SlideDirection;
pub use ui::Button;
pub use wifi::browser::{ListBrowser, SessionState};
pub use wifi::{NetworkInfo, ScanProvider};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - navigation properties across modules
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIRMATION_MS, SCROLL_SEPARATOR, SCROLL_STEP_MS};
    use crate::mock::{FakeScanner, RecordingSurface};
    use crate::wifi::view::name_needs_scroll;

    // ════════════════════════════════════════════════════════════════════════
    // Menu
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn down_wraps_back_for_any_menu_size() {
        for count in 1..=12 {
            let mut menu = MenuState::new(count);
            menu.index = count / 2;
            let start = menu.index;
            for _ in 0..count {
                menu.move_down();
                menu.settle();
            }
            assert_eq!(menu.index, start, "count {}", count);
        }
    }

    #[test]
    fn direction_rule_at_both_boundaries() {
        let mut menu = MenuState::root();
        // Last entry back to the first.
        menu.index = 0;
        menu.last_index = 6;
        assert_eq!(menu.slide_direction(), SlideDirection::Rightward);

        // First entry to the last.
        menu.index = 6;
        menu.last_index = 0;
        assert_eq!(menu.slide_direction(), SlideDirection::Rightward);

        menu.index = 3;
        menu.last_index = 4;
        assert_eq!(menu.slide_direction(), SlideDirection::Rightward);

        menu.index = 5;
        menu.last_index = 4;
        assert_eq!(menu.slide_direction(), SlideDirection::Leftward);
    }

    // ════════════════════════════════════════════════════════════════════════
    // List browser
    // ════════════════════════════════════════════════════════════════════════

    fn started(scanner: &mut FakeScanner) -> ListBrowser {
        let mut browser = ListBrowser::new();
        browser.begin(scanner, 0);
        browser
    }

    #[test]
    fn empty_result_set_is_inert() {
        let mut browser = started(&mut FakeScanner::empty());
        assert_eq!(browser.move_up(0), None);
        assert_eq!(browser.move_down(0), None);
        assert!(!browser.confirm("", false, 0));
        assert_eq!(browser.session(), SessionState::Browsing);
    }

    #[test]
    fn fitting_name_stays_put() {
        let surface = RecordingSurface::new();
        let mut scanner = FakeScanner::with(&[("HomeNet", -40, false)]);
        let mut browser = started(&mut scanner);

        let needs = name_needs_scroll(&surface, "HomeNet");
        assert!(!needs);
        browser.confirm("HomeNet", needs, 0);
        browser.tick(SCROLL_STEP_MS * 4);
        assert_eq!(browser.scroll_offset(), 0);
    }

    #[test]
    fn scroll_period_counts_name_and_separator() {
        let name = "An-Access-Point-With-A-Long-SSID";
        let mut scanner = FakeScanner::with(&[(name, -40, false)]);
        let mut browser = started(&mut scanner);
        browser.confirm(name, true, 0);
        assert_eq!(browser.scroll_period(), name.len() + SCROLL_SEPARATOR.len());
    }

    #[test]
    fn confirmation_ends_on_press_or_deadline() {
        let mut scanner = FakeScanner::with(&[("a", -40, false), ("b", -50, false)]);
        let mut browser = started(&mut scanner);

        browser.confirm("a", false, 100);
        assert!(browser.dismiss(101));

        browser.confirm("a", false, 200);
        browser.tick(200 + CONFIRMATION_MS - 1);
        assert!(browser.is_confirming());
        browser.tick(200 + CONFIRMATION_MS);
        assert!(!browser.is_confirming());
    }

    #[test]
    fn reset_is_identical_to_startup() {
        let mut scanner = FakeScanner::with(&[("a", -40, false), ("b", -50, false)]);
        let mut browser = started(&mut scanner);
        browser.move_down(0);
        browser.confirm("b", false, 0);

        browser.reset();
        assert_eq!(browser, ListBrowser::default());
        assert_eq!(browser.item_count(), 0);
        assert_eq!(browser.current(), 0);
        assert_eq!(browser.session(), SessionState::NotStarted);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Errors
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn errors_have_short_tags_and_messages() {
        assert_eq!(Error::Display.as_str(), "display");
        assert_eq!(Error::ScanFailed.as_str(), "scan");
        assert_eq!(format!("{}", Error::ScanFailed), "network scan failed");
    }
}
