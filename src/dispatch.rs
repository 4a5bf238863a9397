//! Routes the active menu entry to the routine that renders its screen.
//!
//! Dispatch is total: every entry, and the absence of one, maps to a handler
//! that draws something.

use embedded_graphics::prelude::{Point, Size};

use crate::config::WRAP_MARGIN_PX;
use crate::menu::Entry;
use crate::ui::surface::{screen_width, Surface, TextSize};
use crate::ui::widgets::{
    centered_x, draw_decorative_line, draw_header, draw_selection_box, print_centered, wrap_text,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handler {
    /// Scan and browse nearby networks.
    Scan,
    /// Static placeholder screen.
    Inert,
}

pub fn handler_for(selected: Option<Entry>) -> Handler {
    match selected {
        Some(Entry::WifiScan) => Handler::Scan,
        Some(
            Entry::Deauth
            | Entry::EvilTwin
            | Entry::BeaconSpam
            | Entry::Sniffer
            | Entry::Settings
            | Entry::Info,
        )
        | None => Handler::Inert,
    }
}

const BACK_HINT: &str = "[BACK] return";
const TARGET_Y: i32 = 26;
const NOTE_Y: i32 = 14;
const LINE_GAP: i32 = 2;

fn draw_back_hint<S: Surface + ?Sized>(surface: &mut S) {
    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(20, 54));
    surface.print(BACK_HINT);
}

/// Last confirmed network, boxed when it fits and wrapped when it does not.
fn draw_target<S: Surface + ?Sized>(surface: &mut S, target: &str) {
    if target.is_empty() {
        print_centered(surface, "no target", 30, 0);
        print_centered(surface, "pick one in WiFi Scan", 40, 0);
        return;
    }

    let size = surface.measure_text(target, TextSize::Normal);
    let max_width = screen_width(surface) - WRAP_MARGIN_PX;

    if size.width as i32 <= max_width {
        let x = centered_x(surface, target, TextSize::Normal);
        draw_selection_box(
            surface,
            Point::new(x - 4, 30),
            Size::new(size.width + 8, size.height + 4),
        );
        surface.set_cursor(Point::new(x, 32));
        surface.print(target);
        return;
    }

    let line_height = size.height as i32 + LINE_GAP;
    let mut y = TARGET_Y;
    for line in wrap_text(surface, target, max_width) {
        print_centered(surface, &line, y, 0);
        y += line_height;
    }
}

/// Placeholder screen for features without an implementation.
///
/// `target` is the last confirmed network name, shown by entries that
/// operate on one.
pub fn draw_inactive<S: Surface + ?Sized>(surface: &mut S, entry: Option<Entry>, target: &str) {
    let title = entry.map_or("inactive", Entry::label);
    draw_header(surface, title, None);

    if entry.is_some_and(Entry::uses_target) {
        surface.set_cursor(Point::new(8, NOTE_Y));
        surface.print("inactive");
        draw_target(surface, target);
    } else {
        draw_decorative_line(surface);
        surface.set_text_size(TextSize::Large);
        surface.set_cursor(Point::new(8, 20));
        surface.print(title);
        surface.set_text_size(TextSize::Normal);
        surface.set_cursor(Point::new(8, 42));
        surface.print("inactive");
    }
    draw_back_hint(surface);
}
