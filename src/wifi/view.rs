//! Scan result screens: network detail, empty list, confirmation overlay.

use core::fmt::Write;

use embedded_graphics::prelude::{Point, Size};
use heapless::String;

use crate::config::{SCROLL_MARGIN_PX, SCROLL_ORIGIN_X, SCROLL_SEPARATOR, SSID_MAX_LEN};
use crate::ui::surface::{screen_width, Bitmap, Surface, TextSize};
use crate::ui::widgets::{draw_header, draw_navigation_dots, print_centered};
use crate::wifi::browser::ListBrowser;
use crate::wifi::NetworkInfo;

/// 8×8 closed padlock.
const LOCK_ICON: [u8; 8] = [
    0b0011_1100,
    0b0100_0010,
    0b0100_0010,
    0b1111_1111,
    0b1110_0111,
    0b1110_0111,
    0b1111_1111,
    0b0000_0000,
];

/// 8×8 padlock with the shackle swung open.
const OPEN_ICON: [u8; 8] = [
    0b0011_1100,
    0b0100_0010,
    0b0000_0010,
    0b1111_1111,
    0b1110_0111,
    0b1110_0111,
    0b1111_1111,
    0b0000_0000,
];

/// Name + separator + name, the longest line the scroller prints.
type ScrollLine = String<{ SSID_MAX_LEN * 2 + SCROLL_SEPARATOR.len() }>;

fn draw_signal_bars<S: Surface + ?Sized>(surface: &mut S, left: i32, bottom: i32, bars: u8) {
    for i in 0..4u8 {
        let height = 2 + 2 * i as i32;
        surface.draw_rect(
            Point::new(left + i as i32 * 5, bottom - height),
            Size::new(3, height as u32),
            i < bars,
        );
    }
}

/// Detail view of one network, shifted by `x_offset`.
pub fn draw_network<S: Surface + ?Sized>(surface: &mut S, info: &NetworkInfo<'_>, x_offset: i32) {
    let x = x_offset + 2;
    surface.set_text_size(TextSize::Normal);

    surface.set_cursor(Point::new(x, 18));
    surface.print("Name:");
    surface.set_cursor(Point::new(x, 28));
    surface.print(info.name);

    let mut signal: String<24> = String::new();
    let _ = write!(signal, "Signal: {} dBm", info.rssi);
    surface.set_cursor(Point::new(x, 40));
    surface.print(&signal);
    draw_signal_bars(surface, x + 102, 48, info.signal_bars());

    surface.set_cursor(Point::new(x, 50));
    if info.open {
        surface.print("Auth: open");
        surface.draw_bitmap(Point::new(x + 84, 50), &Bitmap::new(&OPEN_ICON, 8));
    } else {
        surface.print("Auth: secured");
        surface.draw_bitmap(Point::new(x + 84, 50), &Bitmap::new(&LOCK_ICON, 8));
    }
}

/// Scan list header with the 1-based position counter, plus navigation dots.
pub fn draw_chrome<S: Surface + ?Sized>(surface: &mut S, position: usize, total: usize) {
    draw_header(surface, "WiFi", Some((position, total)));
    draw_navigation_dots(surface);
}

/// Placeholder for a scan that found nothing.
pub fn draw_empty<S: Surface + ?Sized>(surface: &mut S) {
    draw_header(surface, "No WiFi", None);
    surface.set_cursor(Point::new(20, 28));
    surface.print("no networks...");
    surface.set_cursor(Point::new(48, 42));
    surface.print("(>_<)");
}

/// A name wider than this does not fit the confirmation overlay and scrolls.
pub fn name_needs_scroll<S: Surface + ?Sized>(surface: &S, name: &str) -> bool {
    surface.measure_text(name, TextSize::Normal).width as i32 > screen_width(surface) - SCROLL_MARGIN_PX
}

/// "SELECTED" banner with the confirmed name, scrolled if it does not fit.
pub fn draw_confirmation<S: Surface + ?Sized>(surface: &mut S, browser: &ListBrowser) {
    let name = browser.confirmed();
    print_centered(surface, "SELECTED", 20, 0);

    if !browser.is_scrolling() {
        print_centered(surface, name, 42, 0);
        return;
    }

    let char_width = surface.measure_text(" ", TextSize::Normal).width as i32;
    let mut line = ScrollLine::new();
    let _ = write!(line, "{}{}{}", name, SCROLL_SEPARATOR, name);

    let x = SCROLL_ORIGIN_X - browser.scroll_offset() as i32 * char_width;
    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(x, 42));
    surface.print(&line);
}
