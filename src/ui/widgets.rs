//! Shared screen furniture: header bar, rules, navigation hints, corner
//! brackets, centred and wrapped text.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};
use heapless::{String, Vec};

use crate::config::{SSID_MAX_LEN, WRAP_MAX_LINES};
use crate::ui::surface::{screen_width, Surface, TextSize};

/// Length of each corner bracket arm.
const BRACKET_ARM: i32 = 5;

/// Header bar: `[TITLE` at the left, optional `<current/total>` at the right.
///
/// `counter` is 1-based and hidden when `total == 0`.
pub fn draw_header<S: Surface + ?Sized>(surface: &mut S, title: &str, counter: Option<(usize, usize)>) {
    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(0, 0));
    surface.print("[");
    surface.set_cursor(Point::new(7, 0));
    surface.print(title);

    if let Some((current, total)) = counter {
        if total > 0 {
            let mut label: String<16> = String::new();
            let _ = write!(label, "<{}/{}>", current, total);
            surface.set_cursor(Point::new(screen_width(surface) - 32, 0));
            surface.print(&label);
        }
    }
}

/// Double rule under the header with short accents at both ends.
pub fn draw_decorative_line<S: Surface + ?Sized>(surface: &mut S) {
    let w = screen_width(surface);
    let on = BinaryColor::On;
    surface.draw_line(Point::new(0, 11), Point::new(w, 11), on);
    surface.draw_line(Point::new(0, 13), Point::new(w, 13), on);
    surface.draw_line(Point::new(0, 10), Point::new(5, 10), on);
    surface.draw_line(Point::new(w - 5, 10), Point::new(w, 10), on);
    surface.draw_line(Point::new(0, 14), Point::new(5, 14), on);
    surface.draw_line(Point::new(w - 5, 14), Point::new(w, 14), on);
}

/// `<  •          •  >` along the bottom edge.
pub fn draw_navigation_dots<S: Surface + ?Sized>(surface: &mut S) {
    let w = screen_width(surface);
    let h = surface.size().height as i32;
    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(2, h - 8));
    surface.print("<");
    surface.set_cursor(Point::new(w - 8, h - 8));
    surface.print(">");
    surface.draw_circle(Point::new(15, h - 4), 1, true);
    surface.draw_circle(Point::new(w - 15, h - 4), 1, true);
}

/// L-shaped brackets on the four corners of the box, sides left open.
pub fn draw_selection_box<S: Surface + ?Sized>(surface: &mut S, top_left: Point, size: Size) {
    let (x, y) = (top_left.x, top_left.y);
    let (w, h) = (size.width as i32, size.height as i32);
    let on = BinaryColor::On;
    let a = BRACKET_ARM;

    surface.draw_line(Point::new(x, y), Point::new(x + a, y), on);
    surface.draw_line(Point::new(x, y), Point::new(x, y + a), on);
    surface.draw_line(Point::new(x + w - a, y), Point::new(x + w, y), on);
    surface.draw_line(Point::new(x + w, y), Point::new(x + w, y + a), on);
    surface.draw_line(Point::new(x, y + h - a), Point::new(x, y + h), on);
    surface.draw_line(Point::new(x, y + h), Point::new(x + a, y + h), on);
    surface.draw_line(Point::new(x + w, y + h - a), Point::new(x + w, y + h), on);
    surface.draw_line(Point::new(x + w - a, y + h), Point::new(x + w, y + h), on);
}

/// Left edge that centres `text` horizontally.
pub fn centered_x<S: Surface + ?Sized>(surface: &S, text: &str, size: TextSize) -> i32 {
    (screen_width(surface) - surface.measure_text(text, size).width as i32) / 2
}

/// Print `text` horizontally centred at row `y`, shifted by `x_offset`.
pub fn print_centered<S: Surface + ?Sized>(surface: &mut S, text: &str, y: i32, x_offset: i32) {
    let x = centered_x(surface, text, TextSize::Normal) + x_offset;
    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(x, y));
    surface.print(text);
}

/// Greedy per-character wrap of `text` into lines no wider than `max_width`.
///
/// Text beyond `WRAP_MAX_LINES` lines is dropped.
pub fn wrap_text<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    max_width: i32,
) -> Vec<String<SSID_MAX_LEN>, WRAP_MAX_LINES> {
    let mut lines: Vec<String<SSID_MAX_LEN>, WRAP_MAX_LINES> = Vec::new();
    let mut line: String<SSID_MAX_LEN> = String::new();

    for ch in text.chars() {
        let mut candidate = line.clone();
        let fits = candidate.push(ch).is_ok()
            && surface.measure_text(&candidate, TextSize::Normal).width as i32 <= max_width;

        if fits || line.is_empty() {
            line = candidate;
            continue;
        }

        if lines.push(core::mem::take(&mut line)).is_err() {
            return lines;
        }
        let _ = line.push(ch);
    }

    if !line.is_empty() {
        let _ = lines.push(line);
    }
    lines
}
