//! Menu rendering.

use embedded_graphics::prelude::{Point, Size};

use crate::config::MENU_TITLE;
use crate::menu::MenuState;
use crate::ui::surface::{present, Surface, TextSize};
use crate::ui::widgets::{centered_x, draw_header, draw_navigation_dots, draw_selection_box};

/// Baseline row of the highlighted entry.
const ENTRY_Y: i32 = 32;
const BOX_PADDING: i32 = 4;

/// Entry label centred on the screen and shifted by `x_offset`.
///
/// The highlighted entry gets a selection box; the outgoing ghost does not.
pub fn draw_entry<S: Surface + ?Sized>(surface: &mut S, label: &str, x_offset: i32, boxed: bool) {
    let x = centered_x(surface, label, TextSize::Normal) + x_offset;

    if boxed {
        let size = surface.measure_text(label, TextSize::Normal);
        draw_selection_box(
            surface,
            Point::new(x - BOX_PADDING, ENTRY_Y - 2),
            Size::new(size.width + BOX_PADDING as u32 * 2, size.height + 4),
        );
    }

    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(x, ENTRY_Y));
    surface.print(label);
}

/// Header with the 1-based position counter, plus the navigation dots.
pub fn draw_chrome<S: Surface + ?Sized>(surface: &mut S, position: usize, total: usize) {
    draw_header(surface, MENU_TITLE, Some((position, total)));
    draw_navigation_dots(surface);
}

/// One static menu frame for `menu`.
pub fn draw_menu<S: Surface + ?Sized>(surface: &mut S, menu: &MenuState) {
    surface.clear();
    draw_chrome(surface, menu.index + 1, menu.entry_count());
    if let Some(entry) = menu.current() {
        draw_entry(surface, entry.label(), 0, true);
    }
    present(surface);
}
