//! Decorative full-screen animations: the submenu "enter" burst and the
//! scan progress screen.
//!
//! Both block until finished. Trigonometry is replaced by small integer
//! tables so the module stays float-free.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};
use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::config::{
    ENTER_BLANK_MS, ENTER_EFFECT_FRAMES, ENTER_EFFECT_FRAME_MS, ENTER_FLASH_MS, SCAN_DONE_MS,
    SCAN_PROGRESS_FRAMES, SCAN_PROGRESS_FRAME_MS,
};
use crate::ui::surface::{present, screen_width, Surface, TextSize};
use crate::ui::widgets::{draw_decorative_line, draw_header, draw_selection_box};

/// cos/sin × 1000 at 45° steps, starting at 0° and turning clockwise on screen.
const BURST_DIRECTIONS: [(i32, i32); 8] = [
    (1000, 0),
    (707, 707),
    (0, 1000),
    (-707, 707),
    (-1000, 0),
    (-707, -707),
    (0, -1000),
    (707, -707),
];

/// `|sin(0.6 k)| * 8`, truncated.
const JUMP_HEIGHTS: [i32; 19] = [0, 4, 7, 7, 5, 1, 3, 6, 7, 6, 2, 2, 6, 7, 6, 3, 1, 5, 7];

const CORNER_ARM: i32 = 6;

fn center<S: Surface + ?Sized>(surface: &S) -> (i32, i32) {
    let size = surface.size();
    (size.width as i32 / 2, size.height as i32 / 2)
}

fn inside<S: Surface + ?Sized>(surface: &S, p: Point) -> bool {
    let size = surface.size();
    p.x >= 0 && p.y >= 0 && p.x < size.width as i32 && p.y < size.height as i32
}

fn draw_corners<S: Surface + ?Sized>(surface: &mut S, dist: i32) {
    let w = screen_width(surface);
    let h = surface.size().height as i32;
    let a = CORNER_ARM;
    let on = BinaryColor::On;

    // (corner, horizontal arm sign, vertical arm sign)
    let corners = [
        (Point::new(dist, dist), 1, 1),
        (Point::new(w - dist, dist), -1, 1),
        (Point::new(dist, h - dist), 1, -1),
        (Point::new(w - dist, h - dist), -1, -1),
    ];
    for (p, sx, sy) in corners {
        surface.draw_line(p, Point::new(p.x + sx * a, p.y), on);
        surface.draw_line(p, Point::new(p.x, p.y + sy * a), on);
    }
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, frame: i32) {
    let (cx, cy) = center(surface);
    let dist = frame * 6;

    for (dx, dy) in BURST_DIRECTIONS {
        let head = Point::new(cx + dx * dist / 1000, cy + dy * dist / 1000);
        if !inside(surface, head) {
            continue;
        }
        surface.draw_circle(head, 2, true);

        if frame > 3 {
            let trail = Point::new(cx + dx * (dist - 12) / 1000, cy + dy * (dist - 12) / 1000);
            if inside(surface, trail) {
                surface.draw_line(trail, trail, BinaryColor::On);
            }
        }
    }
}

/// Burst shown when a feature is entered: ripples, corners flying outward and
/// eight particles, then a white flash and one black frame.
///
/// Returns the number of committed frames.
pub fn enter_effect<S, D>(surface: &mut S, delay: &mut D) -> usize
where
    S: Surface + ?Sized,
    D: DelayNs + ?Sized,
{
    let (cx, cy) = center(surface);
    let w = screen_width(surface);
    let mut frames = 0;

    for frame in 0..ENTER_EFFECT_FRAMES {
        surface.clear();

        let ripple = frame * 12;
        if ripple < w {
            surface.draw_circle(Point::new(cx, cy), ripple as u32, false);
            if frame > 2 {
                surface.draw_circle(Point::new(cx, cy), (ripple - 8) as u32, false);
            }
        }

        draw_corners(surface, frame * 8);
        draw_particles(surface, frame);

        present(surface);
        frames += 1;
        delay.delay_ms(ENTER_EFFECT_FRAME_MS);
    }

    // Flash.
    surface.clear();
    let size = surface.size();
    surface.draw_rect(Point::zero(), size, true);
    present(surface);
    delay.delay_ms(ENTER_FLASH_MS);

    surface.clear();
    present(surface);
    delay.delay_ms(ENTER_BLANK_MS);

    frames + 2
}

/// Progress screen shown while a scan is being started, followed by a short
/// "done" screen. Returns the number of committed frames.
pub fn scan_progress<S, D>(surface: &mut S, delay: &mut D) -> usize
where
    S: Surface + ?Sized,
    D: DelayNs + ?Sized,
{
    let w = screen_width(surface);
    let mut frames = 0;

    for frame in 0..SCAN_PROGRESS_FRAMES {
        surface.clear();

        draw_header(surface, "SCANNING", None);
        let mut percent: String<8> = String::new();
        let _ = write!(percent, "{}%", frame * 100 / SCAN_PROGRESS_FRAMES);
        surface.set_cursor(Point::new(w - 30, 0));
        surface.print(&percent);

        draw_decorative_line(surface);

        for i in 0..3 {
            let jump = JUMP_HEIGHTS[(frame + i * 2) as usize % JUMP_HEIGHTS.len()];
            surface.draw_circle(Point::new(52 + i * 12, 30 - jump), 3, true);
        }

        let bar = frame * 106 / SCAN_PROGRESS_FRAMES;
        surface.draw_rect(Point::new(10, 48), Size::new(108, 10), false);
        draw_selection_box(surface, Point::new(10, 48), Size::new(108, 10));
        if bar > 0 {
            surface.draw_rect(Point::new(11, 49), Size::new(bar as u32, 8), true);
        }

        present(surface);
        frames += 1;
        delay.delay_ms(SCAN_PROGRESS_FRAME_MS);
    }

    surface.clear();
    draw_header(surface, "DONE", None);
    draw_decorative_line(surface);
    surface.set_text_size(TextSize::Normal);
    surface.set_cursor(Point::new(38, 28));
    surface.print("Finished!");
    surface.set_cursor(Point::new(42, 42));
    surface.print("(^_^)");
    draw_selection_box(surface, Point::new(35, 40), Size::new(52, 12));
    present(surface);
    delay.delay_ms(SCAN_DONE_MS);

    frames + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{CountingDelay, ManualClock, RecordingSurface};

    #[test]
    fn enter_effect_ends_on_blank_frame() {
        let clock = ManualClock::default();
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::new(clock.clone());

        let frames = enter_effect(&mut surface, &mut delay);

        assert_eq!(frames, 14);
        assert_eq!(surface.frame_count(), 14);
        assert!(surface.pending.is_empty());
        assert_eq!(surface.filled_rects, [(Point::zero(), Size::new(128, 64))]);
        assert_eq!(clock.now(), 12 * 40 + 50 + 30);
    }

    #[test]
    fn burst_particles_stay_on_screen() {
        let mut surface = RecordingSurface::new();
        // 66 px out from (64, 32): every direction leaves the screen.
        draw_particles(&mut surface, 11);
        assert_eq!(surface.circles, 0);

        draw_particles(&mut surface, 1);
        assert_eq!(surface.circles, 8);
    }

    #[test]
    fn progress_counts_up_and_finishes() {
        let clock = ManualClock::default();
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::new(clock.clone());

        let frames = scan_progress(&mut surface, &mut delay);

        assert_eq!(frames, 16);
        assert_eq!(surface.frames[0].iter().filter(|op| op.text == "0%").count(), 1);
        assert!(surface.frames[14].iter().any(|op| op.text == "93%"));
        assert!(surface.printed_at("Finished!", Point::new(38, 28)));
        assert_eq!(clock.now(), 15 * 120 + 500);
    }

    #[test]
    fn progress_bar_grows_without_overflowing() {
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::new(ManualClock::default());
        scan_progress(&mut surface, &mut delay);

        // Frame 0 has an empty bar.
        assert_eq!(surface.filled_rects.len(), 14);
        let widest = surface.filled_rects.iter().map(|(_, s)| s.width).max();
        assert_eq!(widest, Some(14 * 106 / 15));
        assert!(surface.filled_rects.iter().all(|(p, s)| p.x + s.width as i32 <= 118));
    }
}
