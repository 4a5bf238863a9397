//! Horizontal slide transition between an outgoing and an incoming visual.
//!
//! The renderer is stateless. Callers own any "previous index" bookkeeping
//! and must settle it right after [`run_slide`] returns, otherwise the next
//! transition computes its direction from a stale value.

use embedded_hal::delay::DelayNs;

use crate::config::{SLIDE_FRAME_DELAY_MS, SLIDE_STEP_PX};
use crate::menu::view as menu_view;
use crate::ui::surface::{present, screen_width, Surface};
use crate::wifi::view as wifi_view;
use crate::wifi::NetworkInfo;

/// Which edge the incoming visual enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlideDirection {
    /// Incoming enters from the left, outgoing leaves to the right.
    Rightward,
    /// Incoming enters from the right, outgoing leaves to the left.
    Leftward,
}

impl SlideDirection {
    /// Incoming visual offset after `progress` pixels of travel.
    pub const fn incoming_x(self, progress: i32, extent: i32) -> i32 {
        match self {
            SlideDirection::Rightward => progress - extent,
            SlideDirection::Leftward => extent - progress,
        }
    }

    /// Outgoing visual offset after `progress` pixels of travel.
    pub const fn outgoing_x(self, progress: i32) -> i32 {
        match self {
            SlideDirection::Rightward => progress,
            SlideDirection::Leftward => -progress,
        }
    }
}

/// Something that can be drawn shifted horizontally by `x_offset`.
pub trait DrawAtOffset {
    fn draw_at<S: Surface + ?Sized>(&self, surface: &mut S, x_offset: i32);
}

/// Every kind of visual the slide renderer knows how to place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual<'a> {
    /// Nothing.
    Blank,
    /// Top-level entry label; `boxed` adds the selection brackets.
    MenuEntry { label: &'a str, boxed: bool },
    /// Menu header with `<position/total>` and navigation dots.
    MenuChrome { position: usize, total: usize },
    /// Detail view of one scanned network.
    Network(NetworkInfo<'a>),
    /// Scan list header with `<position/total>` and navigation dots.
    NetworkChrome { position: usize, total: usize },
}

impl DrawAtOffset for Visual<'_> {
    fn draw_at<S: Surface + ?Sized>(&self, surface: &mut S, x_offset: i32) {
        match *self {
            Visual::Blank => {}
            Visual::MenuEntry { label, boxed } => menu_view::draw_entry(surface, label, x_offset, boxed),
            Visual::MenuChrome { position, total } => menu_view::draw_chrome(surface, position, total),
            Visual::Network(ref info) => wifi_view::draw_network(surface, info, x_offset),
            Visual::NetworkChrome { position, total } => {
                wifi_view::draw_chrome(surface, position, total)
            }
        }
    }
}

/// One slide: the two moving visuals plus a static backdrop drawn under them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide<'a> {
    pub incoming: Visual<'a>,
    pub outgoing: Visual<'a>,
    pub backdrop: Visual<'a>,
    pub direction: SlideDirection,
}

/// A visual whose offset puts it fully outside the screen is skipped.
fn on_screen(x: i32, extent: i32) -> bool {
    x > -extent && x < extent
}

/// Animate `slide` across the full screen width and leave the settled frame
/// on screen. Returns the number of committed frames.
///
/// Runs to completion; input is not read until it returns.
pub fn run_slide<S, D>(surface: &mut S, delay: &mut D, slide: &Slide<'_>) -> usize
where
    S: Surface + ?Sized,
    D: DelayNs + ?Sized,
{
    let extent = screen_width(surface);
    let mut frames = 0;
    let mut progress = 0;

    while progress <= extent {
        surface.clear();
        slide.backdrop.draw_at(surface, 0);

        let incoming_x = slide.direction.incoming_x(progress, extent);
        if on_screen(incoming_x, extent) {
            slide.incoming.draw_at(surface, incoming_x);
        }

        let outgoing_x = slide.direction.outgoing_x(progress);
        if on_screen(outgoing_x, extent) {
            slide.outgoing.draw_at(surface, outgoing_x);
        }

        present(surface);
        frames += 1;
        delay.delay_ms(SLIDE_FRAME_DELAY_MS);
        progress += SLIDE_STEP_PX;
    }

    // Settled frame.
    surface.clear();
    slide.backdrop.draw_at(surface, 0);
    slide.incoming.draw_at(surface, 0);
    present(surface);

    frames + 1
}
