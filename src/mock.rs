//! Host test doubles for the hardware-facing traits.

use std::cell::Cell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};
use embedded_hal::delay::DelayNs;

use crate::clock::Clock;
use crate::error::Error;
use crate::ui::buttons::ButtonLines;
use crate::ui::surface::{Bitmap, Surface, TextSize};
use crate::ui::Button;
use crate::wifi::ScanProvider;

/// Shared, manually advanced millisecond clock.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<u32>>);

impl ManualClock {
    pub fn starting_at(ms: u32) -> Self {
        Self(Rc::new(Cell::new(ms)))
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }

    pub fn now(&self) -> u32 {
        self.0.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now()
    }
}

/// Delay that moves a [`ManualClock`] forward instead of sleeping.
#[derive(Clone, Debug)]
pub struct CountingDelay {
    clock: ManualClock,
    pub calls: usize,
}

impl CountingDelay {
    pub fn new(clock: ManualClock) -> Self {
        Self { clock, calls: 0 }
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.clock.advance(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.clock.advance(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.clock.advance(ms);
    }
}

/// Button lines whose levels are set directly by the test.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldButtons([bool; 4]);

impl HeldButtons {
    fn slot(button: Button) -> usize {
        match button {
            Button::Up => 0,
            Button::Down => 1,
            Button::Confirm => 2,
            Button::Back => 3,
        }
    }

    pub fn hold(&mut self, button: Button) {
        self.0[Self::slot(button)] = true;
    }

    pub fn release_all(&mut self) {
        self.0 = [false; 4];
    }
}

impl ButtonLines for HeldButtons {
    fn is_active(&mut self, button: Button) -> bool {
        self.0[Self::slot(button)]
    }
}

/// One `print` call as seen by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextOp {
    pub at: Point,
    pub text: String,
    pub size: TextSize,
}

/// Surface that records text and counts primitives instead of drawing.
///
/// Text measures 6×10 per character at `Normal` and 10×20 at `Large`,
/// matching the fonts used by the real adapter.
#[derive(Debug)]
pub struct RecordingSurface {
    pub pending: Vec<TextOp>,
    pub frames: Vec<Vec<TextOp>>,
    cursor: Point,
    text_size: TextSize,
    pub clears: usize,
    pub lines: usize,
    pub circles: usize,
    pub rects: usize,
    pub filled_rects: Vec<(Point, Size)>,
    pub bitmaps: usize,
    pub fail_commit: bool,
    pub failed_commits: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            frames: Vec::new(),
            cursor: Point::zero(),
            text_size: TextSize::Normal,
            clears: 0,
            lines: 0,
            circles: 0,
            rects: 0,
            filled_rects: Vec::new(),
            bitmaps: 0,
            fail_commit: false,
            failed_commits: 0,
        }
    }

    /// `text` was printed at exactly `at` in the current buffer.
    pub fn printed_at(&self, text: &str, at: Point) -> bool {
        self.pending.iter().any(|op| op.text == text && op.at == at)
    }

    /// `text` was printed anywhere in the current buffer.
    pub fn printed(&self, text: &str) -> bool {
        self.pending.iter().any(|op| op.text == text)
    }

    pub fn pending_texts(&self) -> Vec<&str> {
        self.pending.iter().map(|op| op.text.as_str()).collect()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The most recently committed frame contains `text`.
    pub fn last_frame_has(&self, text: &str) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.iter().any(|op| op.text == text))
    }

    /// Position of `text` in the current buffer.
    pub fn position_of(&self, text: &str) -> Option<Point> {
        self.pending.iter().find(|op| op.text == text).map(|op| op.at)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn glyph(size: TextSize) -> (u32, u32) {
    match size {
        TextSize::Normal => (6, 10),
        TextSize::Large => (10, 20),
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.cursor = Point::zero();
        self.clears += 1;
    }

    fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    fn set_text_size(&mut self, size: TextSize) {
        self.text_size = size;
    }

    fn print(&mut self, text: &str) {
        self.pending.push(TextOp {
            at: self.cursor,
            text: text.to_string(),
            size: self.text_size,
        });
        let width = self.measure_text(text, self.text_size).width as i32;
        self.cursor.x += width;
    }

    fn draw_line(&mut self, _start: Point, _end: Point, _color: BinaryColor) {
        self.lines += 1;
    }

    fn draw_circle(&mut self, _center: Point, _radius: u32, _filled: bool) {
        self.circles += 1;
    }

    fn draw_rect(&mut self, top_left: Point, size: Size, filled: bool) {
        self.rects += 1;
        if filled {
            self.filled_rects.push((top_left, size));
        }
    }

    fn draw_bitmap(&mut self, _top_left: Point, _bitmap: &Bitmap<'_>) {
        self.bitmaps += 1;
    }

    fn measure_text(&self, text: &str, size: TextSize) -> Size {
        let (w, h) = glyph(size);
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return Size::zero();
        }
        Size::new(chars * w, h)
    }

    fn commit(&mut self) -> Result<(), Error> {
        if self.fail_commit {
            self.failed_commits += 1;
            return Err(Error::Display);
        }
        self.frames.push(self.pending.clone());
        Ok(())
    }
}

/// Scan provider over a fixed list of `(name, rssi, open)` networks.
#[derive(Clone, Debug, Default)]
pub struct FakeScanner {
    pub networks: Vec<(String, i8, bool)>,
    pub scans: usize,
    pub fail: bool,
}

impl FakeScanner {
    pub fn with(networks: &[(&str, i8, bool)]) -> Self {
        Self {
            networks: networks
                .iter()
                .map(|(name, rssi, open)| (name.to_string(), *rssi, *open))
                .collect(),
            scans: 0,
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ScanProvider for FakeScanner {
    fn scan(&mut self) -> Result<usize, Error> {
        self.scans += 1;
        if self.fail {
            return Err(Error::ScanFailed);
        }
        Ok(self.networks.len())
    }

    fn name(&self, index: usize) -> &str {
        self.networks.get(index).map_or("", |n| n.0.as_str())
    }

    fn signal_strength(&self, index: usize) -> i8 {
        self.networks.get(index).map_or(0, |n| n.1)
    }

    fn is_open(&self, index: usize) -> bool {
        self.networks.get(index).is_some_and(|n| n.2)
    }
}
