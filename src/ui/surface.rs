//! Drawing surface the navigator renders into.
//!
//! Mirrors the primitive set of a small monochrome OLED driver: a text
//! cursor, lines, circles, rectangles, 1-bpp bitmaps, text measurement
//! and an explicit frame commit. The core never touches pixel buffers.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};

use crate::error::Error;

/// Text scale. `Normal` is the 6 px wide base font, `Large` roughly doubles it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

/// 1-bpp image, rows packed MSB first, each row padded to a whole byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    pub data: &'a [u8],
    pub width: u32,
}

impl<'a> Bitmap<'a> {
    pub const fn new(data: &'a [u8], width: u32) -> Self {
        Self { data, width }
    }

    pub const fn height(&self) -> u32 {
        let row_bytes = (self.width as usize + 7) / 8;
        if row_bytes == 0 {
            0
        } else {
            (self.data.len() / row_bytes) as u32
        }
    }
}

pub trait Surface {
    /// Visible area in pixels.
    fn size(&self) -> Size;

    /// Blank the frame buffer. Nothing is shown until [`Surface::commit`].
    fn clear(&mut self);

    /// Top-left corner of the next printed text.
    fn set_cursor(&mut self, position: Point);

    fn set_text_size(&mut self, size: TextSize);

    /// Print at the cursor and advance it past the text.
    fn print(&mut self, text: &str);

    fn draw_line(&mut self, start: Point, end: Point, color: BinaryColor);

    fn draw_circle(&mut self, center: Point, radius: u32, filled: bool);

    fn draw_rect(&mut self, top_left: Point, size: Size, filled: bool);

    fn draw_bitmap(&mut self, top_left: Point, bitmap: &Bitmap<'_>);

    /// Bounding box of `text` rendered at `size`.
    fn measure_text(&self, text: &str, size: TextSize) -> Size;

    /// Push the frame buffer to the panel.
    fn commit(&mut self) -> Result<(), Error>;
}

/// Commit a frame. A failed commit drops the frame and is only logged.
pub fn present<S: Surface + ?Sized>(surface: &mut S) {
    if let Err(e) = surface.commit() {
        warn!("frame dropped: {}", e.as_str());
    }
}

/// Width of the visible area as a signed coordinate.
pub(crate) fn screen_width<S: Surface + ?Sized>(surface: &S) -> i32 {
    surface.size().width as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_height_from_packed_rows() {
        let data = [0u8; 8];
        assert_eq!(Bitmap::new(&data, 8).height(), 8);
        assert_eq!(Bitmap::new(&data, 12).height(), 4);
        assert_eq!(Bitmap::new(&data, 0).height(), 0);
    }
}
