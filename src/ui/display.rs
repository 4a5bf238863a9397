//! embedded-graphics backed [`Surface`], plus the SSD1306 OLED wrapper.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::error::Error;
use crate::ui::surface::{Bitmap, Surface, TextSize};

/// Push a buffered frame to the panel.
pub trait Flush {
    fn flush(&mut self) -> Result<(), Error>;
}

fn text_style(size: TextSize) -> MonoTextStyle<'static, BinaryColor> {
    let font = match size {
        TextSize::Normal => &FONT_6X10,
        TextSize::Large => &FONT_10X20,
    };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// [`Surface`] over any monochrome `DrawTarget`.
///
/// Drawing errors are ignored per primitive; only [`Surface::commit`]
/// reports a failure.
pub struct GraphicsSurface<T> {
    target: T,
    cursor: Point,
    text_size: TextSize,
}

impl<T> GraphicsSurface<T>
where
    T: DrawTarget<Color = BinaryColor> + OriginDimensions + Flush,
{
    pub fn new(target: T) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_size: TextSize::Normal,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T> Surface for GraphicsSurface<T>
where
    T: DrawTarget<Color = BinaryColor> + OriginDimensions + Flush,
{
    fn size(&self) -> Size {
        self.target.size()
    }

    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
        self.cursor = Point::zero();
    }

    fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    fn set_text_size(&mut self, size: TextSize) {
        self.text_size = size;
    }

    fn print(&mut self, text: &str) {
        let drawn = Text::with_baseline(text, self.cursor, text_style(self.text_size), Baseline::Top)
            .draw(&mut self.target);
        if let Ok(next) = drawn {
            self.cursor = next;
        }
    }

    fn draw_line(&mut self, start: Point, end: Point, color: BinaryColor) {
        let _ = Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target);
    }

    fn draw_circle(&mut self, center: Point, radius: u32, filled: bool) {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        let _ = Circle::with_center(center, radius * 2 + 1)
            .into_styled(style)
            .draw(&mut self.target);
    }

    fn draw_rect(&mut self, top_left: Point, size: Size, filled: bool) {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        let _ = Rectangle::new(top_left, size)
            .into_styled(style)
            .draw(&mut self.target);
    }

    fn draw_bitmap(&mut self, top_left: Point, bitmap: &Bitmap<'_>) {
        let raw = ImageRaw::<BinaryColor>::new(bitmap.data, bitmap.width);
        let _ = Image::new(&raw, top_left).draw(&mut self.target);
    }

    fn measure_text(&self, text: &str, size: TextSize) -> Size {
        Text::with_baseline(text, Point::zero(), text_style(size), Baseline::Top)
            .bounding_box()
            .size
    }

    fn commit(&mut self) -> Result<(), Error> {
        self.target.flush()
    }
}

#[cfg(feature = "ssd1306")]
pub use self::oled::{init, Oled};

#[cfg(feature = "ssd1306")]
mod oled {
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::prelude::*;
    use ssd1306::I2CDisplayInterface;
    use ssd1306::Ssd1306;

    use super::{Flush, GraphicsSurface};
    use crate::config::DISPLAY_I2C_ADDRESS;
    use crate::error::Error;

    /// Type alias for the concrete display driver.
    ///
    /// Generic over the I²C implementation so callers pass in their HAL's
    /// I²C peripheral.
    pub type Oled<I2C> =
        Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

    impl<I2C> Flush for Oled<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        fn flush(&mut self) -> Result<(), Error> {
            Ssd1306::flush(self).map_err(|_| Error::Display)
        }
    }

    /// Initialise the SSD1306 display, clear the screen and wrap it as a surface.
    pub fn init<I2C>(i2c: I2C) -> GraphicsSurface<Oled<I2C>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if display.init().is_err() {
            warn!("display: init failed");
        }
        display.clear_buffer();
        let _ = Ssd1306::flush(&mut display);
        GraphicsSurface::new(display)
    }
}
