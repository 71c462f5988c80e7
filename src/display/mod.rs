//! The main API to the display driver. It owns the frame buffer that drawing goes into, and pushes
//! it to the panel on `flush`.

pub mod framebuffer;

use hal::blocking::delay::DelayMs;
use hal::digital::v2::OutputPin;
use log::{debug, trace};

use crate::canvas::{Canvas, Color, Rotation};
use crate::command::consts::*;
use crate::command::*;
use crate::config::Config;
use crate::display::framebuffer::FrameBuffer;
use crate::error::Error;
use crate::interface;

/// A driver for a 128x64 SSD1325 display.
///
/// Drawing only touches the frame buffer held by the driver; nothing reaches the panel until
/// `flush` is called. Each `Display` owns its own buffer, so several panels can be driven side by
/// side.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    buffer: FrameBuffer,
    rotation: Rotation,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver for the display connected to the interface `iface`. The
    /// frame buffer starts out blank.
    pub fn new(iface: DI) -> Self {
        Display {
            iface: iface,
            buffer: FrameBuffer::new(),
            rotation: Rotation::Rotate0,
        }
    }

    /// Pulse the /RESET line: hold it high for 1 ms, low for 10 ms, then release it. The
    /// controller ignores commands until this has happened once after power up.
    pub fn reset<RST, DELAY>(&mut self, rst: &mut RST, delay: &mut DELAY) -> Result<(), Error>
    where
        RST: OutputPin,
        DELAY: DelayMs<u8>,
    {
        debug!("resetting ssd1325");
        rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(1);
        rst.set_low().map_err(|_| Error::Pin)?;
        delay.delay_ms(10);
        rst.set_high().map_err(|_| Error::Pin)
    }

    /// Initialize the display with a config message. The panel is switched off while the
    /// configuration is loaded and switched back on in normal (non-inverted) mode.
    pub fn init(&mut self, config: Config) -> Result<(), Error> {
        debug!("initializing ssd1325");
        self.sleep(true)?;
        config.send(&mut self.iface)?;
        Command::SetDisplayMode(DisplayMode::Normal).send(&mut self.iface)?;
        self.sleep(false)
    }

    /// Reset the controller and then initialize it with `config`. This must run once before the
    /// first `flush`.
    pub fn begin<RST, DELAY>(
        &mut self,
        config: Config,
        rst: &mut RST,
        delay: &mut DELAY,
    ) -> Result<(), Error>
    where
        RST: OutputPin,
        DELAY: DelayMs<u8>,
    {
        self.reset(rst, delay)?;
        self.init(config)
    }

    /// Control sleep mode. While asleep the panel is dark but keeps its RAM.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error> {
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }

    /// Switch between the hardware inverted and normal display modes. The frame buffer is left
    /// alone.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error> {
        debug!("invert display: {}", inverted);
        let mode = if inverted {
            DisplayMode::Inverse
        } else {
            DisplayMode::Normal
        };
        Command::SetDisplayMode(mode).send(&mut self.iface)
    }

    /// Control the contrast current, i.e. the panel brightness.
    pub fn contrast(&mut self, contrast: u8) -> Result<(), Error> {
        debug!("contrast: {}", contrast);
        Command::SetContrastCurrent(contrast).send(&mut self.iface)
    }

    /// Push the whole frame buffer to the panel.
    ///
    /// The write window is reset to the full panel first so the controller's write pointer
    /// starts at the origin, then the frame goes out as one continuous data transfer.
    pub fn flush(&mut self) -> Result<(), Error> {
        trace!("flushing frame");
        Command::SetColumnAddress(0, (PIXEL_COLS / 2 - 1) as u8).send(&mut self.iface)?;
        Command::SetRowAddress(0, PIXEL_ROW_MAX as u8).send(&mut self.iface)?;
        self.iface.send_data(self.buffer.packed())
    }

    /// Blank the frame buffer. The panel keeps showing the old image until the next `flush`.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Set the orientation used by subsequent drawing. Pixels already in the frame buffer stay
    /// where they are.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        debug!("rotation: {:?}", rotation);
        self.rotation = rotation;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Width of the drawing surface, which is the panel height when rotated by a quarter turn.
    pub fn width(&self) -> i16 {
        if self.rotation.is_transposed() {
            PIXEL_ROWS
        } else {
            PIXEL_COLS
        }
    }

    /// Height of the drawing surface, which is the panel width when rotated by a quarter turn.
    pub fn height(&self) -> i16 {
        if self.rotation.is_transposed() {
            PIXEL_COLS
        } else {
            PIXEL_ROWS
        }
    }

    /// Map a logical coordinate to the panel, or `None` if it lies off the drawing surface.
    fn physical(&self, x: i16, y: i16) -> Option<(usize, usize)> {
        if x < 0 || x >= self.width() || y < 0 || y >= self.height() {
            return None;
        }
        let (col, row) = self
            .rotation
            .to_physical(x, y, PIXEL_COLS, PIXEL_ROWS);
        Some((col as usize, row as usize))
    }

    /// Set a single pixel in the frame buffer, in logical coordinates. Pixels off the drawing
    /// surface are silently dropped.
    pub fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
        if let Some((col, row)) = self.physical(x, y) {
            self.buffer.set(col, row, color == Color::On);
        }
    }

    /// Read back a pixel from the frame buffer, in logical coordinates.
    pub fn pixel(&self, x: i16, y: i16) -> Option<Color> {
        self.physical(x, y)
            .map(|(col, row)| Color::from(self.buffer.get(col, row)))
    }

    /// The frame buffer, in panel orientation.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Tear down the driver and give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }
}

impl<DI> Canvas for Display<DI>
where
    DI: interface::DisplayInterface,
{
    fn width(&self) -> i16 {
        Display::width(self)
    }

    fn height(&self) -> i16 {
        Display::height(self)
    }

    fn rotation(&self) -> Rotation {
        Display::rotation(self)
    }

    fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
        Display::draw_pixel(self, x, y, color)
    }
}
