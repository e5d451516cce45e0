use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::bounded;
use crate::bus::{BusConfig, BusTransport};
use crate::color::{BLACK, ON_COLOR, Rgb, pack, rgb_from_u32, rgb_to_u32, unpack};
use crate::effect::{Effect, PaletteEffect, RainbowEffect};
use crate::error::Error;
use crate::filter::{BrightnessFilter, Filter};

/// Pause after every bus write so the chips latch the new colors
pub const SETTLE_DELAY: Duration = Duration::from_millis(2);

/// Whether single pixel helpers push to the bus right away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Every on/off helper flushes
    #[default]
    Immediate,
    /// Changes are only written to the buffers
    Batched,
}

/// WS2801 strip controller
///
/// Owns two frames of `count` pixels:
/// - the live frame, the one sent to the bus by [`flush`](Self::flush)
/// - the staged frame, prepared by fills and animations and copied over the
///   live frame on [`commit`](Self::commit)
///
/// Range operations cover `[offset, count)`, leaving the pixels below the
/// offset untouched. Addressing a pixel outside `[0, count)` panics.
pub struct PixelStrip<B: BusTransport, const MAX_LEDS: usize> {
    bus: B,
    pixels: Vec<Rgb, MAX_LEDS>,
    staged: Vec<Rgb, MAX_LEDS>,
    wire: Vec<[u8; 3], MAX_LEDS>,
    brightness: BrightnessFilter,
    offset: usize,
    write_mode: WriteMode,
}

impl<B: BusTransport, const MAX_LEDS: usize> PixelStrip<B, MAX_LEDS> {
    /// Create a strip of `count` pixels and configure the bus for it
    ///
    /// All pixels start black at full brightness with a zero offset.
    pub fn new(count: usize, mut bus: B) -> Result<Self, Error<B::Error>> {
        let too_many = || Error::<B::Error>::TooManyPixels {
            count,
            capacity: MAX_LEDS,
        };
        let pixels = blank_frame(count).ok_or_else(too_many)?;
        let staged = blank_frame(count).ok_or_else(too_many)?;

        bus.configure(&BusConfig::WS2801).map_err(Error::Transport)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelStrip.new] configured {} for {} pixels",
            core::any::type_name::<B>(),
            count
        );

        Ok(Self {
            bus,
            pixels,
            staged,
            wire: Vec::new(),
            brightness: BrightnessFilter::default(),
            offset: 0,
            write_mode: WriteMode::Immediate,
        })
    }

    /// Get the number of pixels in the strip
    pub fn count(&self) -> usize {
        self.pixels.len()
    }

    /// Live frame, as last written or about to be
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Staged frame, not yet visible
    pub fn staged(&self) -> &[Rgb] {
        &self.staged
    }

    /// Bus the strip writes to
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Drop the frames and hand the bus back
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Set a live pixel from channel values, keeping their low 8 bits
    pub fn set_pixel_rgb(&mut self, n: usize, r: i32, g: i32, b: i32) {
        let index = self.checked(n);
        self.pixels[index] = rgb_from_u32(pack(r, g, b));
    }

    /// Set a live pixel from a 0xRRGGBB color
    pub fn set_pixel(&mut self, n: usize, color: u32) {
        let (r, g, b) = unpack(color);
        self.set_pixel_rgb(n, r.into(), g.into(), b.into());
    }

    pub fn get_pixel_rgb(&self, n: usize) -> (u8, u8, u8) {
        let pixel = self.pixels[self.checked(n)];
        (pixel.r, pixel.g, pixel.b)
    }

    pub fn get_pixel(&self, n: usize) -> u32 {
        rgb_to_u32(self.pixels[self.checked(n)])
    }

    /// Set a staged pixel from channel values, keeping their low 8 bits
    pub fn stage_pixel_rgb(&mut self, n: usize, r: i32, g: i32, b: i32) {
        let index = self.checked(n);
        self.staged[index] = rgb_from_u32(pack(r, g, b));
    }

    /// Set a staged pixel from a 0xRRGGBB color
    pub fn stage_pixel(&mut self, n: usize, color: u32) {
        let (r, g, b) = unpack(color);
        self.stage_pixel_rgb(n, r.into(), g.into(), b.into());
    }

    /// Repeat `colors` over the staged range
    ///
    /// Pixel `i` gets `colors[i % colors.len()]`. With `commit` the staged
    /// frame is displayed right away.
    pub fn stage_fill(&mut self, colors: &[u32], commit: bool) -> Result<(), Error<B::Error>> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        self.batched(|strip| strip.render_staged(&PaletteEffect::new(colors)));
        if commit {
            self.commit()?;
        }
        Ok(())
    }

    /// Stage `colors`, then turn every addressable pixel on
    ///
    /// The live frame ends up at [`ON_COLOR`], the palette only lands in the
    /// staged frame. Use [`stage_fill`](Self::stage_fill) with `commit` to
    /// display the palette itself.
    pub fn fill(&mut self, colors: &[u32]) -> Result<(), Error<B::Error>> {
        self.stage_fill(colors, false)?;
        self.turn_on_all()
    }

    /// [`fill`](Self::fill) with black
    pub fn clear(&mut self) -> Result<(), Error<B::Error>> {
        self.fill(&[rgb_to_u32(BLACK)])
    }

    pub fn turn_on(&mut self, n: usize) -> Result<(), Error<B::Error>> {
        let index = self.checked(n);
        self.pixels[index] = ON_COLOR;
        self.auto_flush()
    }

    pub fn turn_off(&mut self, n: usize) -> Result<(), Error<B::Error>> {
        self.set_pixel(n, rgb_to_u32(BLACK));
        self.auto_flush()
    }

    /// Turn on every addressable pixel with a single flush
    pub fn turn_on_all(&mut self) -> Result<(), Error<B::Error>> {
        bounded(&mut self.pixels, self.offset).fill(ON_COLOR);
        self.auto_flush()
    }

    /// Turn off every addressable pixel with a single flush
    pub fn turn_off_all(&mut self) -> Result<(), Error<B::Error>> {
        bounded(&mut self.pixels, self.offset).fill(BLACK);
        self.auto_flush()
    }

    /// Stage a rainbow over the addressable range
    ///
    /// Pixel `p` takes wheel position `(p + shift) % 256`. With `commit` the
    /// staged frame is displayed right away.
    pub fn apply_rainbow(&mut self, shift: usize, commit: bool) -> Result<(), Error<B::Error>> {
        self.batched(|strip| strip.render_staged(&RainbowEffect::new(shift)));
        if commit {
            self.commit()?;
        }
        Ok(())
    }

    /// Copy the staged frame over the live frame and flush
    pub fn commit(&mut self) -> Result<(), Error<B::Error>> {
        self.pixels.copy_from_slice(&self.staged);
        self.flush()
    }

    pub fn brightness(&self) -> f64 {
        self.brightness.level()
    }

    /// Set the brightness level and flush
    ///
    /// The level is applied on every flush below `1.0`, see
    /// [`flush`](Self::flush).
    pub fn set_brightness(&mut self, level: f64) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[PixelStrip.set_brightness] setting brightness to {}", level);
        self.brightness.set(level);
        self.flush()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the start of the addressable range, without flushing
    pub fn set_offset(&mut self, offset: usize) {
        #[cfg(feature = "esp32-log")]
        println!("[PixelStrip.set_offset] addressable range starts at {}", offset);
        self.offset = offset;
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn set_write_mode(&mut self, mode: WriteMode) {
        self.write_mode = mode;
    }

    /// Push the live frame to the bus
    ///
    /// Below full brightness the addressable range of the live frame is
    /// scaled in place first. The scaling is not undone, so every flush at
    /// the same level dims the frame further. All `count` pixels are sent
    /// as R, G, B bytes, followed by [`SETTLE_DELAY`].
    pub fn flush(&mut self) -> Result<(), Error<B::Error>> {
        self.brightness.apply(bounded(&mut self.pixels, self.offset));

        self.wire.clear();
        self.wire
            .extend(self.pixels.iter().map(|pixel| [pixel.r, pixel.g, pixel.b]));

        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelStrip.flush] writing {} bytes at brightness {}",
            self.wire.len() * 3,
            self.brightness.level()
        );

        self.bus
            .write(self.wire.as_flattened())
            .map_err(Error::Transport)?;
        embassy_time::block_for(SETTLE_DELAY);
        Ok(())
    }

    /// Run a multi-step change with single pixel flushes suppressed
    ///
    /// The write mode is back to [`WriteMode::Immediate`] afterwards.
    fn batched<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.write_mode = WriteMode::Batched;
        let result = f(self);
        self.write_mode = WriteMode::Immediate;
        result
    }

    fn render_staged(&mut self, effect: &impl Effect) {
        effect.render(self.offset, bounded(&mut self.staged, self.offset));
    }

    fn auto_flush(&mut self) -> Result<(), Error<B::Error>> {
        match self.write_mode {
            WriteMode::Immediate => self.flush(),
            WriteMode::Batched => Ok(()),
        }
    }

    fn checked(&self, n: usize) -> usize {
        assert!(n < self.count(), "pixel index out of range");
        n
    }
}

fn blank_frame<const N: usize>(count: usize) -> Option<Vec<Rgb, N>> {
    let mut frame = Vec::new();
    frame.resize(count, BLACK).ok()?;
    Some(frame)
}
