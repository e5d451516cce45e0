//! Bus transport seam
//!
//! The strip only needs to push raw bytes out at a fixed clock rate. Whether
//! they travel through a hardware SPI peripheral or two bit-banged GPIO lines
//! is decided by the [`BusTransport`] implementation handed to the strip.

use crate::error::Error;

/// SPI clock polarity and phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiMode {
    #[default]
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

/// Order in which the bits of each byte are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// Bus settings applied once when the strip is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub clock_hz: u32,
    pub mode: SpiMode,
    pub bit_order: BitOrder,
}

impl BusConfig {
    /// WS2801 timing: 1 MHz clock, mode 0, MSB first
    pub const WS2801: Self = Self {
        clock_hz: 1_000_000,
        mode: SpiMode::Mode0,
        bit_order: BitOrder::MsbFirst,
    };
}

/// Write-only serial bus the strip is attached to
///
/// Implement this trait to support different hardware platforms.
/// A `write` call must push the whole payload before returning.
pub trait BusTransport {
    type Error;

    /// Apply clock rate, mode and bit order
    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error>;

    /// Shift `bytes` out on the data line
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Platform identifier of a GPIO line
pub type PinId = u8;

/// GPIO access able to emulate a bus on two output lines
pub trait GpioAccess {
    type Bus: BusTransport;

    /// Build a bit-banged bus clocking on `clock` and shifting data on `data`
    fn bit_bang(self, clock: PinId, data: PinId) -> Self::Bus;
}

/// Bus picked by [`BusOptions::resolve`]
#[derive(Debug)]
pub enum StripBus<H, S> {
    /// Dedicated SPI peripheral
    Hardware(H),
    /// Bus emulated over GPIO lines
    Software(S),
}

impl<H, S> BusTransport for StripBus<H, S>
where
    H: BusTransport,
    S: BusTransport<Error = H::Error>,
{
    type Error = H::Error;

    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        match self {
            Self::Hardware(bus) => bus.configure(config),
            Self::Software(bus) => bus.configure(config),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        match self {
            Self::Hardware(bus) => bus.write(bytes),
            Self::Software(bus) => bus.write(bytes),
        }
    }
}

/// Ways of reaching the strip, as supplied by the caller
///
/// A hardware bus wins when both a bus and pins are given. Without a GPIO
/// capability the software bus is built from `G::default()`, which stands
/// for the platform GPIO.
#[derive(Debug)]
pub struct BusOptions<H, G> {
    pub spi: Option<H>,
    pub clock: Option<PinId>,
    pub data: Option<PinId>,
    pub gpio: Option<G>,
}

impl<H, G> Default for BusOptions<H, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, G> BusOptions<H, G> {
    pub const fn new() -> Self {
        Self {
            spi: None,
            clock: None,
            data: None,
            gpio: None,
        }
    }

    /// Use a hardware SPI bus
    #[must_use]
    pub fn with_spi(mut self, spi: H) -> Self {
        self.spi = Some(spi);
        self
    }

    /// Emulate the bus on the given clock and data lines
    #[must_use]
    pub fn with_pins(mut self, clock: PinId, data: PinId) -> Self {
        self.clock = Some(clock);
        self.data = Some(data);
        self
    }

    /// GPIO access used to drive the pins
    #[must_use]
    pub fn with_gpio(mut self, gpio: G) -> Self {
        self.gpio = Some(gpio);
        self
    }
}

impl<H, G> BusOptions<H, G>
where
    H: BusTransport,
    G: GpioAccess + Default,
    G::Bus: BusTransport<Error = H::Error>,
{
    /// Pick the bus to drive the strip with
    ///
    /// Fails with [`Error::MissingBus`] when there is neither a hardware bus
    /// nor both pins. Nothing is touched on the failure path.
    pub fn resolve(self) -> Result<StripBus<H, G::Bus>, Error<H::Error>> {
        if let Some(spi) = self.spi {
            return Ok(StripBus::Hardware(spi));
        }
        let (Some(clock), Some(data)) = (self.clock, self.data) else {
            return Err(Error::MissingBus);
        };
        let gpio = self.gpio.unwrap_or_default();
        Ok(StripBus::Software(gpio.bit_bang(clock, data)))
    }
}
