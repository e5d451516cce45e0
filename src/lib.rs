#![no_std]

mod bounds;
pub mod bus;
pub mod color;
pub mod effect;
mod error;
pub mod filter;
mod shared;
mod strip;

pub use bus::{BitOrder, BusConfig, BusOptions, BusTransport, GpioAccess, PinId, SpiMode, StripBus};
pub use error::Error;
pub use shared::SharedStrip;
pub use strip::{PixelStrip, SETTLE_DELAY, WriteMode};

pub use color::{Rgb, pack, unpack, wheel};
pub use embassy_time::Duration;
