//! Strip shared between threads or interrupt handlers.
//!
//! Every access runs inside a critical section, so two flushes can never
//! interleave their bytes on the bus and a batch of changes made through
//! [`SharedStrip::lock`] is never observed half done.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::bus::BusTransport;
use crate::error::Error;
use crate::strip::PixelStrip;

/// A [`PixelStrip`] behind a critical-section mutex.
pub struct SharedStrip<B: BusTransport, const MAX_LEDS: usize> {
    inner: Mutex<RefCell<PixelStrip<B, MAX_LEDS>>>,
}

impl<B: BusTransport, const MAX_LEDS: usize> SharedStrip<B, MAX_LEDS> {
    pub const fn new(strip: PixelStrip<B, MAX_LEDS>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the strip.
    ///
    /// The critical section is held until `f` returns, including any flush
    /// and its settle delay. Calling `lock` again from inside `f` panics.
    pub fn lock<R>(&self, f: impl FnOnce(&mut PixelStrip<B, MAX_LEDS>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow_ref_mut(cs)))
    }

    /// Push the live frame to the bus, waiting for any flush in progress.
    pub fn flush(&self) -> Result<(), Error<B::Error>> {
        self.lock(PixelStrip::flush)
    }

    pub fn into_inner(self) -> PixelStrip<B, MAX_LEDS> {
        self.inner.into_inner().into_inner()
    }
}
