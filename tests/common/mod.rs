#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use myrtio_ws2801::{BusConfig, BusTransport, GpioAccess, PinId};

/// Something the recording bus was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Configure(BusConfig),
    WriteStart(usize),
    WriteEnd(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Default)]
struct BusLog {
    events: Vec<BusEvent>,
    writes: Vec<Vec<u8>>,
}

/// Bus double that records every call
///
/// Clones share the same log, so a test can keep a handle after moving the
/// bus into a strip.
#[derive(Debug, Clone, Default)]
pub struct RecordingBus {
    log: Arc<Mutex<BusLog>>,
    pins: Option<(PinId, PinId)>,
    fail_configure: bool,
    fail_writes: bool,
    write_pause: Option<Duration>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_configure() -> Self {
        Self {
            fail_configure: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Hold every write open for `pause` between its start and end events
    pub fn with_write_pause(mut self, pause: Duration) -> Self {
        self.write_pause = Some(pause);
        self
    }

    pub fn pins(&self) -> Option<(PinId, PinId)> {
        self.pins
    }

    pub fn events(&self) -> Vec<BusEvent> {
        self.log.lock().unwrap().events.clone()
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.log.lock().unwrap().writes.clone()
    }

    pub fn last_write(&self) -> Option<Vec<u8>> {
        self.log.lock().unwrap().writes.last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.log.lock().unwrap().writes.len()
    }
}

impl BusTransport for RecordingBus {
    type Error = BusFault;

    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(BusFault);
        }
        self.log
            .lock()
            .unwrap()
            .events
            .push(BusEvent::Configure(*config));
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(BusFault);
        }
        self.log
            .lock()
            .unwrap()
            .events
            .push(BusEvent::WriteStart(bytes.len()));
        if let Some(pause) = self.write_pause {
            thread::sleep(pause);
        }
        let mut log = self.log.lock().unwrap();
        log.writes.push(bytes.to_vec());
        log.events.push(BusEvent::WriteEnd(bytes.len()));
        Ok(())
    }
}

/// GPIO double handing out recording buses
#[derive(Debug, Clone, Default)]
pub struct RecordingGpio {
    handed_out: Arc<AtomicUsize>,
}

impl RecordingGpio {
    pub fn buses_handed_out(&self) -> usize {
        self.handed_out.load(Ordering::SeqCst)
    }
}

impl GpioAccess for RecordingGpio {
    type Bus = RecordingBus;

    fn bit_bang(self, clock: PinId, data: PinId) -> Self::Bus {
        self.handed_out.fetch_add(1, Ordering::SeqCst);
        RecordingBus {
            pins: Some((clock, data)),
            ..RecordingBus::default()
        }
    }
}
