//! Counters written by exactly one interrupt context and read elsewhere
//!
//! Each type wraps a single word-sized atomic, so a reader never sees a
//! half-written value. Writers use plain `fetch_add`/`store`; on cores
//! without native read-modify-write atomics `portable-atomic` falls back to
//! a critical section.

use portable_atomic::{AtomicU16, AtomicU32, Ordering};

/// Millisecond tick counter
///
/// Incremented once per tick by the periodic timer context. Wraps after
/// roughly 49 days; consumers compare ticks with wrapping arithmetic.
#[derive(Debug)]
pub struct TickCounter {
    ticks: AtomicU32,
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Advance by one tick (timer context only)
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Current tick value
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }
}

/// Raw press count for one button
///
/// Incremented on every press edge. The gesture classifier only reads it.
#[derive(Debug)]
pub struct PressCounter {
    presses: AtomicU32,
}

impl Default for PressCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PressCounter {
    pub const fn new() -> Self {
        Self {
            presses: AtomicU32::new(0),
        }
    }

    /// Record one press edge (button context only)
    pub fn record_press(&self) {
        self.presses.fetch_add(1, Ordering::Relaxed);
    }

    /// Presses recorded so far
    pub fn count(&self) -> u32 {
        self.presses.load(Ordering::Relaxed)
    }
}

/// Latest analog reading from the volume potentiometer
#[derive(Debug)]
pub struct AnalogSample {
    raw: AtomicU16,
}

impl Default for AnalogSample {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogSample {
    pub const fn new() -> Self {
        Self {
            raw: AtomicU16::new(0),
        }
    }

    /// Publish a new conversion result (sampling context only)
    pub fn store(&self, raw: u16) {
        self.raw.store(raw, Ordering::Relaxed);
    }

    /// Most recent conversion result
    pub fn load(&self) -> u16 {
        self.raw.load(Ordering::Relaxed)
    }
}
