//! Hardware inputs shared between interrupt contexts and the dispatch loop
//!
//! Each hardware event is delivered as a typed call on the cell owned by
//! that context:
//!
//! | Event | Call |
//! |---|---|
//! | periodic tick | [`TickCounter::tick`] |
//! | button press edge | [`PressCounter::record_press`] |
//! | analog conversion | [`AnalogSample::store`] |
//! | serial byte | `FrameProducer::enqueue_byte` (see [`crate::queue`]) |
//!
//! All calls are non-blocking and run to completion.

pub mod counters;

pub use counters::{AnalogSample, PressCounter, TickCounter};

/// Number of gesture buttons on the remote
pub const BUTTON_COUNT: usize = 2;

/// Gesture buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Navigation button: up / forward
    Primary,
    /// Selection button: confirm / back
    Secondary,
}

impl Button {
    /// All buttons, in polling order
    pub const ALL: [Button; BUTTON_COUNT] = [Button::Primary, Button::Secondary];

    /// Index into per-button arrays
    pub const fn index(self) -> usize {
        match self {
            Button::Primary => 0,
            Button::Secondary => 1,
        }
    }
}

/// Every input cell the dispatch loop polls, in one static-friendly bundle
#[derive(Debug, Default)]
pub struct Inputs {
    /// Millisecond tick source
    pub ticks: TickCounter,
    /// Latest volume potentiometer reading
    pub analog: AnalogSample,
    presses: [PressCounter; BUTTON_COUNT],
}

impl Inputs {
    pub const fn new() -> Self {
        Self {
            ticks: TickCounter::new(),
            analog: AnalogSample::new(),
            presses: [PressCounter::new(), PressCounter::new()],
        }
    }

    /// Press counter for `button`
    pub fn presses(&self, button: Button) -> &PressCounter {
        &self.presses[button.index()]
    }
}
