//! Millisecond tick source
//!
//! Drives the tick counter the gesture classifier and volume cadence read.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::INPUTS;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1;

/// Tick task - advances the shared tick counter once per interval
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        INPUTS.ticks.tick();
    }
}
