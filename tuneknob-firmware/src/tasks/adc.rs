//! Volume potentiometer sampling
//!
//! Converts the knob's ADC channel on a fixed interval and publishes the
//! latest reading. The dispatch task decides when a reading is reported.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use crate::channels::INPUTS;

/// ADC task - keeps the analog sample cell current
#[embassy_executor::task]
pub async fn adc_task(mut adc: Adc<'static, Async>, mut channel: Channel<'static>, interval_ms: u32) {
    info!("ADC task started ({} ms interval)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(interval_ms)));

    loop {
        match adc.read(&mut channel).await {
            Ok(raw) => INPUTS.analog.store(raw),
            Err(e) => warn!("ADC read error: {:?}", e),
        }

        ticker.next().await;
    }
}
