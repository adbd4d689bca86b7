//! Main loop
//!
//! Runs one dispatcher pass per scheduling slot and yields in between, so
//! the interrupt-side tasks are never starved.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Level, Output};

use tuneknob_core::config::RemoteConfig;
use tuneknob_core::dispatch::{Dispatcher, PassReport};
use tuneknob_core::queue::{FrameConsumer, FrameProducer, QUEUE_CAPACITY};
use tuneknob_core::state::PlaybackState;
use tuneknob_core::traits::PlaybackIndicator;
use tuneknob_protocol::FrameError;

use crate::channels::{INPUTS, TX_PENDING, TX_QUEUE_CAPACITY};

/// Red status LED, wired active-low: lit while the host is playing
pub struct StatusLed {
    pin: Output<'static>,
}

impl StatusLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl PlaybackIndicator for StatusLed {
    fn show(&mut self, state: PlaybackState) {
        let level = if state.is_playing() {
            Level::Low
        } else {
            Level::High
        };
        self.pin.set_level(level);
    }
}

/// Dispatch task - polls inputs, sends frames, applies host commands
#[embassy_executor::task]
pub async fn dispatch_task(
    config: RemoteConfig,
    mut rx: FrameConsumer<'static, QUEUE_CAPACITY>,
    mut tx: FrameProducer<'static, TX_QUEUE_CAPACITY>,
    mut led: StatusLed,
) {
    info!("Dispatch task started");

    let mut dispatcher = Dispatcher::new(&config);

    loop {
        let report = dispatcher.run_pass(&INPUTS, &mut rx, &mut tx, &mut led);

        if !report.sent.is_empty() {
            TX_PENDING.signal(());
        }
        if !report.is_idle() {
            log_pass(&report);
        }

        yield_now().await;
    }
}

fn log_pass(report: &PassReport) {
    if let Some(percent) = report.volume {
        debug!("Volume {}%", percent);
    }

    for command in report.sent.iter() {
        debug!("Sent {:?}", command);
    }

    match report.received {
        Ok((option, value)) => match report.command {
            Some(command) => debug!("Host command {:?}", command),
            None => debug!("Ignoring option {=u8:#x} (value {=u8:#x})", option, value),
        },
        Err(FrameError::NoneAvailable) => {}
        Err(e) => warn!("Dropped host frame: {:?}", e),
    }

    if let Some(state) = report.playback_changed {
        info!("Playback {:?}", state);
    }
}
