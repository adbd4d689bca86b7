//! Volume knob sampling
//!
//! Turns the raw potentiometer reading into a 1-100 percentage on a fixed
//! cadence and reports only changes.

pub mod monitor;

pub use monitor::{adc_to_percent, VolumeMonitor, ADC_FULL_SCALE, VOLUME_SAMPLE_INTERVAL_MS};
