//! Board-agnostic core logic for the Tuneknob remote firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared input cells written from interrupt context (tick, presses, ADC)
//! - Frame queue bridging the serial receiver and the main loop
//! - Single/double click classifier
//! - Volume sampling cadence and percent mapping
//! - Main-loop dispatcher and mirrored playback state
//! - Configuration types and the embedded config parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod gesture;
pub mod input;
pub mod queue;
pub mod state;
pub mod traits;
pub mod volume;
