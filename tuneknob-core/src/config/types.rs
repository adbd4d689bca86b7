//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gesture::DOUBLE_CLICK_WINDOW_MS;
use crate::volume::{ADC_FULL_SCALE, VOLUME_SAMPLE_INTERVAL_MS};

/// Default UART baud rate for the host link
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Default interval between ADC conversions
pub const DEFAULT_ADC_POLL_INTERVAL_MS: u32 = 10;

/// Gesture timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GestureConfig {
    /// Ticks a first press waits for a second before it becomes a single click
    pub double_click_window_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_click_window_ms: DOUBLE_CLICK_WINDOW_MS,
        }
    }
}

/// Volume knob sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct VolumeConfig {
    /// Ticks between volume checks
    pub sample_interval_ms: u32,
    /// ADC reading that maps to 100%
    pub adc_full_scale: u16,
    /// Interval between ADC conversions
    pub adc_poll_interval_ms: u32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: VOLUME_SAMPLE_INTERVAL_MS,
            adc_full_scale: ADC_FULL_SCALE,
            adc_poll_interval_ms: DEFAULT_ADC_POLL_INTERVAL_MS,
        }
    }
}

/// Host serial link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SerialConfig {
    /// Baud rate (8N1)
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}

/// Complete remote configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RemoteConfig {
    pub gesture: GestureConfig,
    pub volume: VolumeConfig,
    pub serial: SerialConfig,
}
