//! Volume monitor implementation

/// Default sampling cadence in ticks
pub const VOLUME_SAMPLE_INTERVAL_MS: u32 = 200;

/// Default full-scale ADC reading (12-bit)
pub const ADC_FULL_SCALE: u16 = 4095;

/// Highest percentage ever reported
const MAX_PERCENT: u32 = 100;

/// Map a raw ADC reading onto the 1-100 volume scale
///
/// `raw * 100 / full_scale + 1`, with `raw` clamped to `full_scale` and the
/// result clamped to 100 (a reading at exactly full scale would otherwise
/// give 101).
pub fn adc_to_percent(raw: u16, full_scale: u16) -> u8 {
    let full_scale = u32::from(full_scale.max(1));
    let raw = u32::from(raw).min(full_scale);
    (raw * 100 / full_scale + 1).min(MAX_PERCENT) as u8
}

/// Tracks the reported volume and the sampling cadence
#[derive(Debug, Clone)]
pub struct VolumeMonitor {
    /// Ticks between samples
    interval_ms: u32,
    /// ADC reading that maps to 100%
    full_scale: u16,
    /// Start of the current cadence slot; a sample is due once more than
    /// `interval_ms` ticks have passed since it
    slot_start: u32,
    /// Last reported percentage (0 until the first report)
    last_percent: u8,
}

impl Default for VolumeMonitor {
    fn default() -> Self {
        Self::new(VOLUME_SAMPLE_INTERVAL_MS, ADC_FULL_SCALE)
    }
}

impl VolumeMonitor {
    /// Create a monitor sampling every `interval_ms` ticks
    pub const fn new(interval_ms: u32, full_scale: u16) -> Self {
        Self {
            interval_ms,
            full_scale,
            slot_start: 0,
            last_percent: 0,
        }
    }

    /// Last reported percentage, or `None` before the first report
    pub fn last_percent(&self) -> Option<u8> {
        (self.last_percent != 0).then_some(self.last_percent)
    }

    /// Sample `raw` if the cadence is due
    ///
    /// Returns the new percentage when it differs from the last report.
    /// The slot advances by one interval per due poll, so a stalled loop
    /// catches up over the following polls.
    pub fn poll(&mut self, now: u32, raw: u16) -> Option<u8> {
        if now.wrapping_sub(self.slot_start) <= self.interval_ms {
            return None;
        }
        self.slot_start = self.slot_start.wrapping_add(self.interval_ms);

        let percent = adc_to_percent(raw, self.full_scale);
        if percent == self.last_percent {
            return None;
        }

        self.last_percent = percent;
        Some(percent)
    }
}
