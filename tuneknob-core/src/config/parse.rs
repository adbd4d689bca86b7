//! Minimal TOML reader for the remote configuration
//!
//! Handles only the subset `remote.toml` uses; it is not a general TOML
//! reader.
//!
//! Supported features:
//! - `[section]` headers
//! - `key = integer` pairs
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are absent keep their default value.

use super::types::RemoteConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Line is neither a header, a `key = value` pair, nor a comment
    InvalidLine(usize),
    /// Section or key is not part of the configuration
    UnknownKey(usize),
    /// Value is not an integer of the expected width
    InvalidValue(usize),
    /// Value parsed but is outside its allowed range
    OutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Gesture,
    Volume,
    Serial,
}

impl RemoteConfig {
    /// Parse `input`, starting from the defaults
    ///
    /// Line numbers in errors are 1-based.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut config = RemoteConfig::default();
        let mut section = Section::Root;

        for (index, raw_line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = strip_comment(raw_line).trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                section = parse_section_header(&line[1..line.len() - 1])
                    .ok_or(ConfigError::UnknownKey(line_no))?;
                continue;
            }

            let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidLine(line_no))?;
            apply_value(&mut config, section, key, value, line_no)?;
        }

        Ok(config)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "gesture" => Some(Section::Gesture),
        "volume" => Some(Section::Volume),
        "serial" => Some(Section::Serial),
        _ => None,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a decimal integer, allowing TOML digit separators (`115_200`)
fn parse_int<T: TryFrom<u64>>(value: &str, line_no: usize) -> Result<T, ConfigError> {
    let invalid = ConfigError::InvalidValue(line_no);
    let mut acc: u64 = 0;
    let mut digits = 0;

    for c in value.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10).ok_or(invalid)?;
        acc = acc
            .checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(digit)))
            .ok_or(invalid)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(invalid);
    }
    T::try_from(acc).map_err(|_| invalid)
}

fn apply_value(
    config: &mut RemoteConfig,
    section: Section,
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Gesture, "double_click_window_ms") => {
            config.gesture.double_click_window_ms = parse_int(value, line_no)?;
        }
        (Section::Volume, "sample_interval_ms") => {
            config.volume.sample_interval_ms = parse_int(value, line_no)?;
        }
        (Section::Volume, "adc_full_scale") => {
            config.volume.adc_full_scale = parse_int(value, line_no)?;
        }
        (Section::Volume, "adc_poll_interval_ms") => {
            config.volume.adc_poll_interval_ms = parse_int(value, line_no)?;
        }
        (Section::Serial, "baudrate") => {
            config.serial.baudrate = parse_int(value, line_no)?;
        }
        _ => return Err(ConfigError::UnknownKey(line_no)),
    }

    if value_is_zero(config, section, key) {
        return Err(ConfigError::OutOfRange(line_no));
    }

    Ok(())
}

/// Zero is meaningless for every key except the gesture window
fn value_is_zero(config: &RemoteConfig, section: Section, key: &str) -> bool {
    match (section, key) {
        (Section::Volume, "sample_interval_ms") => config.volume.sample_interval_ms == 0,
        (Section::Volume, "adc_full_scale") => config.volume.adc_full_scale == 0,
        (Section::Volume, "adc_poll_interval_ms") => config.volume.adc_poll_interval_ms == 0,
        (Section::Serial, "baudrate") => config.serial.baudrate == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
# Tuneknob remote configuration

[gesture]
double_click_window_ms = 350   # snappier than default

[volume]
sample_interval_ms = 100
adc_full_scale = 1023
adc_poll_interval_ms = 5

[serial]
baudrate = 9600
"#;

    #[test]
    fn test_parse_full_config() {
        let config = RemoteConfig::parse(FULL_CONFIG).unwrap();
        assert_eq!(config.gesture.double_click_window_ms, 350);
        assert_eq!(config.volume.sample_interval_ms, 100);
        assert_eq!(config.volume.adc_full_scale, 1023);
        assert_eq!(config.volume.adc_poll_interval_ms, 5);
        assert_eq!(config.serial.baudrate, 9600);
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        let config = RemoteConfig::parse("").unwrap();
        assert_eq!(config, RemoteConfig::default());
        assert_eq!(config.gesture.double_click_window_ms, 500);
        assert_eq!(config.volume.sample_interval_ms, 200);
        assert_eq!(config.volume.adc_full_scale, 4095);
        assert_eq!(config.serial.baudrate, 115_200);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = RemoteConfig::parse("[serial]\nbaudrate = 57600\n").unwrap();
        assert_eq!(config.serial.baudrate, 57600);
        assert_eq!(config.gesture, Default::default());
        assert_eq!(config.volume, Default::default());
    }

    #[test]
    fn test_unknown_section() {
        let result = RemoteConfig::parse("[gesture]\n[display]\n");
        assert_eq!(result, Err(ConfigError::UnknownKey(2)));
    }

    #[test]
    fn test_key_in_wrong_section() {
        let result = RemoteConfig::parse("[serial]\nadc_full_scale = 4095\n");
        assert_eq!(result, Err(ConfigError::UnknownKey(2)));
    }

    #[test]
    fn test_key_before_any_section() {
        let result = RemoteConfig::parse("baudrate = 9600\n");
        assert_eq!(result, Err(ConfigError::UnknownKey(1)));
    }

    #[test]
    fn test_invalid_line() {
        let result = RemoteConfig::parse("[volume]\nsample_interval_ms\n");
        assert_eq!(result, Err(ConfigError::InvalidLine(2)));
    }

    #[test]
    fn test_invalid_value() {
        let result = RemoteConfig::parse("[volume]\nadc_full_scale = 70000\n");
        assert_eq!(result, Err(ConfigError::InvalidValue(2)));

        let result = RemoteConfig::parse("[gesture]\ndouble_click_window_ms = \"500\"\n");
        assert_eq!(result, Err(ConfigError::InvalidValue(2)));
    }

    #[test]
    fn test_digit_separators() {
        let config = RemoteConfig::parse("[serial]\nbaudrate = 115_200\n").unwrap();
        assert_eq!(config.serial.baudrate, 115_200);
    }

    #[test]
    fn test_negative_value_rejected() {
        let result = RemoteConfig::parse("[gesture]\ndouble_click_window_ms = -1\n");
        assert_eq!(result, Err(ConfigError::InvalidValue(2)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = RemoteConfig::parse("[volume]\n\nsample_interval_ms = 0\n");
        assert_eq!(result, Err(ConfigError::OutOfRange(3)));
    }

    #[test]
    fn test_zero_window_allowed() {
        let config = RemoteConfig::parse("[gesture]\ndouble_click_window_ms = 0\n").unwrap();
        assert_eq!(config.gesture.double_click_window_ms, 0);
    }
}
