//! Option codes carried in byte 1 of a frame
//!
//! Option codes are divided into two directions:
//! - Remote → Host: volume reports and button gestures
//! - Host → Remote: playback state

// Option codes: Remote → Host
pub const OPTION_VOLUME: u8 = b'v';
pub const OPTION_UP: u8 = b'r';
pub const OPTION_CONFIRM: u8 = b'z';
pub const OPTION_FORWARD: u8 = b'>';
pub const OPTION_BACK: u8 = b'<';

// Option codes: Host → Remote
pub const OPTION_PLAY: u8 = b'p';
pub const OPTION_PAUSE: u8 = b't';

/// Value byte sent with commands that carry no payload
pub const DEFAULT_VALUE: u8 = b'0';

/// Commands the remote sends to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutgoingCommand {
    /// Volume knob moved; value is a 1-100 percentage
    Volume(u8),
    /// First button, single click
    Up,
    /// First button, double click
    Forward,
    /// Second button, single click
    Confirm,
    /// Second button, double click
    Back,
}

impl OutgoingCommand {
    /// Option byte for this command
    pub fn option(self) -> u8 {
        match self {
            OutgoingCommand::Volume(_) => OPTION_VOLUME,
            OutgoingCommand::Up => OPTION_UP,
            OutgoingCommand::Forward => OPTION_FORWARD,
            OutgoingCommand::Confirm => OPTION_CONFIRM,
            OutgoingCommand::Back => OPTION_BACK,
        }
    }

    /// Value byte for this command
    pub fn value(self) -> u8 {
        match self {
            OutgoingCommand::Volume(percent) => percent,
            _ => DEFAULT_VALUE,
        }
    }
}

/// Commands the host sends to the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IncomingCommand {
    /// Host started playback
    Play,
    /// Host paused playback
    Pause,
}

impl IncomingCommand {
    /// Parse an option byte; unknown codes yield `None`
    pub fn from_byte(option: u8) -> Option<Self> {
        match option {
            OPTION_PLAY => Some(IncomingCommand::Play),
            OPTION_PAUSE => Some(IncomingCommand::Pause),
            _ => None,
        }
    }
}
