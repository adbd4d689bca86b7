//! Frame encoding and decoding.
//!
//! Frame format:
//! - START (1 byte): `'0'` synchronization marker
//! - OPTION (1 byte): command selector
//! - VALUE (1 byte): command payload
//! - CHECKSUM (1 byte): `OPTION + VALUE`, wrapping
//! - STOP (1 byte): `'0'` terminator

use crate::sink::FrameSink;

/// Frame start marker
pub const START_MARKER: u8 = b'0';

/// Frame stop marker
pub const STOP_MARKER: u8 = b'0';

/// Length of every frame on the wire
pub const FRAME_LEN: usize = 5;

const START_INDEX: usize = 0;
const OPTION_INDEX: usize = 1;
const VALUE_INDEX: usize = 2;
const CHECKSUM_INDEX: usize = 3;
const STOP_INDEX: usize = 4;

/// Reasons an incoming frame yields no command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Start or stop byte is not the frame marker
    BadMarker,
    /// Checksum byte does not match `option + value`
    BadChecksum,
    /// The receive queue held no complete frame
    NoneAvailable,
}

/// A raw five-byte frame
///
/// A `Frame` may hold arbitrary bytes (it is what the receive queue hands
/// back); use [`Frame::decode`] to validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; FRAME_LEN],
}

impl Frame {
    /// Build a valid frame carrying `option` and `value`
    pub const fn encode(option: u8, value: u8) -> Self {
        Self {
            bytes: [
                START_MARKER,
                option,
                value,
                checksum(option, value),
                STOP_MARKER,
            ],
        }
    }

    /// Wrap raw bytes without validating them
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    /// Raw wire bytes
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Option byte, whether or not the frame is valid
    pub const fn option(&self) -> u8 {
        self.bytes[OPTION_INDEX]
    }

    /// Value byte, whether or not the frame is valid
    pub const fn value(&self) -> u8 {
        self.bytes[VALUE_INDEX]
    }

    /// Validate the frame and extract `(option, value)`
    ///
    /// Markers are checked before the checksum, so a frame with both a bad
    /// marker and a bad checksum reports [`FrameError::BadMarker`].
    pub fn decode(&self) -> Result<(u8, u8), FrameError> {
        if self.bytes[START_INDEX] != START_MARKER || self.bytes[STOP_INDEX] != STOP_MARKER {
            return Err(FrameError::BadMarker);
        }

        let option = self.option();
        let value = self.value();
        if self.bytes[CHECKSUM_INDEX] != checksum(option, value) {
            return Err(FrameError::BadChecksum);
        }

        Ok((option, value))
    }

    /// Decode the result of a queue read
    ///
    /// An empty read becomes [`FrameError::NoneAvailable`] so callers can tell
    /// "nothing arrived" apart from "something corrupt arrived".
    pub fn decode_received(received: Option<Frame>) -> Result<(u8, u8), FrameError> {
        received.ok_or(FrameError::NoneAvailable)?.decode()
    }

    /// Push the frame one byte at a time into `sink`
    pub fn write_to<S: FrameSink + ?Sized>(&self, sink: &mut S) {
        for &byte in &self.bytes {
            sink.push_byte(byte);
        }
    }
}

const fn checksum(option: u8, value: u8) -> u8 {
    option.wrapping_add(value)
}
