//! Playback state mirrored from the host
//!
//! The host owns playback; the remote only tracks the last play/pause
//! command so the indicator LED can follow it.

use tuneknob_protocol::IncomingCommand;

/// Playback state as last reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackState {
    /// Host is playing
    Playing,
    /// Host is paused (or has not reported yet)
    #[default]
    Paused,
}

impl PlaybackState {
    /// Check if the host is playing
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Process a host command and return the next state
    pub fn transition(self, command: IncomingCommand) -> Self {
        match command {
            IncomingCommand::Play => PlaybackState::Playing,
            IncomingCommand::Pause => PlaybackState::Paused,
        }
    }
}
