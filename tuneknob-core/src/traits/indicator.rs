//! Playback indicator trait

use crate::state::PlaybackState;

/// Output that shows the host's playback state
///
/// On the reference board this is the red LED, lit while playing.
pub trait PlaybackIndicator {
    /// Show `state`
    ///
    /// Called for every play/pause command, including repeats.
    fn show(&mut self, state: PlaybackState);
}
