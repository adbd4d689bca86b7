//! Device state driven by host commands

pub mod playback;

pub use playback::PlaybackState;
