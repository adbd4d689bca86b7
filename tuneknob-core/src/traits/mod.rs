//! Hardware abstraction traits
//!
//! These traits define the interface between the dispatch loop and
//! board-specific implementations.

pub mod indicator;

pub use indicator::PlaybackIndicator;
