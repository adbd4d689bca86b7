//! Button gesture classification
//!
//! One independent [`GestureClassifier`] per button, polled once per
//! dispatch pass.

pub mod classifier;

pub use classifier::{ClassifierState, Gesture, GestureClassifier, DOUBLE_CLICK_WINDOW_MS};
