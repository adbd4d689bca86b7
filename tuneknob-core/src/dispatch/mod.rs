//! Main-loop dispatcher

pub mod dispatcher;

pub use dispatcher::{gesture_command, Dispatcher, PassReport, MAX_SENT_PER_PASS};
