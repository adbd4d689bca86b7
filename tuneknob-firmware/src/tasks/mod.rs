//! Embassy async tasks
//!
//! Each task runs independently and communicates through the shared input
//! cells and frame queues in [`crate::channels`].

pub mod adc;
pub mod button;
pub mod dispatch;
pub mod serial_rx;
pub mod serial_tx;
pub mod tick;

pub use adc::adc_task;
pub use button::button_task;
pub use dispatch::{dispatch_task, StatusLed};
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
pub use tick::tick_task;
