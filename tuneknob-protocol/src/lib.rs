//! Tuneknob Serial Protocol
//!
//! This crate defines the UART protocol between the Tuneknob remote and the
//! media host it controls. Every message is a fixed five-byte frame:
//!
//! ```text
//! ┌───────┬────────┬───────┬──────────┬──────┐
//! │ START │ OPTION │ VALUE │ CHECKSUM │ STOP │
//! │ '0'   │ 1B     │ 1B    │ 1B       │ '0'  │
//! └───────┴────────┴───────┴──────────┴──────┘
//! ```
//!
//! The checksum is the wrapping sum of OPTION and VALUE. There is no
//! acknowledgement or retransmission in either direction.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod options;
pub mod sink;

pub use frame::{Frame, FrameError, FRAME_LEN, START_MARKER, STOP_MARKER};
pub use options::{IncomingCommand, OutgoingCommand, DEFAULT_VALUE};
pub use sink::FrameSink;
