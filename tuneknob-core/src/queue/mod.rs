//! Frame queues bridging interrupt and main-loop contexts

pub mod ring;

pub use ring::{FrameConsumer, FrameProducer, FrameQueue, QUEUE_CAPACITY};
