//! Shared state between Embassy tasks
//!
//! The input cells are written by exactly one task each and polled by the
//! dispatch task. The frame queues are split once at boot; each half is
//! moved into the task that owns that side.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use static_cell::StaticCell;

use tuneknob_core::input::Inputs;
use tuneknob_core::queue::{FrameConsumer, FrameProducer, FrameQueue, QUEUE_CAPACITY};

/// Outgoing queue depth: one pass sends at most three frames
pub const TX_QUEUE_CAPACITY: usize = 8;

/// Tick, press and analog cells
pub static INPUTS: Inputs = Inputs::new();

/// Frames received from the host, filled byte by byte by the RX task
static RX_QUEUE: StaticCell<FrameQueue<QUEUE_CAPACITY>> = StaticCell::new();

/// Frames waiting for the UART, filled by the dispatch task
static TX_QUEUE: StaticCell<FrameQueue<TX_QUEUE_CAPACITY>> = StaticCell::new();

/// Signal that the dispatch task queued outgoing frames
pub static TX_PENDING: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Both queues, split into their task-owned halves
pub struct QueueHalves {
    pub rx_producer: FrameProducer<'static, QUEUE_CAPACITY>,
    pub rx_consumer: FrameConsumer<'static, QUEUE_CAPACITY>,
    pub tx_producer: FrameProducer<'static, TX_QUEUE_CAPACITY>,
    pub tx_consumer: FrameConsumer<'static, TX_QUEUE_CAPACITY>,
}

/// Create and split both queues (call once at boot)
pub fn init_queues() -> QueueHalves {
    let (rx_producer, rx_consumer) = RX_QUEUE.init(FrameQueue::new()).split();
    let (tx_producer, tx_consumer) = TX_QUEUE.init(FrameQueue::new()).split();

    QueueHalves {
        rx_producer,
        rx_consumer,
        tx_producer,
        tx_consumer,
    }
}
