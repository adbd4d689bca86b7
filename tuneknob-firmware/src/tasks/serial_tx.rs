//! Host UART transmit task
//!
//! Drains the outgoing frame queue to the UART so the dispatch task never
//! waits on the serial link.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use tuneknob_core::queue::FrameConsumer;

use crate::channels::{TX_PENDING, TX_QUEUE_CAPACITY};

/// Serial TX task - sole consumer of the outgoing frame queue
#[embassy_executor::task]
pub async fn serial_tx_task(
    mut tx: BufferedUartTx,
    mut queue: FrameConsumer<'static, TX_QUEUE_CAPACITY>,
) {
    info!("Serial TX task started");

    loop {
        while let Some(frame) = queue.try_receive() {
            match tx.write_all(frame.as_bytes()).await {
                Ok(()) => trace!("TX: {:x}", frame.as_bytes()),
                Err(e) => warn!("Failed to send frame: {:?}", e),
            }
        }

        TX_PENDING.wait().await;
    }
}
