//! Host UART receive task
//!
//! Feeds every received byte into the incoming frame queue. Framing and
//! validation happen on the dispatch side.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use tuneknob_core::queue::{FrameProducer, QUEUE_CAPACITY};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - sole producer of the incoming frame queue
#[embassy_executor::task]
pub async fn serial_rx_task(
    mut rx: BufferedUartRx,
    mut queue: FrameProducer<'static, QUEUE_CAPACITY>,
) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];
    let mut dropped = 0;

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    queue.enqueue_byte(byte);
                }

                let now_dropped = queue.dropped_frames();
                if now_dropped != dropped {
                    warn!(
                        "RX queue overflow, {} frame(s) dropped",
                        now_dropped.wrapping_sub(dropped)
                    );
                    dropped = now_dropped;
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
