//! Fixed-capacity frame ring shared between an interrupt producer and the
//! main-loop consumer.
//!
//! The producer appends raw bytes; every fifth byte completes a frame and
//! advances the write slot. The consumer only ever sees complete frames.
//! Every state transition happens inside a critical section, so a dequeue
//! interrupted by an enqueue cannot observe a torn full/empty state.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tuneknob_protocol::{Frame, FrameSink, FRAME_LEN};

/// Number of frame slots in the receive queue
pub const QUEUE_CAPACITY: usize = 4;

#[derive(Debug)]
struct RingState<const N: usize> {
    slots: [[u8; FRAME_LEN]; N],
    write_frame: usize,
    write_byte: usize,
    read_frame: usize,
    full: bool,
    dropped: u32,
}

impl<const N: usize> RingState<N> {
    const fn new() -> Self {
        Self {
            slots: [[0; FRAME_LEN]; N],
            write_frame: 0,
            write_byte: 0,
            read_frame: 0,
            full: false,
            dropped: 0,
        }
    }

    fn is_empty(&self) -> bool {
        !self.full && self.write_frame == self.read_frame
    }

    fn push_byte(&mut self, byte: u8) {
        // Starting a frame with every slot unread: the oldest frame gives way.
        if self.write_byte == 0 && self.full {
            self.read_frame = (self.read_frame + 1) % N;
            self.full = false;
            self.dropped = self.dropped.wrapping_add(1);
        }

        self.slots[self.write_frame][self.write_byte] = byte;
        self.write_byte += 1;

        if self.write_byte == FRAME_LEN {
            self.write_byte = 0;
            self.write_frame = (self.write_frame + 1) % N;
            if self.write_frame == self.read_frame {
                self.full = true;
            }
        }
    }

    fn pop_frame(&mut self) -> Option<Frame> {
        if self.is_empty() {
            return None;
        }

        let frame = Frame::from_bytes(self.slots[self.read_frame]);
        if self.read_frame == self.write_frame {
            self.full = false;
        }
        self.read_frame = (self.read_frame + 1) % N;

        Some(frame)
    }
}

/// Bounded single-producer/single-consumer frame queue
///
/// Overflow policy: no backpressure. When all `N` slots hold unread frames
/// and the producer starts a new frame, the oldest unread frame is dropped.
/// Delivery stays in arrival order.
///
/// `N` must be at least 1.
pub struct FrameQueue<const N: usize = QUEUE_CAPACITY> {
    state: Mutex<CriticalSectionRawMutex, RefCell<RingState<N>>>,
}

impl<const N: usize> Default for FrameQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(RingState::new())),
        }
    }

    /// Split into the producer and consumer halves
    ///
    /// Taking `&mut self` guarantees a single producer and a single consumer
    /// for as long as the halves are alive.
    pub fn split(&mut self) -> (FrameProducer<'_, N>, FrameConsumer<'_, N>) {
        let queue: &Self = self;
        (FrameProducer { queue }, FrameConsumer { queue })
    }

    fn enqueue_byte(&self, byte: u8) {
        self.with_state(|state| state.push_byte(byte));
    }

    fn dequeue_frame(&self) -> Option<Frame> {
        self.with_state(|state| state.pop_frame())
    }

    fn is_empty(&self) -> bool {
        self.with_state(|state| state.is_empty())
    }

    fn is_full(&self) -> bool {
        self.with_state(|state| state.full)
    }

    /// Bytes of the frame currently being assembled
    #[cfg(test)]
    fn pending_bytes(&self) -> usize {
        self.with_state(|state| state.write_byte)
    }

    fn dropped_frames(&self) -> u32 {
        self.with_state(|state| state.dropped)
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut RingState<N>) -> R) -> R {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            f(&mut *state)
        })
    }
}

/// Write half of a [`FrameQueue`]
pub struct FrameProducer<'a, const N: usize = QUEUE_CAPACITY> {
    queue: &'a FrameQueue<N>,
}

impl<'a, const N: usize> FrameProducer<'a, N> {
    /// Append one received byte
    pub fn enqueue_byte(&mut self, byte: u8) {
        self.queue.enqueue_byte(byte);
    }

    /// Append a whole frame
    ///
    /// Never rejects: on overflow the oldest unread frame is dropped.
    pub fn try_send(&mut self, frame: &Frame) {
        frame.write_to(self);
    }

    /// Frames lost to overflow since creation
    pub fn dropped_frames(&self) -> u32 {
        self.queue.dropped_frames()
    }
}

impl<'a, const N: usize> FrameSink for FrameProducer<'a, N> {
    fn push_byte(&mut self, byte: u8) {
        self.enqueue_byte(byte);
    }
}

/// Read half of a [`FrameQueue`]
pub struct FrameConsumer<'a, const N: usize = QUEUE_CAPACITY> {
    queue: &'a FrameQueue<N>,
}

impl<'a, const N: usize> FrameConsumer<'a, N> {
    /// Take the oldest complete frame, if any
    pub fn dequeue_frame(&mut self) -> Option<Frame> {
        self.queue.dequeue_frame()
    }

    /// Channel-style alias for [`FrameConsumer::dequeue_frame`]
    pub fn try_receive(&mut self) -> Option<Frame> {
        self.dequeue_frame()
    }

    /// True when no complete frame is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// True when all slots hold unread frames
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }
}
