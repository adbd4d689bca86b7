//! Byte-append primitive shared by every frame destination

/// Anything a frame can be written into one byte at a time
///
/// Frame queue producers implement this, so frames headed for the UART and
/// frames arriving from it travel through the same primitive.
pub trait FrameSink {
    /// Append a single byte
    fn push_byte(&mut self, byte: u8);
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn push_byte(&mut self, byte: u8) {
        (**self).push_byte(byte);
    }
}
