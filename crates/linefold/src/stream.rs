//! Byte-stream collaborator contracts.
//!
//! The folding engine is device-blind: everything it reads arrives through
//! [`ByteSource`] and everything it emits leaves through [`ByteSink`]. The
//! associated error types keep device failures opaque to the engine, which
//! propagates them without classifying or retrying.

use alloc::vec::Vec;
use core::convert::Infallible;

/// A blocking, pull-based source of bytes.
///
/// `Ok(None)` signals a clean end of stream; after that the source is
/// exhausted and will not be polled again. A call may block indefinitely if
/// the underlying device never produces a byte.
pub trait ByteSource {
    /// Error produced by the underlying device or buffer.
    type Error;

    /// Pull the next byte, blocking until one is available or the stream
    /// ends.
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// A blocking sink of bytes.
///
/// Whether writes are buffered is the sink's business; [`flush`] guarantees
/// everything written so far is externally visible before it returns.
///
/// [`flush`]: ByteSink::flush
pub trait ByteSink {
    /// Error produced by the underlying device or buffer.
    type Error;

    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Make all previously written bytes externally visible.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).next_byte()
    }
}

impl<W: ByteSink + ?Sized> ByteSink for &mut W {
    type Error = W::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// A [`ByteSource`] reading from a borrowed byte slice.
///
/// # Examples
///
/// ```rust
/// use linefold::{ByteSource, SliceSource};
///
/// let mut source = SliceSource::new(b"hi");
/// assert_eq!(source.next_byte(), Ok(Some(b'h')));
/// assert_eq!(source.next_byte(), Ok(Some(b'i')));
/// assert_eq!(source.next_byte(), Ok(None));
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source over `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn next_byte(&mut self) -> Result<Option<u8>, Infallible> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Infallible> {
        self.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
