//! Bounded buffer for the word under construction.

use alloc::vec::Vec;
use core::fmt;

use bstr::ByteSlice;

/// Holds at most `capacity` bytes of the current word.
///
/// Bytes pushed past capacity are silently dropped. Callers keep consuming
/// their input regardless, so only the stored word is truncated, never the
/// stream accounting.
pub(crate) struct WordBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl WordBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Append one byte, dropping it if the buffer is full.
    pub(crate) fn push(&mut self, byte: u8) {
        if self.bytes.len() < self.capacity {
            self.bytes.push(byte);
        }
    }

    /// Stored length: capped at capacity, not the number of bytes consumed.
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for WordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordBuffer")
            .field("word", &self.bytes.as_bstr())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::WordBuffer;

    #[test]
    fn push_past_capacity_drops_bytes() {
        let mut buf = WordBuffer::with_capacity(4);
        for &b in b"abcdefgh" {
            buf.push(b);
        }
        assert_eq!(buf.as_bytes(), b"abcd");
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn clear_makes_room_again() {
        let mut buf = WordBuffer::with_capacity(2);
        buf.push(b'x');
        buf.push(b'y');
        buf.push(b'z');
        buf.clear();
        buf.push(b'a');
        assert_eq!(buf.as_bytes(), b"a");
    }
}
