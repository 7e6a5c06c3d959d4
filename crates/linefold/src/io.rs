//! `std::io` adapters for the byte-stream contracts.
//!
//! Available behind the `std` cargo feature so core-only consumers never pull
//! in the standard library.

use std::io::{self, Read, Write};

use crate::stream::{ByteSink, ByteSource};

/// A [`ByteSource`] pulling single bytes from any [`io::Read`].
///
/// Reads are unbuffered here; wrap the reader in a [`io::BufReader`] when the
/// underlying device makes per-byte reads expensive.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
}

impl<R: Read> ReadSource<R> {
    /// Adapt `reader` into a byte source.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Recover the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    type Error = io::Error;

    fn next_byte(&mut self) -> Result<Option<u8>, io::Error> {
        let mut byte = [0u8; 1];
        loop {
            return match self.reader.read(&mut byte) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
        }
    }
}

/// A [`ByteSink`] writing through any [`io::Write`].
#[derive(Debug)]
pub struct WriteSink<W> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Adapt `writer` into a byte sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer. Pending bytes are not flushed.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ByteSink for WriteSink<W> {
    type Error = io::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), io::Error> {
        self.writer.write_all(&[byte])
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }
}
