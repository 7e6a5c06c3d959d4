//! The streaming line folder implementation.
//!
//! This module provides the [`LineFolder`], which pulls bytes from a
//! [`ByteSource`], reflows them into lines of bounded width, and writes the
//! result to a [`ByteSink`].
//!
//! # Examples
//!
//! ```rust
//! use linefold::{FoldOptions, fold_slice};
//!
//! let folded = fold_slice(b"the quick brown fox\n", &FoldOptions::new(10));
//! assert_eq!(folded, b"the quick \nbrown fox \n");
//! ```

use alloc::vec::Vec;

use crate::{
    error::FoldError,
    options::FoldOptions,
    stream::{ByteSink, ByteSource, SliceSource},
    word_buffer::WordBuffer,
};

const NEWLINE: u8 = b'\n';

/// Separator bytes delimit words; runs of them coalesce into the single
/// separator emitted after each word.
#[inline]
fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

// ------------------------------------------------------------------------------------------------
// Word scanner
// ------------------------------------------------------------------------------------------------

/// One unit produced by the word scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// The source is exhausted.
    Eof,
    /// An embedded newline. Never carries word bytes: a bare newline cannot
    /// be part of any word.
    Newline,
    /// A word of `len` stored bytes (capped at the buffer capacity).
    Word { len: usize },
}

/// Pulls bytes from the source, skips inter-word whitespace, and assembles
/// the next token into the bounded word buffer.
#[derive(Debug)]
pub(crate) struct WordScanner<S> {
    source: S,
    word: WordBuffer,
    /// Single-slot pushback: a boundary byte consumed while terminating the
    /// previous word, re-examined by the very next scan.
    pushback: Option<u8>,
}

impl<S: ByteSource> WordScanner<S> {
    pub(crate) fn new(source: S, word_capacity: usize) -> Self {
        Self {
            source,
            word: WordBuffer::with_capacity(word_capacity),
            pushback: None,
        }
    }

    /// Bytes of the most recently scanned word.
    pub(crate) fn word(&self) -> &[u8] {
        self.word.as_bytes()
    }

    /// Produce the next unit from the source.
    ///
    /// Leading separators are consumed and discarded. A separator or newline
    /// terminating a word is not consumed here: it lands in the pushback
    /// slot, and the next scan either discards it with the leading run or
    /// reports it as [`Token::Newline`]. End of input stores nothing.
    pub(crate) fn scan(&mut self) -> Result<Token, S::Error> {
        self.word.clear();

        // The pushback slot is consumed before any fresh input.
        let mut byte = match self.pushback.take() {
            Some(byte) => Some(byte),
            None => self.source.next_byte()?,
        };

        // Skip the leading separator run.
        let mut current = loop {
            match byte {
                None => return Ok(Token::Eof),
                Some(NEWLINE) => return Ok(Token::Newline),
                Some(b) if is_separator(b) => byte = self.source.next_byte()?,
                Some(b) => break b,
            }
        };

        // Accumulate until a boundary byte or end of input.
        loop {
            self.word.push(current);
            match self.source.next_byte()? {
                None => break,
                Some(b) if is_separator(b) || b == NEWLINE => {
                    self.pushback = Some(b);
                    break;
                }
                Some(b) => current = b,
            }
        }

        Ok(Token::Word {
            len: self.word.len(),
        })
    }
}

// ------------------------------------------------------------------------------------------------
// Line composer
// ------------------------------------------------------------------------------------------------

/// The streaming line folder.
///
/// `LineFolder` pulls words from its source and decides, one word at a time,
/// whether the word extends the current output line or forces a new one.
/// Explicit newlines in the input pass through verbatim and reset the line
/// budget; runs of spaces and tabs coalesce into the single separator emitted
/// after each word. A word longer than the whole line width is emitted
/// unsplit, overflowing the width.
///
/// # Examples
///
/// ```rust
/// use linefold::{FoldOptions, LineFolder, SliceSource};
///
/// let mut out = Vec::new();
/// let mut folder = LineFolder::new(
///     SliceSource::new(b"ab cd ef"),
///     &mut out,
///     FoldOptions::new(5),
/// );
/// folder.fold().unwrap();
/// assert_eq!(out, b"ab \ncd ef ");
/// ```
#[derive(Debug)]
pub struct LineFolder<S, W> {
    scanner: WordScanner<S>,
    sink: W,
    options: FoldOptions,
}

impl<S: ByteSource, W: ByteSink> LineFolder<S, W> {
    /// Create a folder over the given collaborators.
    pub fn new(source: S, sink: W, options: FoldOptions) -> Self {
        Self {
            scanner: WordScanner::new(source, options.word_capacity),
            sink,
            options,
        }
    }

    /// Drive the loop to end of input, then flush the sink.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator failure unchanged. No retries are
    /// attempted and the stream is in an unspecified position afterwards.
    pub fn fold(&mut self) -> Result<(), FoldError<S::Error, W::Error>> {
        let width = self.options.effective_width();
        // `left == width` exactly when nothing has been emitted on the
        // current line.
        let mut left = width;

        loop {
            match self.scanner.scan().map_err(FoldError::Source)? {
                Token::Eof => break,
                Token::Newline => {
                    self.write(NEWLINE)?;
                    left = width;
                }
                Token::Word { len } => {
                    if len + 1 > left {
                        self.write(NEWLINE)?;
                        self.write_word()?;
                        // The trailing separator is already accounted for by
                        // this reset convention; not subtracted again.
                        left = width.saturating_sub(len);
                    } else {
                        self.write_word()?;
                        left -= len + 1;
                    }
                }
            }
        }

        self.sink.flush().map_err(FoldError::Sink)
    }

    /// Consume the folder and hand back the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn write(&mut self, byte: u8) -> Result<(), FoldError<S::Error, W::Error>> {
        self.sink.write_byte(byte).map_err(FoldError::Sink)
    }

    /// Emit the scanned word followed by its single trailing separator.
    fn write_word(&mut self) -> Result<(), FoldError<S::Error, W::Error>> {
        for &byte in self.scanner.word() {
            self.sink.write_byte(byte).map_err(FoldError::Sink)?;
        }
        self.sink.write_byte(b' ').map_err(FoldError::Sink)
    }
}

/// Fold a byte slice in memory.
///
/// This is a convenience wrapper pairing a [`SliceSource`] with a `Vec` sink.
///
/// # Examples
///
/// ```rust
/// use linefold::{FoldOptions, fold_slice};
///
/// // Separator runs coalesce; separator-only input folds to nothing.
/// assert_eq!(fold_slice(b"a \t b", &FoldOptions::default()), b"a b ");
/// assert_eq!(fold_slice(b" \t ", &FoldOptions::default()), b"");
/// ```
#[must_use]
pub fn fold_slice(input: &[u8], options: &FoldOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len().saturating_add(8));
    let mut folder = LineFolder::new(SliceSource::new(input), &mut out, *options);
    match folder.fold() {
        Ok(()) => {}
        Err(FoldError::Source(never) | FoldError::Sink(never)) => match never {},
    }
    out
}
