//! Streaming greedy line folding for byte streams.
//!
//! `linefold` reflows a stream of bytes into lines of a bounded width,
//! preserving explicit newlines and coalescing runs of spaces and tabs into
//! the single separator emitted after each word. The engine pulls one byte at
//! a time from a [`ByteSource`], assembles words in a bounded buffer, and
//! writes the folded stream to a [`ByteSink`], so the same core drives
//! anything from a pipe filter to a serial console.
//!
//! ```rust
//! use linefold::{FoldOptions, fold_slice};
//!
//! let folded = fold_slice(b"the quick brown fox\n", &FoldOptions::new(10));
//! assert_eq!(folded, b"the quick \nbrown fox \n");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod folder;
mod options;
mod stream;
mod word_buffer;

#[cfg(feature = "std")]
mod io;

#[cfg(test)]
mod tests;

pub use error::FoldError;
pub use folder::{LineFolder, fold_slice};
#[cfg(feature = "std")]
pub use io::{ReadSource, WriteSink};
pub use options::{DEFAULT_WIDTH, DEFAULT_WORD_CAPACITY, FoldOptions};
pub use stream::{ByteSink, ByteSource, SliceSource};
