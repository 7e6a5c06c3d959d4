/// Line width used when none is configured, or when the configured width is
/// invalid.
pub const DEFAULT_WIDTH: usize = 80;

/// Word-buffer capacity used when none is configured.
pub const DEFAULT_WORD_CAPACITY: usize = 512;

/// Configuration for the line folder.
///
/// # Examples
///
/// ```rust
/// use linefold::FoldOptions;
///
/// let options = FoldOptions {
///     width: 40,
///     ..Default::default()
/// };
/// assert_eq!(options.word_capacity, 512);
/// ```
///
/// # Default
///
/// Width 80, word capacity 512.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldOptions {
    /// Target line width in characters.
    ///
    /// A width of zero is invalid configuration and is treated as
    /// [`DEFAULT_WIDTH`] rather than reported as an error.
    ///
    /// # Default
    ///
    /// `80`
    pub width: usize,

    /// Capacity of the word buffer.
    ///
    /// A word longer than this keeps only its first `word_capacity` bytes in
    /// the output; the excess input is still consumed, so the rest of the
    /// stream is unaffected.
    ///
    /// # Default
    ///
    /// `512`
    pub word_capacity: usize,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            word_capacity: DEFAULT_WORD_CAPACITY,
        }
    }
}

impl FoldOptions {
    /// Create options with the given width and the default word capacity.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// The width the composer actually uses: the configured width, or
    /// [`DEFAULT_WIDTH`] when the configured width is zero.
    pub(crate) fn effective_width(&self) -> usize {
        if self.width == 0 {
            DEFAULT_WIDTH
        } else {
            self.width
        }
    }
}
