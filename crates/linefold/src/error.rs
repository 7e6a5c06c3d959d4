use thiserror::Error;

/// Error produced while driving the folder loop.
///
/// The engine performs no retries and adds no classification of its own; the
/// first collaborator failure aborts the fold and propagates unchanged. Word
/// truncation is a defined degradation, not an error, and never appears here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FoldError<R, W> {
    /// The input collaborator failed.
    #[error("input stream error: {0}")]
    Source(R),
    /// The output collaborator failed.
    #[error("output stream error: {0}")]
    Sink(W),
}
