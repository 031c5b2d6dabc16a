/*!
 * Error types for the subcue library.
 *
 * This module contains custom error types for the different parts of the
 * library, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised when input text does not match an expected grammar.
///
/// Raised by the timecode codec when a string does not parse as a duration
/// expression, and by the format converters when they receive text they
/// cannot interpret. A `FormatError` is always surfaced to the caller;
/// values are never silently coerced to a default time.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The string does not parse as a duration expression
    #[error("Invalid timecode: {0:?}")]
    InvalidTimecode(String),

    /// A converter received text it cannot interpret
    #[error("Unrecognized subtitle content: {0}")]
    Unrecognized(String),
}

/// Errors raised by the ingestion adapters.
///
/// Underlying I/O and transport failures are propagated unchanged (no
/// wrapping, no retry); the caller is responsible for any user-facing
/// message.
#[derive(Error, Debug)]
pub enum IngestError {
    /// File read failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Network transport failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Ingested text failed format conversion
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}
