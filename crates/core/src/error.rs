//! Error types for PPTX deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a presentation or assembling
/// the output package.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create or write the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The slide image bytes could not be decoded as a PNG.
    #[error("Failed to decode PNG image: {0}")]
    Decode(String),

    /// A builder or generator input was malformed.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// ZIP archive error while assembling the package.
    #[error("ZIP error: {0}")]
    Zip(String),
}
