use thiserror::Error;
use std::string::FromUtf8Error;

/// Unified error type for the emvqr library.
///
/// Only payload construction reports errors. Lookup and checksum
/// verification scan untrusted data and fold every structural problem into
/// their negative result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tag is not exactly two ASCII decimal digits.
    #[error("Invalid Tag: {0:?} is not two decimal digits")]
    InvalidTag(String),

    /// An encoded value or sub-tree does not fit a two-digit length.
    #[error("Invalid Length: value of tag {tag} is {length} bytes, maximum is 99")]
    InvalidLength { tag: String, length: usize },

    /// An amount cannot be rendered as a transaction amount.
    #[error("Invalid Amount: {0}")]
    InvalidAmount(String),

    /// Error related to the encode buffer.
    #[error("Codec Error: {0}")]
    CodecError(String),
}

/// A specialized `Result` type for emvqr operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        // Every encoded piece comes from a &str, so this only fires on a codec bug
        Error::CodecError(format!("Encoded payload is not UTF-8: {}", err))
    }
}
