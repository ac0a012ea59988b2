use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors returned by the codec and generator functions.
///
/// Every variant is local to a single call: nothing here is retried and
/// nothing leaves partial output behind.
#[derive(Debug, Error)]
pub enum DevError {
    /// Decode input contains characters outside the Base64 alphabet,
    /// misplaced padding, or a length that cannot be a Base64 string.
    #[error("invalid base64 input")]
    InvalidBase64,

    /// Decoded bytes are not valid UTF-8 text.
    #[error("decoded data is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Algorithm is recognised but deliberately not implemented (MD5).
    #[error("{0} not available")]
    UnsupportedAlgorithm(String),

    #[error("invalid count {count}: must be between {min} and {max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// A textual option value did not name any known variant.
    #[error("unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DevError>;

/// Validate a requested batch size against an inclusive range.
pub(crate) fn check_count(count: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&count) {
        Ok(())
    } else {
        Err(DevError::InvalidCount { count, min, max })
    }
}
