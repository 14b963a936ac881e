//! # stringbytes
//!
//! Bounded conversion of raw byte ranges into text. Every conversion is
//! checked against a maximum text length supplied by the host runtime:
//! a request that would produce a longer text fails with
//! [`DecodeError::TextTooLong`] *before* the text is built, and a text that
//! violates the limit is never returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use stringbytes::{BoundedDecoder, DecoderConfig, TextLengthLimit};
//!
//! let decoder = BoundedDecoder::new(DecoderConfig {
//!     max_text_len: TextLengthLimit::new(4),
//!     ..DecoderConfig::default()
//! })
//! .unwrap();
//!
//! let buf = b"hello";
//!
//! // Five latin1 characters do not fit in a limit of four.
//! let err = decoder.decode(buf, .., "latin1").unwrap_err();
//! assert_eq!(err.code(), "ERR_STRING_TOO_LONG");
//! assert_eq!(err.to_string(), "Cannot create a string longer than 0x4 characters");
//!
//! // Trimming one byte from either end fits exactly.
//! assert_eq!(decoder.decode(buf, 1.., "latin1").unwrap().as_str(), "ello");
//! assert_eq!(decoder.decode(buf, ..4, "latin1").unwrap().len(), 4);
//! ```
//!
//! ## Features
//!
//! - **Inclusive limit**: a text of exactly `limit` units is allowed.
//! - **No partial results**: either the full text or an error, never a
//!   truncated text.
//! - **Allocation-free rejection**: oversized requests are rejected from the
//!   codec's length estimate, or from a counting pass for variable-width
//!   encodings.
//! - **Pluggable codecs**: `utf8`, `utf16le`/`ucs2`, `latin1`/`binary`,
//!   `ascii`, `base64`, `base64url` and `hex` are built in; more can be
//!   registered by name.
//! - **Per-backend limits**: the limit is injected per decoder, or installed
//!   once for the whole process.

pub mod codec;
pub mod decoder;
pub mod limit;
pub mod range;

use thiserror::Error;

pub use codec::{Codec, CodecRegistry, Encoding};
pub use decoder::{BoundedDecoder, DecodedText};
pub use limit::TextLengthLimit;
pub use range::ByteRange;

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Configuration for a [`BoundedDecoder`].
///
/// All fields have sensible defaults via [`DecoderConfig::default()`].
/// The configuration is validated when passed to [`BoundedDecoder::new`].
///
/// # Example
///
/// ```rust
/// use stringbytes::{DecoderConfig, TextLengthLimit};
///
/// // Process-wide limit, utf8 by default
/// let config = DecoderConfig::default();
///
/// // Or customize
/// let config = DecoderConfig {
///     max_text_len: TextLengthLimit::V8_LEGACY,
///     default_encoding: "latin1".into(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Maximum length, in UTF-16 code units, of any decoded text.
    ///
    /// Default: [`TextLengthLimit::process()`]. Must be ≥ 1.
    pub max_text_len: TextLengthLimit,

    /// Encoding used by [`BoundedDecoder::decode_default`].
    ///
    /// Default: `"utf8"`. Must be registered in the decoder's registry.
    pub default_encoding: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_text_len: TextLengthLimit::process(),
            default_encoding: Encoding::Utf8.name().to_string(),
        }
    }
}

impl DecoderConfig {
    /// Validates all configuration parameters against `registry`.
    fn validate(&self, registry: &CodecRegistry) -> Result<(), ConfigError> {
        if self.max_text_len.get() == 0 {
            return Err(ConfigError::InvalidConfig(
                "max_text_len must be >= 1".into(),
            ));
        }
        if !registry.contains(&self.default_encoding) {
            return Err(ConfigError::InvalidConfig(format!(
                "default_encoding {:?} is not registered",
                self.default_encoding
            )));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Error types
// ------------------------------------------------------------------------------------------------

/// Errors returned while building a decoder or installing a limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// [`TextLengthLimit::install`] was called after a limit was already set.
    #[error("text length limit already installed ({installed})")]
    LimitAlreadyInstalled {
        /// The limit currently in effect.
        installed: TextLengthLimit,
    },
}

/// Errors returned by decode calls.
///
/// None of these are transient; retrying the same call fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The decoded text would exceed the text length limit.
    ///
    /// Recoverable by requesting a smaller range.
    #[error("Cannot create a string longer than {limit:#x} characters")]
    TextTooLong {
        /// Decoded length that was requested (an upper bound when the
        /// rejection came from the estimate).
        requested: usize,
        /// The limit in effect.
        limit: usize,
    },

    /// `start > end` or `end` past the end of the buffer.
    #[error("byte range {start}..{end} is out of bounds for a buffer of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// No codec is registered under this name.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// Classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TextTooLong,
    InvalidRange,
    UnknownEncoding,
}

impl ErrorKind {
    /// Stable error code string.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::TextTooLong => "ERR_STRING_TOO_LONG",
            ErrorKind::InvalidRange => "ERR_OUT_OF_RANGE",
            ErrorKind::UnknownEncoding => "ERR_UNKNOWN_ENCODING",
        }
    }
}

impl DecodeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::TextTooLong { .. } => ErrorKind::TextTooLong,
            DecodeError::InvalidRange { .. } => ErrorKind::InvalidRange,
            DecodeError::UnknownEncoding(_) => ErrorKind::UnknownEncoding,
        }
    }

    /// Returns the stable error code, e.g. `"ERR_STRING_TOO_LONG"`.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
