//! The bounded decoder.
//!
//! [`BoundedDecoder`] turns a byte range into a [`DecodedText`] using a named
//! codec and refuses to produce anything longer than its
//! [`TextLengthLimit`].
//!
//! # Decode pipeline
//!
//! 1. Resolve the encoding name through the [`CodecRegistry`].
//! 2. Validate the range against the buffer ([`ByteRange::resolve`]).
//! 3. Ask the codec for an upper bound on the output length.
//! 4. If the bound exceeds the limit, count the exact length without
//!    building the text; reject if that still exceeds the limit.
//! 5. Decode, then re-check the produced length. A codec that overshoots
//!    its own estimate is treated as a rejection, not as a result.
//!
//! Steps 3 and 4 mean an oversized request never allocates its output.
//!
//! # Thread safety
//!
//! `BoundedDecoder` holds no mutable state and is `Send + Sync`; share it
//! through `&` or `Arc` and decode from as many threads as needed.

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::RangeBounds;

use tracing::{debug, error, info, trace, warn};

use crate::codec::{Codec, CodecRegistry, Encoding};
use crate::limit::TextLengthLimit;
use crate::range::ByteRange;
use crate::{ConfigError, DecodeError, DecoderConfig};

// ------------------------------------------------------------------------------------------------
// DecodedText
// ------------------------------------------------------------------------------------------------

/// Immutable result of a successful decode.
///
/// [`len`](DecodedText::len) is measured in UTF-16 code units and never
/// exceeds the limit of the decoder that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecodedText {
    text: String,
    units: usize,
}

impl DecodedText {
    /// Length in UTF-16 code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units == 0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the text, returning the owned string.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for DecodedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DecodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for DecodedText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for DecodedText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl From<DecodedText> for String {
    fn from(text: DecodedText) -> Self {
        text.text
    }
}

/// UTF-16 length of `s`.
#[inline]
fn utf16_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().map(char::len_utf16).sum()
    }
}

// ------------------------------------------------------------------------------------------------
// BoundedDecoder
// ------------------------------------------------------------------------------------------------

/// Converts byte ranges to text under a maximum length.
///
/// # Example
///
/// ```rust
/// use stringbytes::{BoundedDecoder, DecoderConfig, TextLengthLimit};
///
/// let decoder = BoundedDecoder::new(DecoderConfig {
///     max_text_len: TextLengthLimit::new(8),
///     ..DecoderConfig::default()
/// })
/// .unwrap();
///
/// let text = decoder.decode(&[0xde, 0xad, 0xbe, 0xef], .., "hex").unwrap();
/// assert_eq!(text, "deadbeef");
///
/// // Five bytes would need ten hex digits.
/// assert!(decoder.decode(&[0; 5], .., "hex").is_err());
/// ```
pub struct BoundedDecoder {
    limit: TextLengthLimit,
    registry: CodecRegistry,
    default_encoding: String,
}

impl fmt::Debug for BoundedDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedDecoder")
            .field("limit", &self.limit)
            .field("default_encoding", &self.default_encoding)
            .finish_non_exhaustive()
    }
}

impl BoundedDecoder {
    /// Builds a decoder with the built-in codecs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if any configuration parameter
    /// is out of range.
    pub fn new(config: DecoderConfig) -> Result<Self, ConfigError> {
        Self::with_registry(config, CodecRegistry::with_builtins())
    }

    /// Builds a decoder resolving encoding names through `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if the limit is zero or the
    /// default encoding is not in `registry`.
    pub fn with_registry(
        config: DecoderConfig,
        registry: CodecRegistry,
    ) -> Result<Self, ConfigError> {
        config.validate(&registry)?;

        info!(
            limit = %config.max_text_len,
            default_encoding = %config.default_encoding,
            codecs = registry.len(),
            "decoder created"
        );

        Ok(Self {
            limit: config.max_text_len,
            registry,
            default_encoding: config.default_encoding,
        })
    }

    /// The limit this decoder enforces.
    pub fn limit(&self) -> TextLengthLimit {
        self.limit
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    pub fn default_encoding(&self) -> &str {
        &self.default_encoding
    }

    // --------------------------------------------------------------------------------------------
    // Decode operations
    // --------------------------------------------------------------------------------------------

    /// Decodes `range` of `buf` with the codec registered as `encoding`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownEncoding`] if `encoding` is not registered.
    /// - [`DecodeError::InvalidRange`] if `range` does not fit in `buf`.
    /// - [`DecodeError::TextTooLong`] if the text would exceed the limit.
    pub fn decode<R: RangeBounds<usize>>(
        &self,
        buf: &[u8],
        range: R,
        encoding: &str,
    ) -> Result<DecodedText, DecodeError> {
        let codec = self.registry.resolve(encoding)?;
        self.decode_bounded(buf, &range, codec.as_ref())
    }

    /// Like [`decode`](Self::decode), using the configured default encoding.
    pub fn decode_default<R: RangeBounds<usize>>(
        &self,
        buf: &[u8],
        range: R,
    ) -> Result<DecodedText, DecodeError> {
        self.decode(buf, range, &self.default_encoding)
    }

    /// Like [`decode`](Self::decode) for a built-in encoding, bypassing the
    /// registry.
    pub fn decode_with<R: RangeBounds<usize>>(
        &self,
        buf: &[u8],
        range: R,
        encoding: Encoding,
    ) -> Result<DecodedText, DecodeError> {
        self.decode_bounded(buf, &range, encoding.codec())
    }

    /// Exact decoded length of `range` in `encoding`, without building the
    /// text and without applying the limit.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnknownEncoding`] or [`DecodeError::InvalidRange`].
    pub fn measure<R: RangeBounds<usize>>(
        &self,
        buf: &[u8],
        range: R,
        encoding: &str,
    ) -> Result<usize, DecodeError> {
        let codec = self.registry.resolve(encoding)?;
        let range = ByteRange::resolve(&range, buf.len())?;
        Ok(codec.decoded_len(range.slice(buf)))
    }

    // --------------------------------------------------------------------------------------------
    // Internal helpers
    // --------------------------------------------------------------------------------------------

    fn decode_bounded<R: RangeBounds<usize>>(
        &self,
        buf: &[u8],
        range: &R,
        codec: &dyn Codec,
    ) -> Result<DecodedText, DecodeError> {
        let range = ByteRange::resolve(range, buf.len())?;
        if range.is_empty() {
            return Ok(DecodedText::default());
        }

        let bytes = range.slice(buf);
        let estimate = codec.max_decoded_len(bytes.len());

        debug!(
            encoding = codec.name(),
            start = range.start(),
            end = range.end(),
            estimate,
            limit = self.limit.get(),
            "decoding byte range"
        );

        if !self.limit.allows(estimate) {
            trace!(
                encoding = codec.name(),
                estimate,
                "estimate exceeds limit, counting exact length"
            );
            let exact = codec.decoded_len(bytes);
            if let Err(e) = self.limit.check(exact) {
                warn!(
                    encoding = codec.name(),
                    requested = exact,
                    limit = self.limit.get(),
                    "text length limit exceeded"
                );
                return Err(e);
            }
        }

        let text = codec.decode(bytes);
        let units = utf16_len(&text);

        if units > estimate {
            error!(
                encoding = codec.name(),
                estimate,
                produced = units,
                "codec produced more output than it estimated"
            );
            return Err(DecodeError::TextTooLong {
                requested: units,
                limit: self.limit.get(),
            });
        }
        self.limit.check(units)?;

        Ok(DecodedText { text, units })
    }
}
