//! Stateless codecs for the built-in encodings.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use super::Codec;

// ------------------------------------------------------------------------------------------------
// Single-byte encodings
// ------------------------------------------------------------------------------------------------

/// ISO-8859-1: byte `b` maps to `U+00bb`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl Codec for Latin1 {
    fn name(&self) -> &str {
        "latin1"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

/// 7-bit ASCII. The high bit of every byte is cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl Codec for Ascii {
    fn name(&self) -> &str {
        "ascii"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| char::from(b & 0x7F)).collect()
    }
}

// ------------------------------------------------------------------------------------------------
// Variable-width encodings
// ------------------------------------------------------------------------------------------------

/// UTF-8 with lossy replacement.
///
/// Each maximal invalid sequence becomes one `U+FFFD`. A byte never yields
/// more than one UTF-16 unit (4-byte sequences yield a surrogate pair), so
/// the byte count is a safe upper bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    fn name(&self) -> &str {
        "utf8"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len
    }

    fn decoded_len(&self, bytes: &[u8]) -> usize {
        bytes
            .utf8_chunks()
            .map(|chunk| {
                let valid: usize = chunk.valid().chars().map(char::len_utf16).sum();
                valid + usize::from(!chunk.invalid().is_empty())
            })
            .sum()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// UTF-16 little-endian (`ucs2`).
///
/// A trailing odd byte is ignored. Unpaired surrogates are replaced with
/// `U+FFFD`, which keeps the output at exactly `n / 2` units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Le;

impl Codec for Utf16Le {
    fn name(&self) -> &str {
        "utf16le"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len / 2
    }

    fn decode(&self, bytes: &[u8]) -> String {
        let units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
        char::decode_utf16(units)
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

// ------------------------------------------------------------------------------------------------
// Expanding encodings
// ------------------------------------------------------------------------------------------------

/// Lowercase hexadecimal, two digits per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl Codec for Hex {
    fn name(&self) -> &str {
        "hex"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len.saturating_mul(2)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        hex::encode(bytes)
    }
}

/// Standard base64 alphabet with `=` padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Codec for Base64 {
    fn name(&self) -> &str {
        "base64"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len.div_ceil(3).saturating_mul(4)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }
}

/// URL-safe base64 alphabet without padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Url;

impl Codec for Base64Url {
    fn name(&self) -> &str {
        "base64url"
    }

    #[inline]
    fn max_decoded_len(&self, byte_len: usize) -> usize {
        let tail = match byte_len % 3 {
            0 => 0,
            1 => 2,
            _ => 3,
        };
        (byte_len / 3).saturating_mul(4).saturating_add(tail)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
