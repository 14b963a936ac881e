//! Codecs: byte-to-text conversion strategies.
//!
//! A [`Codec`] knows two things about an encoding: how to turn a byte slice
//! into text, and how long that text can get *before* doing the work. The
//! decoder relies on the second part to reject oversized requests without
//! allocating.
//!
//! # Built-in encodings
//!
//! | Encoding      | Names                                    | UTF-16 length of `n` bytes |
//! |---------------|------------------------------------------|----------------------------|
//! | `Utf8`        | `utf8`, `utf-8`                          | counted, at most `n`       |
//! | `Utf16Le`     | `ucs2`, `ucs-2`, `utf16le`, `utf-16le`   | `n / 2`                    |
//! | `Latin1`      | `latin1`, `binary`                       | `n`                        |
//! | `Ascii`       | `ascii`                                  | `n`                        |
//! | `Base64`      | `base64`                                 | `4 * ceil(n / 3)`          |
//! | `Base64Url`   | `base64url`                              | `ceil(4 * n / 3)`          |
//! | `Hex`         | `hex`                                    | `2 * n`                    |
//!
//! Custom encodings are added through [`CodecRegistry::register`].

#[cfg(test)]
mod tests;

mod builtin;
mod registry;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use builtin::{Ascii, Base64, Base64Url, Hex, Latin1, Utf8, Utf16Le};
pub use registry::CodecRegistry;

use crate::DecodeError;

// ------------------------------------------------------------------------------------------------
// Codec trait
// ------------------------------------------------------------------------------------------------

/// Converts raw bytes into text for one encoding.
///
/// Implementations must be pure: the same input always yields the same
/// output. Lengths are UTF-16 code units.
pub trait Codec: Send + Sync {
    /// Canonical encoding name, lowercase.
    fn name(&self) -> &str;

    /// Upper bound on the decoded length of `byte_len` input bytes.
    ///
    /// Must never undercount. Arithmetic should saturate rather than wrap.
    fn max_decoded_len(&self, byte_len: usize) -> usize;

    /// Exact decoded length of `bytes`, computed without building the text.
    ///
    /// The default is correct for encodings whose output length depends
    /// only on the input length.
    fn decoded_len(&self, bytes: &[u8]) -> usize {
        self.max_decoded_len(bytes.len())
    }

    /// Decodes `bytes` into text.
    fn decode(&self, bytes: &[u8]) -> String;
}

// ------------------------------------------------------------------------------------------------
// Built-in encoding tags
// ------------------------------------------------------------------------------------------------

/// The encodings every registry created with
/// [`CodecRegistry::with_builtins`] understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Latin1,
    Ascii,
    Base64,
    Base64Url,
    Hex,
}

impl Encoding {
    /// All built-in encodings.
    pub const ALL: [Encoding; 7] = [
        Encoding::Utf8,
        Encoding::Utf16Le,
        Encoding::Latin1,
        Encoding::Ascii,
        Encoding::Base64,
        Encoding::Base64Url,
        Encoding::Hex,
    ];

    /// Canonical name.
    pub fn name(self) -> &'static str {
        self.aliases()[0]
    }

    /// Every name this encoding is registered under, canonical name first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Encoding::Utf8 => &["utf8", "utf-8"],
            Encoding::Utf16Le => &["utf16le", "utf-16le", "ucs2", "ucs-2"],
            Encoding::Latin1 => &["latin1", "binary"],
            Encoding::Ascii => &["ascii"],
            Encoding::Base64 => &["base64"],
            Encoding::Base64Url => &["base64url"],
            Encoding::Hex => &["hex"],
        }
    }

    /// Looks up a built-in encoding by any of its names, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|enc| {
            enc.aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// The stateless codec implementing this encoding.
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Encoding::Utf8 => &Utf8,
            Encoding::Utf16Le => &Utf16Le,
            Encoding::Latin1 => &Latin1,
            Encoding::Ascii => &Ascii,
            Encoding::Base64 => &Base64,
            Encoding::Base64Url => &Base64Url,
            Encoding::Hex => &Hex,
        }
    }

    /// A shared handle to the codec, for registries.
    pub fn shared_codec(self) -> Arc<dyn Codec> {
        match self {
            Encoding::Utf8 => Arc::new(Utf8),
            Encoding::Utf16Le => Arc::new(Utf16Le),
            Encoding::Latin1 => Arc::new(Latin1),
            Encoding::Ascii => Arc::new(Ascii),
            Encoding::Base64 => Arc::new(Base64),
            Encoding::Base64Url => Arc::new(Base64Url),
            Encoding::Hex => Arc::new(Hex),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DecodeError::UnknownEncoding(s.to_string()))
    }
}
