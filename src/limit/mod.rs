//! Maximum text length enforced by the decoder.
//!
//! The host runtime decides how long a single text object may be. The value
//! differs between backends (and between 32- and 64-bit builds of the same
//! backend), so it is never hard-coded into the decoding path. Instead it is
//! injected through [`DecoderConfig`](crate::DecoderConfig), or installed once
//! for the whole process via [`TextLengthLimit::install`].
//!
//! Lengths are measured in UTF-16 code units, the unit the host's string
//! representation counts in.


use std::fmt;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::{ConfigError, DecodeError};

/// Process-wide limit, written at most once.
static PROCESS_LIMIT: OnceLock<TextLengthLimit> = OnceLock::new();

// ------------------------------------------------------------------------------------------------
// TextLengthLimit
// ------------------------------------------------------------------------------------------------

/// Upper bound (inclusive) on the length of any decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextLengthLimit(usize);

impl TextLengthLimit {
    /// V8 on 64-bit hosts: `(1 << 29) - 24` (`0x1fffffe8`).
    pub const V8: TextLengthLimit = TextLengthLimit((1 << 29) - 24);

    /// V8 on 32-bit hosts and older releases: `(1 << 28) - 16` (`0x0ffffff0`).
    pub const V8_LEGACY: TextLengthLimit = TextLengthLimit((1 << 28) - 16);

    /// Wraps a raw limit in UTF-16 code units.
    ///
    /// A zero limit is representable but rejected by
    /// [`DecoderConfig::validate`](crate::DecoderConfig).
    pub const fn new(units: usize) -> Self {
        Self(units)
    }

    /// Returns the limit in UTF-16 code units.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the process-wide limit, or [`TextLengthLimit::V8`] if none has
    /// been installed.
    pub fn process() -> Self {
        PROCESS_LIMIT.get().copied().unwrap_or(Self::V8)
    }

    /// Installs the process-wide limit.
    ///
    /// Only the first call succeeds. Later calls leave the installed value in
    /// place and return [`ConfigError::LimitAlreadyInstalled`].
    pub fn install(limit: TextLengthLimit) -> Result<(), ConfigError> {
        if limit.0 == 0 {
            return Err(ConfigError::InvalidConfig(
                "text length limit must be >= 1".into(),
            ));
        }
        match PROCESS_LIMIT.set(limit) {
            Ok(()) => {
                info!(limit = %limit, "process text length limit installed");
                Ok(())
            }
            Err(_) => {
                let installed = Self::process();
                warn!(
                    requested = %limit,
                    installed = %installed,
                    "process text length limit already installed"
                );
                Err(ConfigError::LimitAlreadyInstalled { installed })
            }
        }
    }

    /// Returns `true` if a text of `units` code units fits.
    #[inline]
    pub const fn allows(self, units: usize) -> bool {
        units <= self.0
    }

    /// Checks `requested` against the limit.
    ///
    /// The limit is inclusive: `requested == limit` passes.
    #[inline]
    pub fn check(self, requested: usize) -> Result<(), DecodeError> {
        if self.allows(requested) {
            Ok(())
        } else {
            Err(DecodeError::TextTooLong {
                requested,
                limit: self.0,
            })
        }
    }
}

impl Default for TextLengthLimit {
    fn default() -> Self {
        Self::process()
    }
}

impl From<usize> for TextLengthLimit {
    fn from(units: usize) -> Self {
        Self(units)
    }
}

/// Renders as `0x<lowercase hex>`, the form used in error messages.
impl fmt::Display for TextLengthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for TextLengthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
