//! Name-to-codec lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{Codec, Encoding};
use crate::DecodeError;

/// Maps encoding names to codecs.
///
/// Names are stored lowercase and looked up case-insensitively. The registry
/// is immutable once handed to a [`BoundedDecoder`](crate::BoundedDecoder),
/// so lookups need no locking.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn Codec>>,
}

impl CodecRegistry {
    /// A registry with no codecs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every built-in [`Encoding`] under all its aliases.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for enc in Encoding::ALL {
            let codec = enc.shared_codec();
            for alias in enc.aliases() {
                registry.codecs.insert((*alias).to_string(), Arc::clone(&codec));
            }
        }
        registry
    }

    /// Registers `codec` under `name`, replacing any codec previously
    /// registered under the same name.
    ///
    /// Returns the replaced codec, if any.
    pub fn register(
        &mut self,
        name: &str,
        codec: Arc<dyn Codec>,
    ) -> Option<Arc<dyn Codec>> {
        let key = name.to_ascii_lowercase();
        debug!(name = %key, codec = codec.name(), "codec registered");
        self.codecs.insert(key, codec)
    }

    /// Looks up the codec registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownEncoding`] if nothing is registered
    /// under that name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Codec>, DecodeError> {
        let found = match self.codecs.get(name) {
            Some(codec) => Some(codec),
            None => self.codecs.get(&name.to_ascii_lowercase()),
        };
        found
            .cloned()
            .ok_or_else(|| DecodeError::UnknownEncoding(name.to_string()))
    }

    /// Returns `true` if `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("names", &self.names())
            .finish_non_exhaustive()
    }
}
