//! Tests for `CodecRegistry`: built-ins, lookup, custom registration.

use std::sync::Arc;

use crate::DecodeError;
use crate::codec::*;

/// Maps every byte to `*`.
struct Stars;

impl Codec for Stars {
    fn name(&self) -> &str {
        "stars"
    }

    fn max_decoded_len(&self, byte_len: usize) -> usize {
        byte_len
    }

    fn decode(&self, bytes: &[u8]) -> String {
        "*".repeat(bytes.len())
    }
}

#[test]
fn builtins_register_every_alias() {
    let registry = CodecRegistry::with_builtins();
    for enc in Encoding::ALL {
        for alias in enc.aliases() {
            let codec = registry.resolve(alias).unwrap();
            assert_eq!(codec.name(), enc.name(), "alias {alias}");
        }
    }
    assert_eq!(
        registry.len(),
        Encoding::ALL.iter().map(|e| e.aliases().len()).sum::<usize>()
    );
}

#[test]
fn resolve_ignores_case() {
    let registry = CodecRegistry::with_builtins();
    assert_eq!(registry.resolve("HEX").unwrap().name(), "hex");
    assert!(registry.contains("Utf-16LE"));
}

#[test]
fn resolve_unknown_name_fails_fast() {
    let registry = CodecRegistry::with_builtins();
    let err = registry.resolve("utf32").err().unwrap();
    assert_eq!(err, DecodeError::UnknownEncoding("utf32".into()));
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = CodecRegistry::empty();
    assert!(registry.is_empty());
    assert!(!registry.contains("utf8"));
}

#[test]
fn register_custom_codec() {
    let mut registry = CodecRegistry::empty();
    assert!(registry.register("Stars", Arc::new(Stars)).is_none());
    let codec = registry.resolve("stars").unwrap();
    assert_eq!(codec.decode(b"abc"), "***");
    assert_eq!(registry.names(), vec!["stars"]);
}

#[test]
fn register_replaces_existing_codec() {
    let mut registry = CodecRegistry::with_builtins();
    let replaced = registry.register("latin1", Arc::new(Stars)).unwrap();
    assert_eq!(replaced.name(), "latin1");
    assert_eq!(registry.resolve("latin1").unwrap().name(), "stars");
    // The alias still points at the built-in codec.
    assert_eq!(registry.resolve("binary").unwrap().name(), "latin1");
}

#[test]
fn names_are_sorted() {
    let registry = CodecRegistry::with_builtins();
    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(names.contains(&"ucs2"));
}

#[test]
fn builtin_aliases_share_one_codec() {
    let registry = CodecRegistry::with_builtins();
    let ucs2 = registry.resolve("ucs2").unwrap();
    let utf16le = registry.resolve("utf16le").unwrap();
    assert!(Arc::ptr_eq(&ucs2, &utf16le));
    assert!(!Arc::ptr_eq(&ucs2, &registry.resolve("latin1").unwrap()));
}

#[test]
fn builtins_decode_like_encoding_codec() {
    let registry = CodecRegistry::with_builtins();
    let bytes = [0x68, 0x69, 0xC3, 0xA9, 0xFF, 0x00];
    for enc in Encoding::ALL {
        let shared = registry.resolve(enc.name()).unwrap();
        let direct = enc.codec();
        assert_eq!(shared.decode(&bytes), direct.decode(&bytes), "{enc:?}");
        assert_eq!(shared.decoded_len(&bytes), direct.decoded_len(&bytes), "{enc:?}");
        assert_eq!(shared.max_decoded_len(6), direct.max_decoded_len(6), "{enc:?}");
    }
}

#[test]
fn debug_lists_names_and_is_non_exhaustive() {
    let mut registry = CodecRegistry::empty();
    registry.register("stars", Arc::new(Stars));
    assert_eq!(
        format!("{registry:?}"),
        r#"CodecRegistry { names: ["stars"], .. }"#
    );
}
