use crate::codec::CodecRegistry;
use crate::decoder::BoundedDecoder;
use crate::limit::TextLengthLimit;
use crate::DecoderConfig;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber controlled by `RUST_LOG` env var.
/// Safe to call multiple times; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Small limit so boundary cases need only a few bytes.
pub const SMALL_LIMIT: usize = 64;

/// Decoder with the built-in codecs and the given limit.
pub fn decoder_with_limit(limit: usize) -> BoundedDecoder {
    init_tracing();
    BoundedDecoder::new(DecoderConfig {
        max_text_len: TextLengthLimit::new(limit),
        ..DecoderConfig::default()
    })
    .unwrap()
}

/// Decoder with `registry` and the given limit.
pub fn decoder_with_registry(limit: usize, registry: CodecRegistry) -> BoundedDecoder {
    init_tracing();
    BoundedDecoder::with_registry(
        DecoderConfig {
            max_text_len: TextLengthLimit::new(limit),
            ..DecoderConfig::default()
        },
        registry,
    )
    .unwrap()
}

/// `len` bytes cycling through the printable ASCII range.
pub fn ascii_buffer(len: usize) -> Vec<u8> {
    (0..len).map(|i| b' ' + (i % 95) as u8).collect()
}

/// `len` bytes all with the high bit set (multi-byte in latin1 text).
pub fn high_latin1_buffer(len: usize) -> Vec<u8> {
    (0..len).map(|i| 0xA0 + (i % 0x60) as u8).collect()
}
