//! Shared support for integration tests.
//!
//! The memory headroom check lives here and not in the library: deciding whether a
//! test has enough headroom is the harness's job, not the decoder's.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber controlled by `RUST_LOG` env var.
/// Safe to call multiple times; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Resource requirements of a memory-intensive test.
#[derive(Debug, Clone, Copy)]
pub struct TestEnv {
    /// Bytes the test must be able to allocate on top of its inputs.
    pub required_memory: usize,
    /// Skip instead of failing when the memory is not available.
    pub skip_if_unavailable: bool,
}

impl TestEnv {
    /// Returns `true` if the test should run.
    ///
    /// Panics if the memory is unavailable and skipping is not allowed.
    pub fn ready(&self, test: &str) -> bool {
        if ensure_allocation(self.required_memory) {
            return true;
        }
        assert!(
            self.skip_if_unavailable,
            "{test}: cannot reserve {} bytes",
            self.required_memory
        );
        eprintln!(
            "skipping {test}: intensive decode test needs {} bytes of headroom",
            self.required_memory
        );
        false
    }
}

/// Checks whether `bytes` can currently be allocated, releasing the
/// reservation immediately.
pub fn ensure_allocation(bytes: usize) -> bool {
    let mut reservation: Vec<u8> = Vec::new();
    reservation.try_reserve_exact(bytes).is_ok()
}

/// Allocates a buffer of `len` bytes set to `fill`, or `None` if the
/// allocation fails.
pub fn try_alloc_buffer(len: usize, fill: u8) -> Option<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, fill);
    Some(buf)
}
