//! Tracing/logging setup shared by catalog binaries and tests.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide tracing, reporting failure instead of ignoring it.
pub fn try_init() -> anyhow::Result<()> {
    tracing::try_init(&LogConfig::from_env())
}

pub use self::tracing::{LogConfig, LogFormat};

/// Tracing configuration (filters, output format).
pub mod tracing;
