//! Tracing setup for tests
//!
//! Log output is off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=domain_policy=debug cargo test`.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // Another test harness may already own the global subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Installs the test subscriber once per process
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
