pub use insta::{assert_json_snapshot, assert_snapshot};
use tracing::Level;

/// Installs a TRACE-level subscriber once per test binary. `RUST_LOG`
/// narrows it when set.
pub fn logging() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::TRACE.as_str()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
