use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Honors `RUST_LOG` (`env_logger` filter syntax, e.g. "info",
/// "bifrost_core=debug"); defaults to info-level. Idempotent; intended usage
/// is early in `main`.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
