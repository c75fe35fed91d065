//! Tracing setup shared between the binaries.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! human-facing report printed by the commands themselves.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Configures the global tracing subscriber and routes panics through it.
/// Later calls are ignored, so tests may call this freely.
pub fn init() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if let Err(err) = result {
            eprintln!("tracing subscriber already set: {err}");
        }

        // Panics are the closest thing to an unhandled failure; make sure
        // they land in the log before the default hook prints them.
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!("thread panicked: {}", info);
            default_hook(info);
        }));
    });
}
