use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "calorie_core=info";

/// Initializes the global tracing subscriber. `RUST_LOG` wins over
/// `directive`; both fall back to `calorie_core=info`.
pub fn init_tracing(directive: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive.unwrap_or(DEFAULT_DIRECTIVE)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
