use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init_tracing(level: LogLevel) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.to_string())
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
