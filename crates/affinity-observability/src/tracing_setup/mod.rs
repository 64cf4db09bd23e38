//! Subscriber installation.

pub mod spans;

use std::sync::OnceLock;

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use affinity_core::config::ObservabilityConfig;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `config.log_level`. Only the first call installs
/// anything; the return value reports whether a subscriber from this crate
/// is active (false if another global subscriber was already set).
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json_logs {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer()).try_init()
        };
        installed.is_ok()
    })
}
