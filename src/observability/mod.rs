//! Tracing initialization and subscriber setup.
//!
//! The controller emits structured `tracing` events for every operation
//! (query assignments, search starts, stale discards, toggles, navigation).
//! Hosts that already install their own subscriber can ignore this module;
//! [`init_tracing`] is a convenience for binaries and test harnesses.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes a formatting tracing subscriber.
///
/// Builds a subscriber pipeline that filters events by the configured trace
/// level and writes them through the standard `fmt` layer.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. The `RUST_LOG` environment variable
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call installs a
/// subscriber. Never panics if a global subscriber is already set.
///
/// # Example
///
/// ```rust
/// use marquee::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = config.trace_level.as_ref().map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        |level| EnvFilter::new(level.clone()),
    );

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
