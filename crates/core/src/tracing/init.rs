//! Initialization functions for tracing

use anyhow::Result;

use crate::tracing::config::InstrumentationConfig;

/// Initialize tracing with the given configuration
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(config: &InstrumentationConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?;
    }

    ::tracing::debug!(service = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize browser console logging
#[cfg(target_arch = "wasm32")]
pub fn init_tracing(config: &InstrumentationConfig) -> Result<()> {
    let level = match config.log_level.to_ascii_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    Ok(())
}

/// Initialize with default configuration from environment
pub fn init_default() -> Result<()> {
    let config = InstrumentationConfig::from_env();
    init_tracing(&config)
}

/// Initialize with development configuration
pub fn init_dev() -> Result<()> {
    let config = InstrumentationConfig::dev();
    init_tracing(&config)
}
