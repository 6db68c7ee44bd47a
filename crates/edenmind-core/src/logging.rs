//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Install a fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this again after a
/// subscriber is installed does nothing.
pub fn init_tracing(config: &CoreConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = CoreConfig::new(CoreConfig::DEFAULT_SERVICE_URL);
        init_tracing(&config);
        init_tracing(&config);
        tracing::info!("subscriber installed");
    }
}
