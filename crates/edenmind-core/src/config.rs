use std::env;

/// Runtime configuration for an intake session.
///
/// Reads from `EDENMIND_SERVICE_URL` and `EDENMIND_LOG`, falling back to
/// local defaults when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Endpoint the connection collaborator reaches the diagnosis service at.
    pub service_url: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl CoreConfig {
    /// Default endpoint of a local replica.
    pub const DEFAULT_SERVICE_URL: &'static str = "http://127.0.0.1:4943";

    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Build a config from the environment.
    pub fn from_env() -> Self {
        let service_url = env::var("EDENMIND_SERVICE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SERVICE_URL.to_owned());
        let log_filter = env::var("EDENMIND_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_owned());
        Self {
            service_url,
            log_filter,
        }
    }

    /// Build a config for an explicit endpoint (useful for tests).
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            log_filter: Self::DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_endpoint() {
        let cfg = CoreConfig::new("https://ic0.app");
        assert_eq!(cfg.service_url, "https://ic0.app");
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_from_env_has_values() {
        let cfg = CoreConfig::from_env();
        assert!(!cfg.service_url.is_empty());
        assert!(!cfg.log_filter.is_empty());
    }
}
