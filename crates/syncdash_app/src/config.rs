use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_POLL_MS: u64 = 3000;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub poll_period: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_period: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl AppConfig {
    /// Reads `SYNCDASH_BASE_URL` and `SYNCDASH_POLL_MS`; unset or
    /// unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SYNCDASH_BASE_URL").ok(),
            std::env::var("SYNCDASH_POLL_MS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, poll_ms: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let poll_ms = poll_ms
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_POLL_MS);
        Self {
            base_url,
            poll_period: Duration::from_millis(poll_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(AppConfig::from_vars(None, None), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_vars(
            Some("http://10.0.0.5:5000/api".to_string()),
            Some("500".to_string()),
        );
        assert_eq!(config.base_url, "http://10.0.0.5:5000/api");
        assert_eq!(config.poll_period, Duration::from_millis(500));
    }

    #[test]
    fn unparsable_period_falls_back_to_default() {
        let config = AppConfig::from_vars(None, Some("soon".to_string()));
        assert_eq!(config.poll_period, Duration::from_millis(DEFAULT_POLL_MS));
    }
}
