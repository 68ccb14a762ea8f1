//! Process settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::logo::{DEFAULT_LOGO_URL, RetryPolicy};

/// Settings for the HTTP server binary.
///
/// | Variable | Default |
/// |---|---|
/// | `LISTEN_ADDR` | `0.0.0.0:8080` |
/// | `FIELDS_CONFIG` | built-in field list |
/// | `LOGO_URL` | the company logo |
/// | `LOGO_MAX_ATTEMPTS` | `3` |
/// | `LOGO_BACKOFF_MS` | `1000` |
/// | `LOGO_TIMEOUT_SECS` | `10` |
///
/// Unparseable values fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Address the server binds to.
    pub listen_addr: SocketAddr,
    /// Optional path to a YAML field list.
    pub fields_config: Option<PathBuf>,
    /// URL of the header logo.
    pub logo_url: String,
    /// Retry policy for the logo fetch.
    pub logo_retry: RetryPolicy,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            fields_config: None,
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_retry: RetryPolicy::default(),
        }
    }
}

impl ServerSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|value| value.trim().parse::<u64>().ok());

        Self {
            listen_addr: lookup("LISTEN_ADDR")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.listen_addr),
            fields_config: lookup("FIELDS_CONFIG")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            logo_url: lookup("LOGO_URL")
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.logo_url),
            logo_retry: RetryPolicy {
                max_attempts: parsed("LOGO_MAX_ATTEMPTS")
                    .and_then(|n| u32::try_from(n).ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(defaults.logo_retry.max_attempts),
                backoff: parsed("LOGO_BACKOFF_MS")
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.logo_retry.backoff),
                timeout: parsed("LOGO_TIMEOUT_SECS")
                    .filter(|n| *n > 0)
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.logo_retry.timeout),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> ServerSettings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerSettings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.logo_retry.max_attempts, 3);
        assert_eq!(settings.logo_retry.backoff, Duration::from_secs(1));
        assert_eq!(settings.logo_retry.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_values_are_read() {
        let settings = settings_from(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("FIELDS_CONFIG", "./config/fields.yaml"),
            ("LOGO_URL", "http://localhost/logo.png"),
            ("LOGO_MAX_ATTEMPTS", "5"),
            ("LOGO_BACKOFF_MS", "250"),
            ("LOGO_TIMEOUT_SECS", "2"),
        ]);

        assert_eq!(settings.listen_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            settings.fields_config,
            Some(PathBuf::from("./config/fields.yaml"))
        );
        assert_eq!(settings.logo_url, "http://localhost/logo.png");
        assert_eq!(settings.logo_retry.max_attempts, 5);
        assert_eq!(settings.logo_retry.backoff, Duration::from_millis(250));
        assert_eq!(settings.logo_retry.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let settings = settings_from(&[
            ("LISTEN_ADDR", "not an address"),
            ("LOGO_MAX_ATTEMPTS", "0"),
            ("LOGO_BACKOFF_MS", "soon"),
        ]);
        assert_eq!(settings, ServerSettings::default());
    }
}
