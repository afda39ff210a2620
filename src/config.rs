use std::{env, path::PathBuf, time::Duration};

const DEFAULT_DATA_PATH: &str = "data/journal.json";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ANALYTICS_URL: &str = "http://localhost:5000";
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const MAX_HISTORY_DAYS: u32 = 365;

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub analytics_url: String,
    pub analytics_timeout: Option<Duration>,
    pub history_days: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let analytics_url = lookup("ANALYTICS_URL")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYTICS_URL.to_string());

        let analytics_timeout = lookup("ANALYTICS_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let history_days = lookup("HISTORY_DAYS")
            .and_then(|value| value.parse::<u32>().ok())
            .map(clamp_days)
            .unwrap_or(DEFAULT_HISTORY_DAYS);

        Self {
            data_path,
            port,
            analytics_url,
            analytics_timeout,
            history_days,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Window lengths outside 1..=365 days are pulled back into range.
pub fn clamp_days(days: u32) -> u32 {
    days.clamp(1, MAX_HISTORY_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("data/journal.json"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.analytics_url, "http://localhost:5000");
        assert!(config.analytics_timeout.is_none());
        assert_eq!(config.history_days, 30);
    }

    #[test]
    fn environment_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_DATA_PATH", "/tmp/journal.json"),
            ("PORT", "9001"),
            ("ANALYTICS_URL", "http://127.0.0.1:7000/"),
            ("ANALYTICS_TIMEOUT_SECS", "15"),
            ("HISTORY_DAYS", "900"),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/tmp/journal.json"));
        assert_eq!(config.port, 9001);
        assert_eq!(config.analytics_url, "http://127.0.0.1:7000");
        assert_eq!(config.analytics_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.history_days, MAX_HISTORY_DAYS);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("ANALYTICS_TIMEOUT_SECS", "0"),
            ("HISTORY_DAYS", "soon"),
        ]));
        assert_eq!(config.port, 8080);
        assert!(config.analytics_timeout.is_none());
        assert_eq!(config.history_days, 30);
    }
}
