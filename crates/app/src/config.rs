//! Runtime configuration, read from `STOCKROOM_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use stockroom_inventory::DEFAULT_STORAGE_KEY;
use stockroom_observability::LogFormat;

pub const ENV_STORAGE_KEY: &str = "STOCKROOM_STORAGE_KEY";
pub const ENV_DATA_DIR: &str = "STOCKROOM_DATA_DIR";
pub const ENV_MESSAGE_TTL_SECS: &str = "STOCKROOM_MESSAGE_TTL_SECS";
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

/// How long a status message stays visible unless replaced.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

const MAX_MESSAGE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key the product list is persisted under.
    pub storage_key: String,
    /// Directory for the file backend; `None` means the OS data directory.
    pub data_dir: Option<PathBuf>,
    pub message_ttl: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            message_ttl: DEFAULT_MESSAGE_TTL,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their default. Unparsable values are
    /// logged and also keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = var(ENV_STORAGE_KEY) {
            config.storage_key = key.trim().to_string();
        }

        if let Some(dir) = var(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir.trim()));
        }

        if let Some(raw) = var(ENV_MESSAGE_TTL_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs <= MAX_MESSAGE_TTL_SECS => {
                    config.message_ttl = Duration::from_secs(secs);
                }
                _ => tracing::warn!(
                    "{ENV_MESSAGE_TTL_SECS}={raw:?} is not a number of seconds in 0..={MAX_MESSAGE_TTL_SECS}; using default"
                ),
            }
        }

        if let Some(raw) = var(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(err) => tracing::warn!("{ENV_LOG_FORMAT}: {err}; using default"),
            }
        }

        config
    }

    /// The directory the file backend should use.
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => stockroom_storage::FileKeyValueStore::default_dir()
                .context("failed to resolve OS data directory - set STOCKROOM_DATA_DIR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "products");
        assert_eq!(config.message_ttl, Duration::from_secs(5));
    }

    #[test]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_STORAGE_KEY, "inventario"),
            (ENV_DATA_DIR, "/var/lib/stockroom"),
            (ENV_MESSAGE_TTL_SECS, "12"),
            (ENV_LOG_FORMAT, "pretty"),
        ]));

        assert_eq!(config.storage_key, "inventario");
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/stockroom")));
        assert_eq!(config.message_ttl, Duration::from_secs(12));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("/var/lib/stockroom"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_STORAGE_KEY, "   "),
            (ENV_MESSAGE_TTL_SECS, "soon"),
            (ENV_LOG_FORMAT, "xml"),
        ]));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_lookup(lookup(&[(ENV_MESSAGE_TTL_SECS, "86400")]));
        assert_eq!(config.message_ttl, DEFAULT_MESSAGE_TTL);
    }
}
