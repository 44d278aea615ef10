//! Layered client configuration.
//!
//! Sources, later wins: built-in defaults, `~/.config/strajk/config.toml`,
//! an explicit `--config` file, then `STRAJK__SECTION__KEY` environment
//! variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Booking endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://731xy9c2ak.execute-api-eu-north-1.amazonaws.com/booking";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Sent as the `x-api-key` header when set.
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Overrides the session directory under the platform cache dir.
    #[serde(default)]
    pub session_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Overrides the log file under the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from all sources, including `explicit` when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        let user_file = dirs::config_dir().map(|dir| dir.join("strajk").join("config.toml"));
        Self::from_sources(user_file.as_deref(), explicit)
    }

    fn from_sources(
        user_file: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("api.endpoint", DEFAULT_ENDPOINT)?
            .set_default("api.timeout_seconds", 10)?
            .set_default("log.filter", "strajk=info")?;

        if let Some(path) = user_file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix("STRAJK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_without_files() {
        let config = Config::from_sources(None, None).unwrap();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.api_key, None);
        assert_eq!(config.storage.session_dir, None);
        assert_eq!(config.log.filter, "strajk=info");
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strajk.toml");
        fs::write(
            &path,
            r#"
[api]
endpoint = "http://localhost:9000/booking"
api_key = "secret"
timeout_seconds = 3

[storage]
session_dir = "/tmp/strajk-session"
"#,
        )
        .unwrap();

        let config = Config::from_sources(None, Some(&path)).unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:9000/booking");
        assert_eq!(config.api.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_seconds, 3);
        assert_eq!(
            config.storage.session_dir,
            Some(PathBuf::from("/tmp/strajk-session"))
        );
        assert_eq!(config.log.filter, "strajk=info");
    }

    #[test]
    fn explicit_file_wins_over_user_file() {
        let dir = tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&user, "[log]\nfilter = \"strajk=debug\"\n").unwrap();
        fs::write(&explicit, "[log]\nfilter = \"strajk=trace\"\n").unwrap();

        let config = Config::from_sources(Some(&user), Some(&explicit)).unwrap();
        assert_eq!(config.log.filter, "strajk=trace");
    }

    #[test]
    fn missing_user_file_is_ignored() {
        let dir = tempdir().unwrap();
        let config = Config::from_sources(Some(&dir.path().join("absent.toml")), None).unwrap();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Config::from_sources(None, Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }
}
