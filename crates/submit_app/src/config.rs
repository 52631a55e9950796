use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::BaseDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use submit_engine::{TransportSettings, DEFAULT_ENDPOINT};

use crate::cli::Cli;
use crate::platform::logging::LogDestination;

const APP_DIR: &str = "video_submitter";
const CONFIG_FILENAME: &str = "config.ron";
const ENV_ENDPOINT: &str = "VIDEO_SUBMITTER_ENDPOINT";
const ENV_DATA_DIR: &str = "VIDEO_SUBMITTER_DATA_DIR";

/// Settings resolved from defaults, the config file, the environment and CLI flags,
/// in increasing order of precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub data_dir: Option<PathBuf>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let transport = TransportSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            data_dir: None,
            connect_timeout_secs: transport.connect_timeout.as_secs(),
            request_timeout_secs: transport.request_timeout.as_secs(),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves the full configuration for this invocation.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match cli.config.as_deref() {
            Some(path) => Self::from_file(path)?
                .with_context(|| format!("config file {} not found", path.display()))?,
            None => match default_config_path() {
                Some(path) => Self::from_file(&path)?.unwrap_or_default(),
                None => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_cli(cli);
        Ok(config)
    }

    /// Reads a RON config file. A missing file yields `None`.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        let config = ron::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(dir) = &cli.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
    }

    /// Explicit data directory, else the per-user data directory, else `./.video_submitter`.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        BaseDirs::new()
            .map(|dirs| dirs.data_dir().join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR}")))
    }

    /// Unknown level names fall back to `info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_DIR).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(endpoint: "http://localhost:9000/hook", log_destination: both)"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/hook");
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.request_timeout_secs, AppConfig::default().request_timeout_secs);
    }

    #[test]
    fn missing_file_is_none_and_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::from_file(&temp.path().join("absent.ron"))
            .unwrap()
            .is_none());

        let bad = temp.path().join("bad.ron");
        fs::write(&bad, "(endpoint: 42").unwrap();
        assert!(AppConfig::from_file(&bad).is_err());
    }

    #[test]
    fn env_then_cli_override_in_order() {
        let mut config = AppConfig::default();
        let env: HashMap<&str, &str> = [
            (ENV_ENDPOINT, "http://env.example/hook"),
            (ENV_DATA_DIR, "/var/lib/submitter"),
        ]
        .into_iter()
        .collect();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.endpoint, "http://env.example/hook");
        assert_eq!(config.data_dir(), PathBuf::from("/var/lib/submitter"));

        let cli = Cli::try_parse_from([
            "video-submitter",
            "history",
            "--endpoint",
            "http://cli.example/hook",
            "--log",
            "off",
        ])
        .unwrap();
        config.apply_cli(&cli);
        assert_eq!(config.endpoint, "http://cli.example/hook");
        assert_eq!(config.log_destination, LogDestination::Off);
        assert_eq!(config.data_dir(), PathBuf::from("/var/lib/submitter"));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.ron");
        let cli = Cli::try_parse_from([
            "video-submitter",
            "history",
            "--config",
            missing.to_str().unwrap(),
        ])
        .unwrap();
        assert!(AppConfig::resolve(&cli).is_err());
    }

    #[test]
    fn log_level_parses_with_fallback() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn transport_settings_follow_config() {
        let config = AppConfig {
            endpoint: "http://x/hook".to_string(),
            connect_timeout_secs: 3,
            request_timeout_secs: 7,
            ..AppConfig::default()
        };
        let settings = config.transport_settings();
        assert_eq!(settings.endpoint, "http://x/hook");
        assert_eq!(settings.connect_timeout, Duration::from_secs(3));
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
    }
}
