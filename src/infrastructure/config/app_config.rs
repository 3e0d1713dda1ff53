//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::services::DEFAULT_BASE_URL;

const APP_NAME: &str = "fortuna";
const APP_QUALIFIER: &str = "xyz";
const APP_ORGANIZATION: &str = "fortunadao";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show keybinding hints in the footer bar.
    #[serde(default = "default_true")]
    pub show_hints: bool,

    /// Date format string (chrono format) used for proposal deadlines and
    /// donation dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            date_format: default_date_format(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Site base used to build project share links.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(share_base_url) = args.share_base_url {
            self.share_base_url = share_base_url;
        }
        if let Some(show_hints) = args.show_hints {
            self.ui.show_hints = show_hints;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("fortuna.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            share_base_url: default_share_base_url(),
            ui: UiConfig::default(),
        }
    }
}

fn default_share_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"
            share_base_url = "https://staging.fortunadao.xyz"

            [ui]
            show_hints = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.share_base_url, "https://staging.fortunadao.xyz");
        assert!(!config.ui.show_hints);
        assert_eq!(config.ui.date_format, default_date_format());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.share_base_url, DEFAULT_BASE_URL);
        assert!(config.ui.show_hints);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        config.merge_with_args(CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Trace),
            share_base_url: Some("https://example.org".to_string()),
            show_hints: Some(false),
        });

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.share_base_url, "https://example.org");
        assert!(!config.ui.show_hints);
    }
}
