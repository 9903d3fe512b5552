//! Settings struct with TOML-based sections.
//!
//! Each section maps to a TOML table and can be updated independently.
//! Every field carries a serde default so older config files keep working
//! when new fields appear.

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ENDPOINT;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Analysis service connection.
    #[serde(default)]
    pub server: ServerSettings,

    /// Remembered file paths.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Analysis service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Full URL of the swing analysis endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Remembered file paths, restored into the form on startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathSettings {
    /// Last used path for the down-the-line video.
    #[serde(default)]
    pub last_dtl_path: String,

    /// Last used path for the face-on video.
    #[serde(default)]
    pub last_fo_path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Auto-scroll the in-app log panel.
    #[serde(default = "default_true")]
    pub autoscroll: bool,

    /// Default tracing level when RUST_LOG is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            autoscroll: true,
            level: default_level(),
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Server,
    Paths,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Server => "server",
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("endpoint"));
    }

    #[test]
    fn default_endpoint_matches_client_default() {
        assert_eq!(ServerSettings::default().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server.endpoint, settings.server.endpoint);
        assert_eq!(parsed.logging.autoscroll, settings.logging.autoscroll);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[paths]\nlast_dtl_path = \"/videos/dtl.mp4\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.paths.last_dtl_path, "/videos/dtl.mp4");
        // Defaults applied for missing
        assert_eq!(parsed.server.endpoint, DEFAULT_ENDPOINT);
        assert!(parsed.logging.autoscroll);
    }
}
