use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub profile: ProfileSettings,
    #[serde(default)]
    pub scheduling: SchedulingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSettings {
    /// Profile fixture to load instead of the bundled one
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl AuthSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

fn default_simulated_delay_ms() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSettings {
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_max_photos")]
    pub max_photos: usize,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            max_photos: default_max_photos(),
        }
    }
}

fn default_city() -> String { "Dublin".to_string() }
fn default_max_photos() -> usize { 6 }

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingSettings {
    #[serde(default = "default_place")]
    pub default_place: String,
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
    /// How far ahead of now a new proposal starts
    #[serde(default = "default_lead_minutes")]
    pub lead_minutes: i64,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            default_place: default_place(),
            default_duration_minutes: default_duration_minutes(),
            lead_minutes: default_lead_minutes(),
        }
    }
}

fn default_place() -> String { "St. Anne's Park Gate".to_string() }
fn default_duration_minutes() -> u32 { 30 }
fn default_lead_minutes() -> i64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWPAL)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWPAL__AUTH__SIMULATED_DELAY_MS -> auth.simulated_delay_ms
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PAWPAL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheduling() {
        let scheduling = SchedulingSettings::default();
        assert_eq!(scheduling.default_place, "St. Anne's Park Gate");
        assert_eq!(scheduling.default_duration_minutes, 30);
        assert_eq!(scheduling.lead_minutes, 60);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "pretty");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[auth]\nsimulated_delay_ms = 0\n[profile]\ndefault_city = \"Cork\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.auth.simulated_delay(), Duration::ZERO);
        assert_eq!(settings.profile.default_city, "Cork");
        assert_eq!(settings.profile.max_photos, 6);
        assert!(settings.dataset.path.is_none());
        assert_eq!(settings.scheduling.default_duration_minutes, 30);
    }
}
