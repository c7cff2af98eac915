use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use crate::{API_BASE_URL, VIEWER_FETCH_TIMEOUT_MS};
use crate::view::DEFAULT_ACTIVITY_SEGMENTS;

pub const DEFAULT_CONFIG_PATH: &str = "config/system_intel.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemIntelConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Host serving `/system/{name}`
    pub base_url: String,
    /// Deadline for the system page request in milliseconds
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Segments per activity meter
    pub activity_segments: usize,
    /// How `view` prints the finished page
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Append every API call to `api_log_path`
    pub api_logging: bool,
    pub api_log_path: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl Default for SystemIntelConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: API_BASE_URL.to_string(),
                timeout_ms: VIEWER_FETCH_TIMEOUT_MS,
            },
            display: DisplayConfig {
                activity_segments: DEFAULT_ACTIVITY_SEGMENTS,
                format: OutputFormat::Text,
            },
            logging: LoggingConfig {
                api_logging: false,
                api_log_path: "api_debug.log".to_string(),
            },
        }
    }
}

impl SystemIntelConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            info!("Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: SystemIntelConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            info!("Creating default configuration at {}", config_path);
            let config = SystemIntelConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return Err("base_url must be an http(s) URL".to_string());
        }
        if self.api.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_string());
        }
        if self.display.activity_segments == 0 {
            return Err("activity_segments must be greater than 0".to_string());
        }
        if self.logging.api_logging && self.logging.api_log_path.trim().is_empty() {
            return Err("api_log_path is required when api_logging is on".to_string());
        }

        info!("Configuration validation passed");
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms)
    }

    pub fn print_summary(&self) {
        info!("Configuration Summary:");
        info!("   API: {}", self.api.base_url);
        info!("   Page timeout: {}ms", self.api.timeout_ms);
        info!("   Activity segments: {}", self.display.activity_segments);
        info!("   API logging: {}", if self.logging.api_logging { self.logging.api_log_path.as_str() } else { "off" });
    }
}
