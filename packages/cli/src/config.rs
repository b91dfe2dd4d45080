use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "landing.config.json";

/// Landing editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Maximum undo levels kept while applying scripts (0 = unlimited)
    #[serde(default)]
    pub history_limit: usize,

    /// Saved project library, relative to the working directory
    #[serde(default = "default_projects_file")]
    pub projects_file: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_projects_file() -> String {
    "landing-projects.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the project library
    pub fn get_projects_file(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.projects_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: 0,
            projects_file: default_projects_file(),
            log_level: default_log_level(),
        }
    }
}
