use apparatus_typesetting::{LineMapOptions, DEFAULT_LINE_FREQUENCY, DEFAULT_LINE_HEIGHT_PX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "apparatus.config.json";

/// Apparatus configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Nominal text line height in pixels
    #[serde(default = "default_line_height")]
    pub line_height: f64,

    /// Edition language, selects numerals and keywords
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Label every n-th line in the margin
    #[serde(default = "default_line_frequency")]
    pub line_frequency: u32,
}

fn default_line_height() -> f64 {
    DEFAULT_LINE_HEIGHT_PX
}

fn default_lang() -> String {
    "la".to_string()
}

fn default_line_frequency() -> u32 {
    DEFAULT_LINE_FREQUENCY
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

    /// Line map options, with an optional override of the configured line height
    pub fn line_map_options(&self, line_height: Option<f64>) -> anyhow::Result<LineMapOptions> {
        Ok(LineMapOptions::new(line_height.unwrap_or(self.line_height))?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_height: default_line_height(),
            lang: default_lang(),
            line_frequency: default_line_frequency(),
        }
    }
}
