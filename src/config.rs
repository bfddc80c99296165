use serde::{Deserialize, Serialize};
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "bridgeprims.toml";
pub const DEFAULT_LOG_FILTER: &str = "bridgeprims=warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub json_output: bool,
    pub uppercase_hex: bool,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            json_output: false,
            uppercase_hex: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Read the config file if present, otherwise fall back to defaults.
    /// An explicitly named file must exist.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)?;
            let config: CliConfig = toml::from_str(&content)?;
            Ok(config)
        } else if config_path.is_some() {
            anyhow::bail!("config file not found: {}", config_file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        tracing::info!("Wrote config to {}", config_path);
        Ok(())
    }

    pub fn render_hex(&self, bytes: &[u8]) -> String {
        if self.uppercase_hex {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }
}
