use std::{fs, path::Path};

use alembro_core::CapabilityTier;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Used when `--config` is not given and the file exists
pub const DEFAULT_CONFIG_PATH: &str = "config/alembro.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub browser: BrowserCfg,
    pub signature: SignatureCfg,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BrowserCfg {
    /// Program receiving the URL as its only argument
    pub program: String,
}

impl Default for BrowserCfg {
    fn default() -> Self {
        Self {
            program: "google-chrome".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SignatureCfg {
    pub tier: CapabilityTier,
}

impl Default for SignatureCfg {
    fn default() -> Self {
        Self {
            tier: CapabilityTier::Modern,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from the default path when
    /// present, falling back to built-in defaults
    pub fn load(config_path: Option<&str>) -> CliResult<Self> {
        match config_path {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(CliError::FileNotFound(path.to_string()));
                }
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &str) -> CliResult<Self> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&text)?;
        tracing::debug!(path, ?settings, "loaded settings");
        Ok(settings)
    }
}
