use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::hal::constants::KEY_ROUTING;

/// Runtime switches for the compatibility layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompatConfig {
    /// Translate between the ICS and JB mask layouts (pass-through when off)
    pub convert_devices: bool,

    /// Replace BUILTIN_MIC with VOICE_CALL on masks handed to the vendor HAL
    pub voice_call_quirk: bool,

    /// Parameter keys whose integer value is a device mask
    pub device_keys: Vec<String>,

    /// Prefix of the wrapped vendor module name
    pub vendor_prefix: String,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            convert_devices: true,
            voice_call_quirk: false,
            device_keys: vec![KEY_ROUTING.to_string()],
            vendor_prefix: "vendor".to_string(),
        }
    }
}

impl CompatConfig {
    /// Preset for HTC devices running the stock audio policy manager
    pub fn legacy_htc() -> Self {
        Self {
            voice_call_quirk: true,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .context(format!("Failed to read config from {:?}", path))?;

        let config: CompatConfig = serde_json::from_str(&json)
            .context("Failed to deserialize compat config")?;

        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize compat config")?;

        fs::write(path, json)
            .context(format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}
