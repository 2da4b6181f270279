use std::fmt;

use log::{info, warn};

use crate::config::CompatConfig;
use super::format_converter::DeviceConverter;
use super::types::ConversionMode;

/// Ordered `key=value;key=value` parameter set passed through the HAL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioParameter {
    // `None` for keys that appeared without `=`
    entries: Vec<(String, Option<String>)>,
}

impl AudioParameter {
    pub fn parse(kv_pairs: &str) -> Self {
        let mut param = Self::default();

        for pair in kv_pairs.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (pair, None),
            };
            param.insert(key, value);
        }

        param
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Integer value of `key`, if present and numeric
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(parse_int)
    }

    /// Set `key` to a string value, keeping its position if it already exists
    pub fn add(&mut self, key: &str, value: &str) {
        self.insert(key, Some(value.to_string()));
    }

    pub fn add_int(&mut self, key: &str, value: i32) {
        self.add(key, &value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        self.entries.len() != before
    }

    fn insert(&mut self, key: &str, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }
}

impl fmt::Display for AudioParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            match value {
                Some(value) => write!(f, "{}={}", key, value)?,
                None => f.write_str(key)?,
            }
        }
        Ok(())
    }
}

/// Parse a signed decimal or `0x` hex literal, keeping the low 32 bits
fn parse_int(value: &str) -> Option<i32> {
    let value = value.trim();
    let (negative, digits) = match value.as_bytes().first()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };

    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            i64::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse::<i64>().ok()?
        }
        None => return None,
    };

    let signed = if negative { -magnitude } else { magnitude };
    // Unsigned masks written in decimal overflow i32 but keep their bit pattern
    Some(signed as i32)
}

/// Rewrites device masks embedded in parameter strings
#[derive(Debug, Clone)]
pub struct ParameterRewriter {
    converter: DeviceConverter,
    device_keys: Vec<String>,
}

impl ParameterRewriter {
    pub fn new(config: &CompatConfig) -> Self {
        Self {
            converter: DeviceConverter::new(config),
            device_keys: config.device_keys.clone(),
        }
    }

    pub fn converter(&self) -> &DeviceConverter {
        &self.converter
    }

    /// Convert every device key in `kv_pairs`; unchanged copy if none is present
    pub fn rewrite(&self, kv_pairs: &str, mode: ConversionMode) -> String {
        let mut param = AudioParameter::parse(kv_pairs);
        let mut changed = false;

        for key in &self.device_keys {
            let Some(value) = param.get_int(key) else {
                if let Some(raw) = param.get(key) {
                    warn!("fixup_audio_parameters: {} is not an integer ({:?})", key, raw);
                }
                continue;
            };

            info!(
                "fixup_audio_parameters: Fixing {} value (value: {:#x}, mode: {})",
                key, value, mode
            );
            let converted = self.converter.convert(value as u32, mode);
            // Stored signed; the bit pattern is what the HAL reads back
            param.add_int(key, converted as i32);
            changed = true;
        }

        if !changed {
            return kv_pairs.to_string();
        }

        let fixed = param.to_string();
        info!("fixup_audio_parameters: fixed_kv_pairs: {} ({})", fixed, fixed.len());
        fixed
    }
}

impl Default for ParameterRewriter {
    fn default() -> Self {
        Self::new(&CompatConfig::default())
    }
}

/// Rewrite the routing mask of `kv_pairs` with the default configuration
pub fn fixup_audio_parameters(kv_pairs: &str, mode: ConversionMode) -> String {
    ParameterRewriter::default().rewrite(kv_pairs, mode)
}
