use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::constants::{ics, jb};

/// Device mask in the legacy (ICS) layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IcsDevices(pub u32);

/// Device mask in the current (JB) layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AudioDevices(pub u32);

impl IcsDevices {
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, flags: u32) -> bool {
        self.0 & flags == flags
    }

    /// All bits inside the output half (including the default bit)
    pub const fn is_output(self) -> bool {
        self.0 & !ics::OUT_ALL == 0
    }

    /// All bits inside the input half (including the default pattern)
    pub const fn is_input(self) -> bool {
        self.0 & !ics::IN_ALL == 0
    }
}

impl AudioDevices {
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, flags: u32) -> bool {
        self.0 & flags == flags
    }

    /// Output mask: no input marker and nothing outside the known output bits
    pub const fn is_output(self) -> bool {
        self.0 & jb::BIT_IN == 0 && self.0 & !jb::OUT_ALL == 0
    }

    pub const fn is_input(self) -> bool {
        self.0 & jb::BIT_IN == jb::BIT_IN
    }
}

impl fmt::Display for IcsDevices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for AudioDevices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Direction of a device mask conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    /// Legacy layout to current layout (what the framework expects)
    IcsToJb,
    /// Current layout to legacy layout (what the vendor HAL expects)
    JbToIcs,
}

impl ConversionMode {
    pub const ICS_TO_JB: i32 = 0;
    pub const JB_TO_ICS: i32 = 1;

    /// Decode the integer mode code used at the C boundary
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            Self::ICS_TO_JB => Some(ConversionMode::IcsToJb),
            Self::JB_TO_ICS => Some(ConversionMode::JbToIcs),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            ConversionMode::IcsToJb => Self::ICS_TO_JB,
            ConversionMode::JbToIcs => Self::JB_TO_ICS,
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::IcsToJb => write!(f, "ICS_TO_JB"),
            ConversionMode::JbToIcs => write!(f, "JB_TO_ICS"),
        }
    }
}

impl FromStr for ConversionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "ics-to-jb" => Ok(ConversionMode::IcsToJb),
            "jb-to-ics" => Ok(ConversionMode::JbToIcs),
            other => anyhow::bail!("Unknown conversion mode: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_codes() {
        assert_eq!(ConversionMode::from_raw(0), Some(ConversionMode::IcsToJb));
        assert_eq!(ConversionMode::from_raw(1), Some(ConversionMode::JbToIcs));
        assert_eq!(ConversionMode::from_raw(2), None);
        assert_eq!(ConversionMode::from_raw(-1), None);
        assert_eq!(ConversionMode::JbToIcs.as_raw(), 1);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("ics-to-jb".parse::<ConversionMode>().unwrap(), ConversionMode::IcsToJb);
        assert_eq!("JB_TO_ICS".parse::<ConversionMode>().unwrap(), ConversionMode::JbToIcs);
        assert!("sideways".parse::<ConversionMode>().is_err());
    }

    #[test]
    fn test_layout_predicates() {
        assert!(IcsDevices(ics::OUT_SPEAKER | ics::OUT_DEFAULT).is_output());
        assert!(!IcsDevices(ics::IN_BUILTIN_MIC).is_output());
        assert!(IcsDevices(ics::IN_BUILTIN_MIC | ics::IN_DEFAULT).is_input());

        assert!(AudioDevices(jb::OUT_SPEAKER).is_output());
        assert!(!AudioDevices(jb::IN_BUILTIN_MIC).is_output());
        assert!(AudioDevices(jb::IN_BUILTIN_MIC).is_input());
        // Unknown bit without the input marker is neither
        let stray = AudioDevices(0x0010_0000);
        assert!(!stray.is_output());
        assert!(!stray.is_input());
    }
}
