use log::{error, info, warn};

use crate::config::CompatConfig;
use super::constants::{ics, jb, DEVICE_IN_MASK, DEVICE_OUT_MASK, INPUT_SHIFT};
use super::quirks::fixup_audio_devices;
use super::types::{AudioDevices, ConversionMode, IcsDevices};

/// Convert a legacy mask to the current layout.
///
/// Masks mixing output and input bits (or carrying bits neither half knows)
/// have no JB representation; they are logged and handed back unchanged.
pub fn ics_to_jb(ics_device: IcsDevices) -> AudioDevices {
    let bits = ics_device.bits();

    if ics_device.is_output() {
        // The first 14 output bits are equal, only DEFAULT moved
        let mut device = bits & !ics::OUT_DEFAULT;
        if bits & ics::OUT_DEFAULT != 0 {
            device |= jb::OUT_DEFAULT;
        }
        AudioDevices(device)
    } else if ics_device.is_input() {
        let mut device = ((bits & !ics::IN_DEFAULT) >> INPUT_SHIFT) | jb::BIT_IN;
        if ics_device.contains(ics::IN_DEFAULT) {
            device |= jb::IN_DEFAULT;
        }
        AudioDevices(device)
    } else {
        warn!("ics_to_jb: {:#x} has no proper representation", bits);
        AudioDevices(bits)
    }
}

/// Convert a current-layout mask to the legacy layout.
///
/// Bits the legacy enum cannot express are dropped.
pub fn jb_to_ics(device: AudioDevices) -> IcsDevices {
    let bits = device.bits();

    if device.is_output() {
        let mut ics_device = bits & DEVICE_OUT_MASK;
        if bits & jb::OUT_DEFAULT != 0 {
            ics_device |= ics::OUT_DEFAULT;
        }
        IcsDevices(ics_device)
    } else if device.is_input() {
        let mut ics_device = (bits & DEVICE_IN_MASK) << INPUT_SHIFT;
        if device.contains(jb::IN_DEFAULT) {
            ics_device |= ics::IN_DEFAULT;
        }
        IcsDevices(ics_device)
    } else {
        warn!("jb_to_ics: device mask is neither input nor output: {:#x}", bits);
        IcsDevices(bits)
    }
}

/// Translates device masks crossing the framework/vendor boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConverter {
    convert_devices: bool,
    voice_call_quirk: bool,
}

impl DeviceConverter {
    pub fn new(config: &CompatConfig) -> Self {
        Self {
            convert_devices: config.convert_devices,
            voice_call_quirk: config.voice_call_quirk,
        }
    }

    pub fn convert_devices(&self) -> bool {
        self.convert_devices
    }

    pub fn voice_call_quirk(&self) -> bool {
        self.voice_call_quirk
    }

    /// Mask reported by the vendor HAL, on its way to the framework
    pub fn to_jb(&self, device: IcsDevices) -> AudioDevices {
        if self.convert_devices {
            ics_to_jb(device)
        } else {
            AudioDevices(device.bits())
        }
    }

    /// Mask requested by the framework, on its way to the vendor HAL
    pub fn to_ics(&self, device: AudioDevices) -> IcsDevices {
        let ics_device = if self.convert_devices {
            jb_to_ics(device)
        } else {
            IcsDevices(device.bits())
        };

        if self.voice_call_quirk {
            fixup_audio_devices(ics_device)
        } else {
            ics_device
        }
    }

    /// Convert an untagged mask in the given direction
    pub fn convert(&self, devices: u32, mode: ConversionMode) -> u32 {
        let ret = match mode {
            ConversionMode::IcsToJb => self.to_jb(IcsDevices(devices)).bits(),
            ConversionMode::JbToIcs => self.to_ics(AudioDevices(devices)).bits(),
        };
        info!("convert_audio_devices: {} ({:#x} -> {:#x})", mode, devices, ret);
        ret
    }

    /// Convert using the integer mode code; unknown codes pass the mask through
    pub fn convert_raw(&self, devices: u32, mode: i32) -> u32 {
        match ConversionMode::from_raw(mode) {
            Some(mode) => self.convert(devices, mode),
            None => {
                error!("convert_audio_devices: Invalid conversion mode {}", mode);
                devices
            }
        }
    }
}

impl Default for DeviceConverter {
    fn default() -> Self {
        Self::new(&CompatConfig::default())
    }
}

/// Convert with the default configuration (layout conversion on, no quirk)
pub fn convert_audio_devices(devices: u32, mode: ConversionMode) -> u32 {
    DeviceConverter::default().convert(devices, mode)
}
