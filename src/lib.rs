pub mod config;
pub mod hal;

pub use config::CompatConfig;
pub use hal::{
    convert_audio_devices, fixup_audio_parameters, AudioDevices, ConversionMode,
    DeviceConverter, IcsDevices, ParameterRewriter,
};
