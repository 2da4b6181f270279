pub mod constants;
pub mod format_converter;
pub mod mock;
pub mod parameters;
pub mod quirks;
pub mod registry;
pub mod traits;
pub mod types;
pub mod wrapper;

pub use format_converter::{convert_audio_devices, ics_to_jb, jb_to_ics, DeviceConverter};
pub use parameters::{fixup_audio_parameters, AudioParameter, ParameterRewriter};
pub use quirks::fixup_audio_devices;
pub use registry::{load_vendor_module, vendor_module_name, ModuleError, ModuleRegistry, ModuleResolver};
pub use traits::{HwDevice, HwModule};
pub use types::{AudioDevices, ConversionMode, IcsDevices};
pub use wrapper::{open_compat_device, CompatDevice};
