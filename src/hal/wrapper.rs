use log::info;

use crate::config::CompatConfig;
use super::parameters::ParameterRewriter;
use super::registry::{load_vendor_module, ModuleError, ModuleResolver};
use super::traits::HwDevice;
use super::types::{ConversionMode, IcsDevices};

/// A vendor (ICS) device presented to the framework with JB device masks.
///
/// Parameters flowing down are converted to the legacy layout, replies and
/// device capabilities flowing up are converted back.
pub struct CompatDevice {
    inner: Box<dyn HwDevice>,
    rewriter: ParameterRewriter,
}

impl CompatDevice {
    pub fn new(inner: Box<dyn HwDevice>, config: &CompatConfig) -> Self {
        Self {
            inner,
            rewriter: ParameterRewriter::new(config),
        }
    }

    pub fn into_inner(self) -> Box<dyn HwDevice> {
        self.inner
    }
}

impl HwDevice for CompatDevice {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn supported_devices(&self) -> u32 {
        let ics_devices = IcsDevices(self.inner.supported_devices());
        self.rewriter.converter().to_jb(ics_devices).bits()
    }

    fn set_parameters(&mut self, kv_pairs: &str) -> Result<(), i32> {
        let fixed = self.rewriter.rewrite(kv_pairs, ConversionMode::JbToIcs);
        self.inner.set_parameters(&fixed)
    }

    fn get_parameters(&self, keys: &str) -> String {
        let reply = self.inner.get_parameters(keys);
        self.rewriter.rewrite(&reply, ConversionMode::IcsToJb)
    }
}

/// Open `device_name` from the vendor module behind `wrapper_id` and wrap it
pub fn open_compat_device(
    resolver: &dyn ModuleResolver,
    config: &CompatConfig,
    wrapper_id: &str,
    device_name: &str,
    inst: Option<&str>,
) -> Result<CompatDevice, ModuleError> {
    let inner = load_vendor_module(resolver, &config.vendor_prefix, wrapper_id, device_name, inst)?;
    info!("open_compat_device: wrapped {} from {}", device_name, wrapper_id);
    Ok(CompatDevice::new(inner, config))
}
