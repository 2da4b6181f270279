/// A loadable hardware module (the vendor HAL library)
///
/// Status codes follow the platform convention: `0` on success, a negative
/// errno value on failure.
pub trait HwModule: Send + Sync {
    /// Module identifier (e.g. "audio.primary")
    fn id(&self) -> &str;

    /// Open the named device exported by this module
    fn open(&self, name: &str) -> Result<Box<dyn HwDevice>, i32>;
}

/// An opened audio device instance
pub trait HwDevice: Send {
    fn name(&self) -> &str;

    /// Devices this HAL can route to, in the HAL's own mask layout
    fn supported_devices(&self) -> u32;

    /// Apply a `key=value;...` parameter string
    fn set_parameters(&mut self, kv_pairs: &str) -> Result<(), i32>;

    /// Query the given keys, returning a `key=value;...` string
    fn get_parameters(&self, keys: &str) -> String;
}
