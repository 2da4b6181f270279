use std::sync::{Arc, Mutex};

use crate::hal::parameters::AudioParameter;
use crate::hal::traits::{HwDevice, HwModule};

/// In-memory stand-in for a vendor HAL module
pub struct StubModule {
    id: String,
    supported_devices: u32,
    open_status: Option<i32>,
    received: Arc<Mutex<Vec<String>>>,
}

impl StubModule {
    pub fn new(id: &str, supported_devices: u32) -> Self {
        Self {
            id: id.to_string(),
            supported_devices,
            open_status: None,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every `open` fail with the given (negative) status
    pub fn failing(id: &str, status: i32) -> Self {
        Self {
            open_status: Some(status),
            ..Self::new(id, 0)
        }
    }

    /// Parameter strings received by devices opened from this module
    pub fn received(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.received)
    }
}

impl HwModule for StubModule {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self, name: &str) -> Result<Box<dyn HwDevice>, i32> {
        if let Some(status) = self.open_status {
            return Err(status);
        }

        Ok(Box::new(StubDevice {
            name: name.to_string(),
            supported_devices: self.supported_devices,
            params: AudioParameter::default(),
            received: Arc::clone(&self.received),
        }))
    }
}

/// Device that stores whatever parameters it is given
pub struct StubDevice {
    name: String,
    supported_devices: u32,
    params: AudioParameter,
    received: Arc<Mutex<Vec<String>>>,
}

impl HwDevice for StubDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_devices(&self) -> u32 {
        self.supported_devices
    }

    fn set_parameters(&mut self, kv_pairs: &str) -> Result<(), i32> {
        if let Ok(mut received) = self.received.lock() {
            received.push(kv_pairs.to_string());
        }

        let incoming = AudioParameter::parse(kv_pairs);
        for key in incoming.keys() {
            match incoming.get(key) {
                Some(value) => self.params.add(key, value),
                None => self.params.add(key, ""),
            }
        }
        Ok(())
    }

    fn get_parameters(&self, keys: &str) -> String {
        let mut reply = AudioParameter::default();
        for key in AudioParameter::parse(keys).keys() {
            if let Some(value) = self.params.get(key) {
                reply.add(key, value);
            }
        }
        reply.to_string()
    }
}
