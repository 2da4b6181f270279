use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use log::{error, info};
use thiserror::Error;

use super::traits::{HwDevice, HwModule};

/// Failure to load or open a wrapped vendor module
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModuleError {
    #[error("couldn't load vendor module {name} ({})", describe(-libc::ENOENT))]
    NotFound { name: String },

    #[error("couldn't open hw device {device} in {module} ({})", describe(*status))]
    OpenFailed {
        module: String,
        device: String,
        status: i32,
    },
}

impl ModuleError {
    /// Negative platform status code for this failure
    pub fn status(&self) -> i32 {
        match self {
            ModuleError::NotFound { .. } => -libc::ENOENT,
            ModuleError::OpenFailed { status, .. } => *status,
        }
    }
}

fn describe(status: i32) -> String {
    io::Error::from_raw_os_error(-status).to_string()
}

/// Resolves module names to loaded modules
pub trait ModuleResolver {
    fn resolve(&self, name: &str) -> Option<Arc<dyn HwModule>>;
}

/// Registry of hardware modules available to the wrapper
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn HwModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    pub fn register<M>(&mut self, name: &str, module: M)
    where
        M: HwModule + 'static,
    {
        self.modules.insert(name.to_string(), Arc::new(module));
    }

    pub fn list_modules(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleResolver for ModuleRegistry {
    fn resolve(&self, name: &str) -> Option<Arc<dyn HwModule>> {
        self.modules.get(name).cloned()
    }
}

/// `<prefix>-<id>` or `<prefix>-<id>.<inst>`
pub fn vendor_module_name(prefix: &str, wrapper_id: &str, inst: Option<&str>) -> String {
    match inst {
        Some(inst) => format!("{}-{}.{}", prefix, wrapper_id, inst),
        None => format!("{}-{}", prefix, wrapper_id),
    }
}

/// Load the vendor module backing `wrapper_id` and open `device_name` in it.
///
/// No device handle is returned on failure and nothing is retried.
pub fn load_vendor_module(
    resolver: &dyn ModuleResolver,
    prefix: &str,
    wrapper_id: &str,
    device_name: &str,
    inst: Option<&str>,
) -> Result<Box<dyn HwDevice>, ModuleError> {
    let module_name = vendor_module_name(prefix, wrapper_id, inst);
    info!("load_vendor_module: {}", module_name);

    let module = resolver.resolve(&module_name).ok_or_else(|| {
        let err = ModuleError::NotFound {
            name: module_name.clone(),
        };
        error!("load_vendor_module: {}", err);
        err
    })?;

    module.open(device_name).map_err(|status| {
        let err = ModuleError::OpenFailed {
            module: module_name,
            device: device_name.to_string(),
            status,
        };
        error!("load_vendor_module: {}", err);
        err
    })
}
