//! module/types.rs
//! Host-facing contracts: one `Module` per capability name, one `Instance`
//! per execution context.

use std::fmt;

use crate::config::{ConfigError, GzipConfig};
use crate::facade::Gzip;

/// Opaque handle to one execution context (a virtual user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VuHandle {
    id: u64,
}

impl VuHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for VuHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vu#{}", self.id)
    }
}

/// What an instance hands to the script on import.
#[derive(Debug, Clone, Copy)]
pub struct Exports<'a> {
    pub default: &'a Gzip,
}

/// Factory registered once per capability name.
pub trait Module: Send + Sync {
    fn new_module_instance(&self, vu: VuHandle) -> Box<dyn Instance>;
}

/// Per-context object; lives as long as its execution context.
pub trait Instance: Send {
    fn exports(&self) -> Exports<'_>;
}

/// Root of the gzip capability. Holds configuration only, so one value can
/// serve every context.
#[derive(Debug, Clone, Default)]
pub struct RootModule {
    config: GzipConfig,
}

impl RootModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GzipConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GzipConfig {
        &self.config
    }
}

impl Module for RootModule {
    fn new_module_instance(&self, vu: VuHandle) -> Box<dyn Instance> {
        tracing::trace!(%vu, "new gzip module instance");
        Box::new(ModuleInstance::new(vu, &self.config))
    }
}

#[derive(Debug, Clone)]
pub struct ModuleInstance {
    vu: VuHandle,
    gzip: Gzip,
}

impl ModuleInstance {
    pub fn new(vu: VuHandle, config: &GzipConfig) -> Self {
        Self { vu, gzip: Gzip::new(vu, config) }
    }

    pub fn vu(&self) -> VuHandle {
        self.vu
    }

    pub fn gzip(&self) -> &Gzip {
        &self.gzip
    }
}

impl Instance for ModuleInstance {
    fn exports(&self) -> Exports<'_> {
        Exports { default: &self.gzip }
    }
}
