//! module/registry.rs
//! Name → module lookup owned by the host. No global state: the host
//! builds a registry and passes it where imports are resolved.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::constants::{EXTENSION_PREFIX, MODULE_NAME};
use crate::module::types::{Module, RootModule};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("module name {name:?} must start with {prefix:?}")]
    InvalidName { name: String, prefix: &'static str },

    #[error("module {name:?} is already registered")]
    DuplicateModule { name: String },

    #[error("unknown module {name:?}")]
    UnknownModule { name: String },
}

#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn Module>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the gzip module under [`MODULE_NAME`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .modules
            .insert(MODULE_NAME.to_string(), Arc::new(RootModule::new()));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, module: Arc<dyn Module>) -> Result<(), RegistryError> {
        let name = name.into();
        if !name.starts_with(EXTENSION_PREFIX) || name.len() == EXTENSION_PREFIX.len() {
            return Err(RegistryError::InvalidName { name, prefix: EXTENSION_PREFIX });
        }
        if self.modules.contains_key(&name) {
            return Err(RegistryError::DuplicateModule { name });
        }
        tracing::trace!(module = %name, "registered module");
        self.modules.insert(name, module);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Module>, RegistryError> {
        self.modules
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownModule { name: name.to_string() })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .finish()
    }
}
