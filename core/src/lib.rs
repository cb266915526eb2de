//! gzip-core
//!
//! Gzip compress / decompress / sniff facade for scripted load tests.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

pub mod compression;
pub mod facade;
pub mod module;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::CompressionLevel;
    pub use crate::config::{ConfigError, GzipConfig};
    pub use crate::constants::MODULE_NAME;
    pub use crate::facade::Gzip;
    pub use crate::module::{Instance, Module, ModuleRegistry, RegistryError, RootModule, VuHandle};
    pub use crate::types::GzipError;
}
