//! module/mod.rs
//! Registration shim between the host scripting runtime and the facade.
//!
//! The host resolves a capability name to a [`Module`], then asks it for
//! one [`Instance`] per execution context. Instances share nothing.

pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
