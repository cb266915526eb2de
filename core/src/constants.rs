/// Capability name scripts import the facade under.
pub const MODULE_NAME: &str = "k6/x/gzip";

/// Every extension module name must start with this prefix.
pub const EXTENSION_PREFIX: &str = "k6/x/";

/// Argument names used in empty-input errors.
pub mod arg_names {
    pub const INPUT: &str = "input";
    pub const COMPRESSED: &str = "compressed data";
}
