//! compression/codecs/mod.rs
//! Concrete codec implementations behind the `Compressor`/`Decompressor` traits.

pub mod gzip;

pub use gzip::*;
