//! compression/mod.rs
//! Whole-payload gzip compression, decompression and format sniffing.
//!
//! Notes:
//! - Every call is independent: no encoder/decoder state survives a call.
//! - The sniff is a two-byte magic check, nothing more.
//! - Text containers map each byte to one char (U+0000..=U+00FF).

pub mod binary;
pub mod codecs;
pub mod constants;
pub mod sniff;
pub mod types;

pub use binary::*;
pub use codecs::*;
pub use constants::*;
pub use sniff::*;
pub use types::*;
