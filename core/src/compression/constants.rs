//! compression/constants.rs
//! RFC 1952 container constants and level defaults.

/// Two-byte gzip magic number (ID1, ID2).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// CM byte for DEFLATE, the only method RFC 1952 defines.
pub const GZIP_METHOD_DEFLATE: u8 = 0x08;

/// Fixed header length without optional fields.
pub const GZIP_HEADER_LEN: usize = 10;

/// CRC-32 + ISIZE.
pub const GZIP_TRAILER_LEN: usize = 8;

/// Highest level accepted by the DEFLATE encoder.
pub const MAX_LEVEL: u32 = 9;

/// Level used by the fast preset.
pub const FAST_LEVEL: u32 = 1;
pub const DEFAULT_LEVEL: u32 = 6;
pub const BEST_LEVEL: u32 = 9;
