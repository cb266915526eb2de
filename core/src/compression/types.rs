//! compression/types.rs
//! Compression level selection and the codec traits.
use std::fmt;
use std::str::FromStr;

use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::compression::constants::{BEST_LEVEL, DEFAULT_LEVEL, FAST_LEVEL, MAX_LEVEL};
use crate::types::GzipError;

/// DEFLATE effort preset.
///
/// Serialises as `"fast"`, `"default"`, `"best"` or `{ "custom": n }`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    #[default]
    Fast,
    Default,
    Best,
    Custom(u32),
}

impl CompressionLevel {
    /// Numeric level in `0..=9`.
    pub fn level(&self) -> u32 {
        match self {
            CompressionLevel::Fast      => FAST_LEVEL,
            CompressionLevel::Default   => DEFAULT_LEVEL,
            CompressionLevel::Best      => BEST_LEVEL,
            CompressionLevel::Custom(n) => *n,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.level() <= MAX_LEVEL
    }

    /// Out-of-range custom levels fall back to the encoder default.
    pub fn to_flate2(&self) -> Compression {
        match self {
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Best => Compression::best(),
            CompressionLevel::Custom(n) if *n <= MAX_LEVEL => Compression::new(*n),
            _ => Compression::default(),
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionLevel::Fast      => f.write_str("fast"),
            CompressionLevel::Default   => f.write_str("default"),
            CompressionLevel::Best      => f.write_str("best"),
            CompressionLevel::Custom(n) => write!(f, "{}", n),
        }
    }
}

/// Parses a preset name or a bare digit.
impl FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(CompressionLevel::Fast),
            "default" => Ok(CompressionLevel::Default),
            "best" => Ok(CompressionLevel::Best),
            other => match other.parse::<u32>() {
                Ok(n) if n <= MAX_LEVEL => Ok(CompressionLevel::Custom(n)),
                Ok(n) => Err(format!("compression level {} is out of range 0..={}", n, MAX_LEVEL)),
                Err(_) => Err(format!("unknown compression level: {:?}", s)),
            },
        }
    }
}

// Send + Sync so one codec value can back a facade shared by reference.
pub trait Compressor: Send + Sync {
    /// Compress a whole payload into a single container.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, GzipError>;
}

pub trait Decompressor: Send + Sync {
    /// Inflate a whole container into memory.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, GzipError>;
}
