//! Gzip (RFC 1952) via flate2, whole-payload encode and decode.

use std::io::{Read, Write};

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

use crate::compression::constants::{GZIP_HEADER_LEN, GZIP_TRAILER_LEN};
use crate::compression::types::{CompressionLevel, Compressor, Decompressor};
use crate::types::{DecodeStage, EncodeStage, GzipError};

#[derive(Debug, Clone, Copy)]
pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    pub fn new(level: CompressionLevel) -> Self {
        Self { level: level.to_flate2() }
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self::new(CompressionLevel::Fast)
    }
}

impl Compressor for GzipCompressor {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, GzipError> {
        let capacity = input.len() / 2 + GZIP_HEADER_LEN + GZIP_TRAILER_LEN;
        let mut enc = GzEncoder::new(Vec::with_capacity(capacity), self.level);
        enc.write_all(input)
            .map_err(|e| GzipError::encoding(EncodeStage::Write, e))?;
        // finish() writes the CRC-32/ISIZE trailer and hands back the buffer
        enc.finish()
            .map_err(|e| GzipError::encoding(EncodeStage::Finish, e))
    }
}

/// Decodes every concatenated member until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipDecompressor;

impl GzipDecompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for GzipDecompressor {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, GzipError> {
        let mut dec = MultiGzDecoder::new(input);
        let mut decompressed = Vec::with_capacity(input.len().saturating_mul(2));
        dec.read_to_end(&mut decompressed)
            .map_err(|e| GzipError::decoding(DecodeStage::Inflate, e))?;
        Ok(decompressed)
    }
}
