//! facade.rs
//! The object scripts call: six stateless gzip operations.
//!
//! - Byte forms do the work; text forms convert and delegate.
//! - Empty payloads are rejected before touching the codec.
//! - Errors always carry the codec's cause text; there are no partial results.

use tracing::{debug, info, warn};

use crate::compression::{
    bytes_to_text, has_gzip_magic, has_gzip_magic_text, text_to_bytes,
    Compressor, Decompressor, GzipCompressor, GzipDecompressor,
};
use crate::config::GzipConfig;
use crate::constants::arg_names;
use crate::module::VuHandle;
use crate::telemetry::{Op, OpStats, TelemetryTimer};
use crate::types::{DecodeStage, GzipError};

#[derive(Debug, Clone)]
pub struct Gzip {
    vu: VuHandle,
    compressor: GzipCompressor,
    decompressor: GzipDecompressor,
    collect_metrics: bool,
}

impl Gzip {
    pub fn new(vu: VuHandle, config: &GzipConfig) -> Self {
        Self {
            vu,
            compressor: GzipCompressor::new(config.level()),
            decompressor: GzipDecompressor::new(),
            collect_metrics: config.collect_metrics(),
        }
    }

    /// Facade with the default (fast) configuration.
    pub fn for_vu(vu: VuHandle) -> Self {
        Self::new(vu, &GzipConfig::default())
    }

    pub fn vu(&self) -> VuHandle {
        self.vu
    }

    pub fn level(&self) -> u32 {
        self.compressor.level()
    }

    /// Compress UTF-8 text; the container comes back as a binary text string.
    pub fn compress(&self, input: &str) -> Result<String, GzipError> {
        let compressed = self.compress_bytes(input.as_bytes())?;
        Ok(bytes_to_text(&compressed))
    }

    pub fn compress_bytes(&self, input: &[u8]) -> Result<Vec<u8>, GzipError> {
        if input.is_empty() {
            return Err(GzipError::InvalidArgument { arg: arg_names::INPUT });
        }

        let mut timer = self.start_timer();
        let compressed = self.compressor.compress(input).map_err(|e| {
            warn!(vu = self.vu.id(), error = %e, "gzip compress failed");
            e
        })?;
        self.report(Op::Compress, input.len(), compressed.len(), timer.as_mut());

        Ok(compressed)
    }

    /// Inverse of [`Gzip::compress`]: binary text container in, UTF-8 text out.
    pub fn decompress(&self, compressed: &str) -> Result<String, GzipError> {
        if compressed.is_empty() {
            return Err(GzipError::InvalidArgument { arg: arg_names::COMPRESSED });
        }

        let bytes = text_to_bytes(compressed)?;
        let plain = self.decompress_bytes(&bytes)?;
        String::from_utf8(plain).map_err(|e| GzipError::decoding(DecodeStage::Utf8, e))
    }

    pub fn decompress_bytes(&self, compressed: &[u8]) -> Result<Vec<u8>, GzipError> {
        if compressed.is_empty() {
            return Err(GzipError::InvalidArgument { arg: arg_names::COMPRESSED });
        }

        let mut timer = self.start_timer();
        let plain = self.decompressor.decompress(compressed).map_err(|e| {
            warn!(vu = self.vu.id(), len = compressed.len(), error = %e, "gzip decompress failed");
            e
        })?;
        self.report(Op::Decompress, compressed.len(), plain.len(), timer.as_mut());

        Ok(plain)
    }

    /// Magic-number sniff; never fails.
    pub fn is_gzipped(&self, data: &str) -> bool {
        has_gzip_magic_text(data)
    }

    pub fn is_gzipped_bytes(&self, data: &[u8]) -> bool {
        has_gzip_magic(data)
    }

    fn start_timer(&self) -> Option<TelemetryTimer> {
        self.collect_metrics.then(TelemetryTimer::new)
    }

    fn report(&self, op: Op, input_len: usize, output_len: usize, timer: Option<&mut TelemetryTimer>) {
        debug!(vu = self.vu.id(), %op, input_len, output_len, "gzip call");

        if let Some(timer) = timer {
            timer.finish();
            let stats = OpStats::from(op, input_len, output_len, timer);
            info!(
                vu = self.vu.id(),
                op = %stats.op,
                bytes_plain = stats.bytes_plain,
                bytes_compressed = stats.bytes_compressed,
                ratio = stats.compression_ratio,
                elapsed_us = stats.elapsed.as_micros() as u64,
                "gzip telemetry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gzip() -> Gzip {
        Gzip::for_vu(VuHandle::new(1))
    }

    #[test]
    fn text_and_byte_forms_agree() {
        let g = gzip();
        let from_text = g.compress("Hello, World!").unwrap();
        let from_bytes = g.compress_bytes(b"Hello, World!").unwrap();
        assert_eq!(text_to_bytes(&from_text).unwrap(), from_bytes);
    }

    #[test]
    fn invalid_utf8_payload_fails_text_decompress() {
        let g = gzip();
        let compressed = g.compress_bytes(&[0xff, 0xfe, 0xfd]).unwrap();
        let err = g.decompress(&bytes_to_text(&compressed)).unwrap_err();
        assert!(matches!(err, GzipError::Decoding { stage: DecodeStage::Utf8, .. }));
        assert_eq!(g.decompress_bytes(&compressed).unwrap(), vec![0xff, 0xfe, 0xfd]);
    }

    #[test]
    fn metrics_path_returns_same_output() {
        let plain = Gzip::for_vu(VuHandle::new(2));
        let metered = Gzip::new(VuHandle::new(2), &GzipConfig::with_metrics_enabled());
        let a = plain.compress_bytes(b"metrics").unwrap();
        let b = metered.compress_bytes(b"metrics").unwrap();
        assert_eq!(a, b);
        assert_eq!(metered.decompress_bytes(&b).unwrap(), b"metrics".to_vec());
    }
}
