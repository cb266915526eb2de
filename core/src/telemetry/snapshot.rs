//! telemetry/snapshot.rs
//! Immutable record of one facade call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::timers::{Op, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpStats {
    pub op: Op,
    pub bytes_plain: u64,
    pub bytes_compressed: u64,
    /// `bytes_compressed / bytes_plain`; 0.0 when there is no plain data.
    pub compression_ratio: f64,
    pub throughput_plain_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl OpStats {
    /// `input_len`/`output_len` are taken in call order and mapped onto
    /// plain/compressed according to `op`.
    pub fn from(op: Op, input_len: usize, output_len: usize, timer: &TelemetryTimer) -> Self {
        let (plain, compressed) = match op {
            Op::Compress   => (input_len as u64, output_len as u64),
            Op::Decompress => (output_len as u64, input_len as u64),
        };
        let elapsed = timer.elapsed();

        let compression_ratio = if plain > 0 {
            compressed as f64 / plain as f64
        } else {
            0.0
        };
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            plain as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            op,
            bytes_plain: plain,
            bytes_compressed: compressed,
            compression_ratio,
            throughput_plain_bytes_per_sec: throughput,
            elapsed,
        }
    }

    /// Space saved relative to the plain payload, in percent. Negative when
    /// the container is larger than its contents.
    pub fn savings_percent(&self) -> f64 {
        if self.bytes_plain == 0 {
            return 0.0;
        }
        (1.0 - self.compression_ratio) * 100.0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompress_swaps_plain_and_compressed() {
        let mut timer = TelemetryTimer::new();
        timer.finish();
        let stats = OpStats::from(Op::Decompress, 25, 100, &timer);
        assert_eq!(stats.bytes_plain, 100);
        assert_eq!(stats.bytes_compressed, 25);
        assert!((stats.compression_ratio - 0.25).abs() < f64::EPSILON);
        assert!((stats.savings_percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn serialises_to_json() {
        let timer = TelemetryTimer::new();
        let stats = OpStats::from(Op::Compress, 10, 30, &timer);
        let json = stats.to_json().unwrap();
        assert!(json.contains("\"op\":\"compress\""));
        let back: OpStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bytes_compressed, 30);
    }
}
