//! config.rs
//! Facade configuration. Every field is optional; `None` means default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::{CompressionLevel, MAX_LEVEL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("compression level {level} is out of range 0..={max}")]
    InvalidLevel { level: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GzipConfig {
    /// DEFLATE effort.
    /// - `None` or `Some(Fast)` → level 1, tuned for repeated calls under load.
    pub level: Option<CompressionLevel>,

    /// Whether each call reports an `OpStats` record through `tracing`.
    /// - `None` or `Some(false)` → no timing (production default).
    pub collect_metrics: Option<bool>,
}

impl Default for GzipConfig {
    fn default() -> Self {
        Self {
            level: Some(CompressionLevel::Fast),
            collect_metrics: Some(false),
        }
    }
}

impl GzipConfig {
    pub fn new(level: Option<CompressionLevel>, collect_metrics: Option<bool>) -> Self {
        Self {
            level: level.or(Some(CompressionLevel::Fast)),
            collect_metrics: collect_metrics.or(Some(false)),
        }
    }

    pub fn with_metrics_enabled() -> Self {
        Self { level: Some(CompressionLevel::Fast), collect_metrics: Some(true) }
    }

    /// Parse and validate a JSON document such as
    /// `{"level": "best", "collect_metrics": true}`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: GzipConfig = serde_json::from_str(raw)?;
        let config = GzipConfig::new(parsed.level, parsed.collect_metrics);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level();
        if !level.is_valid() {
            return Err(ConfigError::InvalidLevel { level: level.level(), max: MAX_LEVEL });
        }
        Ok(())
    }

    pub fn level(&self) -> CompressionLevel {
        self.level.unwrap_or_default()
    }

    pub fn collect_metrics(&self) -> bool {
        self.collect_metrics.unwrap_or(false)
    }
}
