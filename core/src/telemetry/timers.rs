//! telemetry/timers.rs
//! Per-call wall-clock timer and the operation labels it is reported under.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Compress,
    Decompress,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Compress   => "compress",
            Op::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { start_time: Instant::now(), end_time: None }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Time since start, frozen once `finish` has been called.
    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_timer_is_frozen() {
        let mut timer = TelemetryTimer::new();
        timer.finish();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(timer.elapsed(), first);
    }

    #[test]
    fn op_display_names() {
        assert_eq!(Op::Compress.to_string(), "compress");
        assert_eq!(Op::Decompress.to_string(), "decompress");
    }
}
