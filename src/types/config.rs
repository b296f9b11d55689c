//! Pacing configuration for timer-driven playback

use serde::{Deserialize, Serialize};

/// Timing constants for auto-advance
///
/// Passed to the playback controller at construction; there is no
/// process-wide pacing state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacingConfig {
    /// Seconds of reading time per word of the current message
    pub reading_factor: f64,
    /// Seconds that must elapse from controller start before any
    /// timer-driven advance fires
    pub start_delay: f64,
    /// Tick deltas above this are discarded, so a suspended clock cannot
    /// skip several messages in one jump
    pub max_frame_delta: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            reading_factor: 0.4,
            start_delay: 0.3,
            max_frame_delta: 1.0,
        }
    }
}

impl PacingConfig {
    /// Reading-time threshold for a message of `word_count` words
    pub fn threshold(&self, word_count: usize) -> f64 {
        word_count as f64 * self.reading_factor
    }
}
