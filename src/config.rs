//! Playback tuning.

use std::time::Duration;

/// Constants that turn a speed setting into a delay between steps.
///
/// `delay = max(min_delay, (max_speed - speed) * scale)`, so speed 0 is the slowest and anything
/// near `max_speed` bottoms out at `min_delay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Shortest delay between two steps.
    pub min_delay: Duration,
    /// Highest accepted speed.
    pub max_speed: u8,
    /// Delay added per unit of speed below `max_speed`.
    pub scale: Duration,
    /// Speed a new stepper starts with.
    pub default_speed: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(100),
            max_speed: 100,
            scale: Duration::from_millis(10),
            default_speed: 50,
        }
    }
}

impl PlaybackConfig {
    /// Delay between steps at `speed`. Speeds above `max_speed` are treated as `max_speed`.
    pub fn delay_for(&self, speed: u8) -> Duration {
        let slowdown = u32::from(self.max_speed.saturating_sub(speed));
        self.min_delay.max(self.scale * slowdown)
    }
}
