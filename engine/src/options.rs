//! Search configuration. A small struct with documented defaults rather
//! than bare constants threaded through `search_main`, so the two
//! spec-fixed parameters have one owner instead of being read as magic
//! numbers scattered through the search.

use std::time::Duration;

pub const LIMIT_DEPTH: u8 = 32;
pub const DEFAULT_TIME_CAP: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub depth_cap: u8,
    pub time_cap: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth_cap: LIMIT_DEPTH,
            time_cap: DEFAULT_TIME_CAP,
        }
    }
}

impl EngineConfig {
    pub fn new(depth_cap: u8, time_cap: Duration) -> Self {
        EngineConfig { depth_cap, time_cap }
    }

    /// Clamps a user-supplied depth to the `1..=LIMIT_DEPTH` range.
    pub fn with_depth_cap(depth_cap: u8) -> Self {
        EngineConfig {
            depth_cap: depth_cap.clamp(1, LIMIT_DEPTH),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_cap_is_clamped_to_the_supported_range() {
        assert_eq!(EngineConfig::with_depth_cap(0).depth_cap, 1);
        assert_eq!(EngineConfig::with_depth_cap(200).depth_cap, LIMIT_DEPTH);
        assert_eq!(EngineConfig::with_depth_cap(12).depth_cap, 12);
    }
}
