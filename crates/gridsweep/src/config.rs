#![forbid(unsafe_code)]

//! Recognizer configuration.

use std::time::Duration;

/// Thresholds and switches for the sweep recognizer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Master switch. When false every entry point is inert (default: true).
    pub enabled: bool,
    /// Whether edge-band auto-scrolling runs during a selection (default: true).
    pub auto_scroll: bool,
    /// Vertical travel from the begin point, in content units, that arms
    /// auto-scrolling for the rest of the gesture (default: 50.0).
    pub arm_distance: f32,
    /// Distance scrolled per auto-scroll tick (default: 30.0).
    pub scroll_step: f32,
    /// Fraction of the viewport extent forming each edge hot zone
    /// (default: 0.2, i.e. five equal bands).
    pub hot_zone_fraction: f32,
    /// Delay before re-probing the hot zones after a tick that did not
    /// scroll (default: 300ms).
    pub retry_delay: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_scroll: true,
            arm_distance: 50.0,
            scroll_step: 30.0,
            hot_zone_fraction: 0.2,
            retry_delay: Duration::from_millis(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SweepConfig::default();
        assert!(config.enabled);
        assert!(config.auto_scroll);
        assert_eq!(config.arm_distance, 50.0);
        assert_eq!(config.scroll_step, 30.0);
        assert_eq!(config.hot_zone_fraction, 0.2);
        assert_eq!(config.retry_delay, Duration::from_millis(300));
    }
}
