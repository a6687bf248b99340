//! Tuning configuration for the rail engine.
//!
//! These are product tuning values, not structural constants: hosts may load
//! them from a config file, but the defaults reproduce the shipped behavior
//! exactly and are what every test in this workspace asserts against.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Damping applied to normalized wheel travel. Deliberately below 1 so raw
/// device deltas read as smooth rail motion.
pub const DEFAULT_WHEEL_GAIN: f32 = 0.65;

/// Pixels per line for line-mode wheel deltas.
pub const DEFAULT_LINE_DELTA_PX: f32 = 16.0;

/// A horizontal gesture must beat the vertical delta by this ratio before
/// the horizontal axis wins; vertical wheel motion is the default "advance
/// the rail" gesture.
pub const DEFAULT_AXIS_DOMINANCE: f32 = 1.2;

/// How long a pointer must rest on a slide before it expands.
pub const DEFAULT_HOVER_ACTIVATE_DELAY_MS: u64 = 1000;

/// Card count when no breakpoint matches.
pub const DEFAULT_CARD_COUNT: usize = 2;

/// One viewport-width breakpoint: widths at or above `min_width` show
/// `card_count` cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: f32,
    pub card_count: usize,
}

/// Tuning values for one rail instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailConfig {
    /// Multiplier on normalized wheel travel.
    pub wheel_gain: f32,
    /// Pixel height of one "line" for line-mode deltas.
    pub line_delta_px: f32,
    /// Ratio the horizontal delta must exceed the vertical one by.
    pub axis_dominance: f32,
    /// Hover dwell before a slide expands, in milliseconds.
    pub hover_activate_delay_ms: u64,
    /// Width breakpoints, evaluated largest-first.
    pub breakpoints: Vec<Breakpoint>,
    /// Card count below the smallest breakpoint.
    pub default_card_count: usize,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            wheel_gain: DEFAULT_WHEEL_GAIN,
            line_delta_px: DEFAULT_LINE_DELTA_PX,
            axis_dominance: DEFAULT_AXIS_DOMINANCE,
            hover_activate_delay_ms: DEFAULT_HOVER_ACTIVATE_DELAY_MS,
            breakpoints: vec![
                Breakpoint {
                    min_width: 1024.0,
                    card_count: 5,
                },
                Breakpoint {
                    min_width: 640.0,
                    card_count: 3,
                },
            ],
            default_card_count: DEFAULT_CARD_COUNT,
        }
    }
}

impl RailConfig {
    /// Hover dwell as a [`Duration`].
    pub fn hover_activate_delay(&self) -> Duration {
        Duration::from_millis(self.hover_activate_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_tuning() {
        let cfg = RailConfig::default();
        assert_eq!(cfg.wheel_gain, 0.65);
        assert_eq!(cfg.line_delta_px, 16.0);
        assert_eq!(cfg.axis_dominance, 1.2);
        assert_eq!(cfg.hover_activate_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.breakpoints.len(), 2);
        assert_eq!(cfg.breakpoints[0].card_count, 5);
        assert_eq!(cfg.default_card_count, 2);
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let cfg: RailConfig =
            serde_json::from_str(r#"{ "wheel_gain": 0.5 }"#).unwrap();
        assert_eq!(cfg.wheel_gain, 0.5);
        assert_eq!(cfg.line_delta_px, DEFAULT_LINE_DELTA_PX);
        assert_eq!(cfg.default_card_count, DEFAULT_CARD_COUNT);
    }
}
