//! Horizontal shake played on a field that failed validation.
//!
//! The schedule is computed up front as a list of `(delay, offset)` frames
//! relative to the field's resting position; the browser layer replays it
//! with one timer per frame.

#[cfg(test)]
#[path = "shake_test.rs"]
mod shake_test;

use serde::{Deserialize, Serialize};

/// Upper bounds accepted from page configuration.
pub const MAX_SHAKE_DURATION_MS: u32 = 10_000;
pub const MAX_SHAKE_OSCILLATIONS: u32 = 50;

/// Shake tuning, exposed through page configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeSettings {
    pub amplitude_px: f64,
    pub oscillations: u32,
    pub duration_ms: u32,
}

impl Default for ShakeSettings {
    fn default() -> Self {
        Self { amplitude_px: 3.0, oscillations: 3, duration_ms: 500 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeFrame {
    /// Delay from the start of the shake.
    pub at_ms: u32,
    /// Horizontal offset from the resting position.
    pub offset_px: f64,
}

impl ShakeSettings {
    /// Whether these settings stay within the configurable bounds.
    pub fn in_range(&self) -> bool {
        self.amplitude_px.is_finite()
            && self.amplitude_px >= 0.0
            && self.oscillations <= MAX_SHAKE_OSCILLATIONS
            && self.duration_ms <= MAX_SHAKE_DURATION_MS
    }
}

/// Frames for one shake: alternating `+amplitude`/`-amplitude` per
/// oscillation, evenly spaced, ending with a reset to offset zero at
/// `duration_ms`. Oscillations are capped at `MAX_SHAKE_OSCILLATIONS`.
pub fn shake_schedule(settings: &ShakeSettings) -> Vec<ShakeFrame> {
    let steps = settings.oscillations.min(MAX_SHAKE_OSCILLATIONS) * 2;
    if steps == 0 {
        return vec![ShakeFrame { at_ms: 0, offset_px: 0.0 }];
    }
    let duration = u64::from(settings.duration_ms);
    let mut frames = (0..steps)
        .map(|step| ShakeFrame {
            // Never exceeds `duration_ms`, so the narrowing cannot fail.
            at_ms: u32::try_from(duration * u64::from(step) / u64::from(steps)).unwrap_or(settings.duration_ms),
            offset_px: if step % 2 == 0 { settings.amplitude_px } else { -settings.amplitude_px },
        })
        .collect::<Vec<_>>();
    frames.push(ShakeFrame { at_ms: settings.duration_ms, offset_px: 0.0 });
    frames
}

/// Inline style for a field at `offset_px`.
pub fn offset_style(offset_px: f64) -> String {
    if offset_px.abs() < f64::EPSILON {
        String::new()
    } else {
        format!("position: relative; left: {offset_px}px;")
    }
}
