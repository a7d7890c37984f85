//! Swipe gestures to intents.
//!
//! Hosts capture a pan gesture however their toolkit allows and pass the
//! final translation here. Screen coordinates are assumed: `+x` is right,
//! `+y` is down.
//!
//! | Swipe | Intent |
//! |-------|--------|
//! | right | rotate clockwise |
//! | left  | rotate counter-clockwise |
//! | up    | advance |
//! | down, or too short | nothing |

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Default minimum swipe length, in host pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Tuning for swipe classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Swipes shorter than this along both axes are ignored.
    pub threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Maps a swipe translation to an intent, if it means anything.
///
/// The dominant axis decides the kind of gesture. Horizontal swipes rotate
/// (clockwise only if the swipe goes right by more than the threshold).
/// Vertical swipes advance only when they go up by more than the threshold.
///
/// # Example
///
/// ```
/// use doorway_core::input::{classify_swipe, GestureConfig};
/// use doorway_core::intent::Intent;
/// use glam::Vec2;
///
/// let config = GestureConfig::default();
/// assert_eq!(classify_swipe(Vec2::new(0.0, -120.0), &config), Some(Intent::Advance));
/// assert_eq!(classify_swipe(Vec2::new(80.0, 10.0), &config), Some(Intent::TURN_RIGHT));
/// assert_eq!(classify_swipe(Vec2::new(10.0, 10.0), &config), None);
/// ```
#[must_use]
pub fn classify_swipe(translation: Vec2, config: &GestureConfig) -> Option<Intent> {
    let threshold = config.threshold;
    let magnitude = translation.abs();
    if magnitude.max_element() < threshold {
        return None;
    }

    if magnitude.x > magnitude.y {
        Some(Intent::Rotate {
            clockwise: translation.x > threshold,
        })
    } else if translation.y < -threshold {
        Some(Intent::Advance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(x: f32, y: f32) -> Option<Intent> {
        classify_swipe(Vec2::new(x, y), &GestureConfig::default())
    }

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(classify(49.0, -49.0), None);
        assert_eq!(classify(0.0, 0.0), None);
    }

    #[test]
    fn horizontal_swipes_rotate() {
        assert_eq!(classify(200.0, 30.0), Some(Intent::TURN_RIGHT));
        assert_eq!(classify(-200.0, 30.0), Some(Intent::TURN_LEFT));
    }

    #[test]
    fn swipe_up_advances() {
        assert_eq!(classify(5.0, -60.0), Some(Intent::Advance));
    }

    #[test]
    fn swipe_down_does_nothing() {
        assert_eq!(classify(5.0, 60.0), None);
    }

    #[test]
    fn vertical_wins_ties() {
        assert_eq!(classify(70.0, -70.0), Some(Intent::Advance));
    }

    #[test]
    fn swipe_at_exact_threshold_is_not_clockwise() {
        assert_eq!(classify(50.0, 0.0), Some(Intent::TURN_LEFT));
        assert_eq!(classify(0.0, -50.0), None);
    }

    #[test]
    fn custom_threshold() {
        let config = GestureConfig { threshold: 10.0 };
        assert_eq!(classify_swipe(Vec2::new(0.0, -12.0), &config), Some(Intent::Advance));
    }
}
