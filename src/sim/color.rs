//! HSL colour triple
//!
//! Hue is in degrees and is never wrapped: generated hues may drift outside
//! [0, 360), which CSS accepts as-is.

use serde::{Deserialize, Serialize};

/// A colour in HSL space (hue degrees, saturation and lightness percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// CSS `hsl()` string
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    /// CSS `hsla()` string with the given alpha
    pub fn to_css_alpha(&self, alpha: f32) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, alpha)
    }
}

impl Default for Hsl {
    fn default() -> Self {
        use crate::consts::*;
        Self::new(
            CIRCLE_START_HUE,
            CIRCLE_START_SATURATION,
            CIRCLE_START_LIGHTNESS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        let c = Hsl::new(200.0, 80.0, 60.0);
        assert_eq!(c.to_css(), "hsl(200, 80%, 60%)");
        assert_eq!(c.to_css_alpha(0.5), "hsla(200, 80%, 60%, 0.5)");
    }

    #[test]
    fn test_hue_outside_range_is_kept() {
        let c = Hsl::new(-25.5, 30.0, 20.0);
        assert_eq!(c.to_css(), "hsl(-25.5, 30%, 20%)");
    }
}
