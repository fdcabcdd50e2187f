//! Satellite ring geometry
//!
//! Satellites sit on evenly spaced spokes around the main circle. Each one is
//! stored in polar form (angle, orbit radius) relative to the circle center,
//! so its cartesian position is derived from wherever the circle is frozen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::Hsl;
use crate::{polar_to_cartesian, reveal_scale};

/// Hue spread of satellite colours (degrees, centered on the base hue)
const SATELLITE_HUE_SPREAD: f32 = 120.0;
/// Hue spread of spoke colours (degrees, centered on the base hue)
const SPOKE_HUE_SPREAD: f32 = 60.0;

/// A satellite around the main circle (immutable once generated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    /// Spoke angle (radians)
    pub angle: f32,
    /// Distance from the main circle center
    pub base_radius: f32,
    /// Dot colour
    pub color: Hsl,
    /// Spoke colour
    pub spoke_color: Hsl,
}

impl Satellite {
    /// Position given the main circle's center
    #[inline]
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + polar_to_cartesian(self.base_radius, self.angle)
    }

    /// Dot radius at a reveal progress (also the hit-test radius)
    #[inline]
    pub fn effective_radius(dot_radius: f32, progress: f32) -> f32 {
        dot_radius * reveal_scale(progress)
    }
}

/// Generate a ring of `count` satellites around a base colour
///
/// Draw order per satellite: radius, colour (h, s, l), spoke colour (h, s, l).
pub fn generate_satellites<R: Rng + ?Sized>(
    rng: &mut R,
    base: Hsl,
    count: usize,
    orbit_radius: f32,
) -> Vec<Satellite> {
    let step = std::f32::consts::TAU / count.max(1) as f32;

    (0..count)
        .map(|i| {
            let angle = step * i as f32;
            let base_radius = orbit_radius * (0.8 + rng.random::<f32>() * 0.4);

            let color = Hsl {
                h: base.h + (rng.random::<f32>() - 0.5) * SATELLITE_HUE_SPREAD,
                s: 30.0 + rng.random::<f32>() * 70.0,
                l: 20.0 + rng.random::<f32>() * 70.0,
            };
            let spoke_color = Hsl {
                h: base.h + (rng.random::<f32>() - 0.5) * SPOKE_HUE_SPREAD,
                s: 40.0 + rng.random::<f32>() * 60.0,
                l: 30.0 + rng.random::<f32>() * 40.0,
            };

            Satellite {
                angle,
                base_radius,
                color,
                spoke_color,
            }
        })
        .collect()
}
