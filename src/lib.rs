//! Satellite Bounce - a bouncing-circle canvas sketch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, bounce, reveal state machine)
//! - `renderer`: Frame building and the Canvas 2D backend
//! - `settings`: Preferences persisted in LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{ClickOutcome, Hsl, HoverTarget, RunState, SimConfig, Simulation, Snapshot};

use glam::Vec2;

/// Sketch configuration constants
pub mod consts {
    /// Main circle radius (pixels)
    pub const CIRCLE_RADIUS: f32 = 30.0;
    /// Initial main circle velocity (pixels/second)
    pub const CIRCLE_START_VX: f32 = 75.0;
    pub const CIRCLE_START_VY: f32 = 85.0;

    /// Initial main circle colour (blue-cyan)
    pub const CIRCLE_START_HUE: f32 = 200.0;
    pub const CIRCLE_START_SATURATION: f32 = 80.0;
    pub const CIRCLE_START_LIGHTNESS: f32 = 60.0;

    /// Number of satellites in the ring
    pub const SATELLITE_COUNT: usize = 8;
    /// Baseline orbit radius; each satellite varies it by ±20%
    pub const SATELLITE_ORBIT_RADIUS: f32 = 150.0;
    /// Satellite dot radius at full reveal
    pub const SATELLITE_DOT_RADIUS: f32 = 15.0;

    /// Spoke/satellite reveal animation length (milliseconds)
    pub const REVEAL_DURATION_MS: f32 = 500.0;
    /// Scale of a satellite dot at progress 0 (grows to 1.0 at full reveal)
    pub const REVEAL_MIN_SCALE: f32 = 0.3;

    /// Canvas clear colour
    pub const BACKGROUND: &str = "#0b0f14";
    /// Spoke stroke width
    pub const SPOKE_WIDTH: f32 = 1.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Dot scale for a reveal progress in [0, 1]
#[inline]
pub fn reveal_scale(progress: f32) -> f32 {
    consts::REVEAL_MIN_SCALE + progress * (1.0 - consts::REVEAL_MIN_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(150.0, 0.0);
        assert!((p.x - 150.0).abs() < 0.001);
        assert!(p.y.abs() < 0.001);

        let p = polar_to_cartesian(100.0, PI / 2.0);
        assert!(p.x.abs() < 0.001);
        assert!((p.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_reveal_scale_endpoints() {
        assert!((reveal_scale(0.0) - 0.3).abs() < 1e-6);
        assert!((reveal_scale(1.0) - 1.0).abs() < 1e-6);
    }
}
