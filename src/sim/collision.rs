//! Hit testing and wall response
//!
//! The canvas is an axis-aligned box from the origin to `bounds`. Each axis is
//! handled independently: touching or crossing either edge reflects that
//! axis's velocity and clamps the center back inside.

use glam::Vec2;

/// Which walls were hit during a bounce check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left or right edge
    pub x: bool,
    /// Top or bottom edge
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Check if a point lies inside (or on the edge of) a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// Reflect and clamp along one axis
///
/// Returns true if the edge condition fired. When `bound < 2 * radius` the
/// lower clamp wins.
pub fn bounce_axis(center: &mut f32, vel: &mut f32, radius: f32, bound: f32) -> bool {
    if *center - radius <= 0.0 || *center + radius >= bound {
        *vel = -*vel;
        *center = center.min(bound - radius).max(radius);
        true
    } else {
        false
    }
}

/// Bounce a circle off the edges of a `bounds`-sized box
pub fn bounce_in_bounds(pos: &mut Vec2, vel: &mut Vec2, radius: f32, bounds: Vec2) -> WallHit {
    WallHit {
        x: bounce_axis(&mut pos.x, &mut vel.x, radius, bounds.x),
        y: bounce_axis(&mut pos.y, &mut vel.y, radius, bounds.y),
    }
}
