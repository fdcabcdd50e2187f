//! Per-frame stepping and pointer input
//!
//! Order within a frame: integrate, bounce/clamp, then the caller reads state
//! for drawing and dispatches any pointer events.

use glam::Vec2;
use rand::Rng;

use super::collision::{WallHit, bounce_in_bounds, point_in_circle};
use super::color::Hsl;
use super::satellite::Satellite;
use super::state::{RunState, Simulation};

/// Result of a click dispatched to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Nothing selectable under the pointer
    Ignored,
    /// Main circle clicked while running; reveal started
    Stopped,
    /// Satellite picked while stopped; circle recoloured and moving again
    Selected { index: usize, color: Hsl },
}

/// What a click at a point would hit right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    None,
    MainCircle,
    Satellite(usize),
}

impl HoverTarget {
    /// Whether the pointer should show as clickable
    pub fn is_clickable(&self) -> bool {
        !matches!(self, HoverTarget::None)
    }
}

impl<R: Rng> Simulation<R> {
    /// Advance by `dt_ms` milliseconds of elapsed frame time
    ///
    /// Negative or non-finite deltas count as zero. Returns the walls the
    /// circle bounced off this frame (none while stopped).
    pub fn advance(&mut self, dt_ms: f32) -> WallHit {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        self.clock_ms += dt_ms as f64;

        match self.run_state {
            RunState::Running => {
                let circle = &mut self.circle;
                circle.pos += circle.vel * dt_ms / 1000.0;
                bounce_in_bounds(&mut circle.pos, &mut circle.vel, circle.radius, self.bounds)
            }
            RunState::Stopped => {
                self.reveal.update(self.clock_ms);
                WallHit::default()
            }
        }
    }

    /// Index of the first fully revealed satellite containing `point`
    pub fn satellite_at(&self, point: Vec2) -> Option<usize> {
        if self.run_state != RunState::Stopped || !self.reveal.is_complete() {
            return None;
        }

        let radius = Satellite::effective_radius(self.config.dot_radius, self.reveal.progress);
        self.satellites
            .iter()
            .position(|sat| point_in_circle(point, sat.position(self.circle.pos), radius))
    }

    /// What a click at (x, y) would hit
    pub fn hover(&self, x: f32, y: f32) -> HoverTarget {
        let point = Vec2::new(x, y);
        match self.run_state {
            RunState::Running if self.circle.contains(point) => HoverTarget::MainCircle,
            RunState::Running => HoverTarget::None,
            RunState::Stopped => self
                .satellite_at(point)
                .map_or(HoverTarget::None, HoverTarget::Satellite),
        }
    }

    /// Handle a click at (x, y) in canvas coordinates
    pub fn click(&mut self, x: f32, y: f32) -> ClickOutcome {
        match self.hover(x, y) {
            HoverTarget::None => ClickOutcome::Ignored,
            HoverTarget::MainCircle => {
                self.run_state = RunState::Stopped;
                self.reveal.start(self.clock_ms);
                log::debug!(
                    "Stopped at ({:.1}, {:.1}), t={:.0}ms",
                    self.circle.pos.x,
                    self.circle.pos.y,
                    self.clock_ms
                );
                ClickOutcome::Stopped
            }
            HoverTarget::Satellite(index) => {
                let color = self.satellites[index].color;
                self.circle.color = color;
                self.regenerate_satellites();
                self.run_state = RunState::Running;
                self.reveal.reset();
                log::debug!("Selected satellite {} -> {}", index, color.to_css());
                ClickOutcome::Selected { index, color }
            }
        }
    }
}
