//! Simulation state and core types
//!
//! Everything the frame driver reads for drawing lives here and is owned by a
//! single [`Simulation`] context.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::point_in_circle;
use super::color::Hsl;
use super::satellite::{Satellite, generate_satellites};
use crate::consts::*;

/// Whether the main circle is moving or frozen with its satellites revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Circle moves and bounces; satellites hidden
    #[default]
    Running,
    /// Circle frozen; satellites revealed and selectable once fully shown
    Stopped,
}

/// Tunable constants for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub circle_radius: f32,
    /// Initial velocity (pixels/second)
    pub start_velocity: Vec2,
    pub start_color: Hsl,
    pub satellite_count: usize,
    /// Baseline orbit radius (each satellite varies it by ±20%)
    pub orbit_radius: f32,
    /// Satellite dot radius at full reveal
    pub dot_radius: f32,
    pub reveal_duration_ms: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            circle_radius: CIRCLE_RADIUS,
            start_velocity: Vec2::new(CIRCLE_START_VX, CIRCLE_START_VY),
            start_color: Hsl::default(),
            satellite_count: SATELLITE_COUNT,
            orbit_radius: SATELLITE_ORBIT_RADIUS,
            dot_radius: SATELLITE_DOT_RADIUS,
            reveal_duration_ms: REVEAL_DURATION_MS,
        }
    }
}

/// The moving circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCircle {
    pub pos: Vec2,
    pub radius: f32,
    /// Velocity in pixels/second
    pub vel: Vec2,
    pub color: Hsl,
}

impl MainCircle {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: Hsl) -> Self {
        Self {
            pos,
            radius,
            vel,
            color,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point_in_circle(point, self.pos, self.radius)
    }
}

/// Spoke/satellite reveal timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealAnimation {
    /// 0 (hidden) to 1 (fully shown)
    pub progress: f32,
    pub duration_ms: f32,
    /// Simulation clock at the last Running -> Stopped transition
    pub started_at_ms: Option<f64>,
}

impl RevealAnimation {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            progress: 0.0,
            duration_ms,
            started_at_ms: None,
        }
    }

    /// Restart the reveal at `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.progress = 0.0;
        self.started_at_ms = Some(now_ms);
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.started_at_ms = None;
    }

    /// Progress at `now_ms` for the current start instant, capped at 1
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        match self.started_at_ms {
            Some(start) => {
                let elapsed = (now_ms - start) as f32;
                (elapsed / self.duration_ms).min(1.0).max(0.0)
            }
            None => self.progress,
        }
    }

    /// Recompute stored progress from the clock
    pub fn update(&mut self, now_ms: f64) {
        self.progress = self.progress_at(now_ms);
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Read-only copy of everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub run_state: RunState,
    pub circle: MainCircle,
    pub satellites: Vec<Satellite>,
    pub progress: f32,
    pub dot_radius: f32,
    pub bounds: Vec2,
}

/// Complete sketch state, generic over its random source
#[derive(Debug, Clone)]
pub struct Simulation<R = Pcg32> {
    pub(crate) config: SimConfig,
    /// Canvas size (width, height), supplied by the caller
    pub(crate) bounds: Vec2,
    pub(crate) circle: MainCircle,
    pub(crate) satellites: Vec<Satellite>,
    pub(crate) run_state: RunState,
    pub(crate) reveal: RevealAnimation,
    /// Sum of all frame deltas (milliseconds)
    pub(crate) clock_ms: f64,
    pub(crate) rng: R,
}

impl Simulation<Pcg32> {
    /// Default sketch seeded for reproducibility
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_config(
            SimConfig::default(),
            width,
            height,
            Pcg32::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Simulation<R> {
    /// Build a simulation with the circle centered in the bounds
    pub fn with_config(config: SimConfig, width: f32, height: f32, mut rng: R) -> Self {
        let bounds = Vec2::new(width, height);
        let circle = MainCircle::new(
            bounds / 2.0,
            config.circle_radius,
            config.start_velocity,
            config.start_color,
        );
        let satellites = generate_satellites(
            &mut rng,
            circle.color,
            config.satellite_count,
            config.orbit_radius,
        );
        let reveal = RevealAnimation::new(config.reveal_duration_ms);

        Self {
            config,
            bounds,
            circle,
            satellites,
            run_state: RunState::Running,
            reveal,
            clock_ms: 0.0,
            rng,
        }
    }

    /// Replace the satellite ring using the circle's current colour
    pub(crate) fn regenerate_satellites(&mut self) {
        self.satellites = generate_satellites(
            &mut self.rng,
            self.circle.color,
            self.config.satellite_count,
            self.config.orbit_radius,
        );
    }

    /// Update canvas size (on resize); does not move the circle
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Place the circle (keeps the satellites and run state)
    pub fn set_circle(&mut self, circle: MainCircle) {
        self.circle = circle;
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn circle(&self) -> &MainCircle {
        &self.circle
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn progress(&self) -> f32 {
        self.reveal.progress
    }

    pub fn reveal(&self) -> &RevealAnimation {
        &self.reveal
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Current satellite positions (derived from the circle center)
    pub fn satellite_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.satellites
            .iter()
            .map(move |s| s.position(self.circle.pos))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            run_state: self.run_state,
            circle: self.circle.clone(),
            satellites: self.satellites.clone(),
            progress: self.reveal.progress,
            dot_radius: self.config.dot_radius,
            bounds: self.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simulation_defaults() {
        let sim = Simulation::new(7, 800.0, 600.0);
        assert_eq!(sim.run_state(), RunState::Running);
        assert_eq!(sim.circle().pos, Vec2::new(400.0, 300.0));
        assert_eq!(sim.circle().radius, 30.0);
        assert_eq!(sim.circle().vel, Vec2::new(75.0, 85.0));
        assert_eq!(sim.circle().color, Hsl::new(200.0, 80.0, 60.0));
        assert_eq!(sim.satellites().len(), 8);
        assert_eq!(sim.progress(), 0.0);
    }

    #[test]
    fn test_reveal_progress_caps_at_one() {
        let mut reveal = RevealAnimation::new(500.0);
        reveal.start(1000.0);
        assert_eq!(reveal.progress_at(1000.0), 0.0);
        assert!((reveal.progress_at(1250.0) - 0.5).abs() < 1e-6);
        assert_eq!(reveal.progress_at(1500.0), 1.0);
        assert_eq!(reveal.progress_at(9000.0), 1.0);
    }

    #[test]
    fn test_reveal_start_resets_progress() {
        let mut reveal = RevealAnimation::new(500.0);
        reveal.start(0.0);
        reveal.update(600.0);
        assert!(reveal.is_complete());
        reveal.start(600.0);
        assert_eq!(reveal.progress, 0.0);
        assert!(!reveal.is_complete());
    }

    #[test]
    fn test_snapshot_matches_state() {
        let sim = Simulation::new(3, 640.0, 480.0);
        let snap = sim.snapshot();
        assert_eq!(snap.run_state, sim.run_state());
        assert_eq!(&snap.circle, sim.circle());
        assert_eq!(snap.satellites.as_slice(), sim.satellites());
        assert_eq!(snap.bounds, Vec2::new(640.0, 480.0));
        assert_eq!(snap.dot_radius, 15.0);
    }

    #[test]
    fn test_satellite_positions_follow_circle() {
        let mut sim = Simulation::new(3, 800.0, 600.0);
        let circle = MainCircle::new(Vec2::new(200.0, 200.0), 30.0, Vec2::ZERO, Hsl::default());
        sim.set_circle(circle);
        let first = sim.satellite_positions().next().unwrap();
        let r = sim.satellites()[0].base_radius;
        assert!((first - Vec2::new(200.0 + r, 200.0)).length() < 1e-3);
    }

    #[test]
    fn test_config_roundtrip_with_missing_fields() {
        let config: SimConfig = serde_json::from_str(r#"{"circle_radius": 40.0}"#).unwrap();
        assert_eq!(config.circle_radius, 40.0);
        assert_eq!(config.satellite_count, 8);
        assert_eq!(config.reveal_duration_ms, 500.0);
    }
}
