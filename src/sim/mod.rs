//! Deterministic simulation module
//!
//! All sketch logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame deltas only (no ambient clock)
//! - Injected, seedable RNG only
//! - Stable iteration order (satellites in generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod satellite;
pub mod state;
pub mod tick;

pub use collision::{WallHit, bounce_axis, bounce_in_bounds, point_in_circle};
pub use color::Hsl;
pub use satellite::{Satellite, generate_satellites};
pub use state::{MainCircle, RevealAnimation, RunState, SimConfig, Simulation, Snapshot};
pub use tick::{ClickOutcome, HoverTarget};
