//! Frame building: snapshot in, draw commands out
//!
//! Draw order is background, then spokes and satellites (stopped only), then
//! the main circle on top.

use glam::Vec2;

use crate::reveal_scale;
use crate::settings::Settings;
use crate::sim::{Hsl, RunState, Snapshot};

/// Fill or stroke colour
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Raw CSS colour (e.g. `#0b0f14`)
    Css(String),
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Hsl(Hsl),
    Hsla(Hsl, f32),
}

impl Paint {
    pub fn to_css(&self) -> String {
        match self {
            Paint::Css(s) => s.clone(),
            Paint::Rgba { r, g, b, a } => format!("rgba({}, {}, {}, {})", r, g, b, a),
            Paint::Hsl(c) => c.to_css(),
            Paint::Hsla(c, a) => c.to_css_alpha(*a),
        }
    }
}

/// Default spoke colour: translucent white
const SPOKE_PAINT: Paint = Paint::Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 0.5,
};

/// A single 2D drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { paint: Paint, size: Vec2 },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        paint: Paint,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
}

/// Build the draw list for one frame
pub fn build_frame(snapshot: &Snapshot, settings: &Settings) -> Vec<DrawCommand> {
    let circle = &snapshot.circle;
    let mut commands = Vec::with_capacity(2 + snapshot.satellites.len() * 2);

    commands.push(DrawCommand::Clear {
        paint: Paint::Css(settings.background.clone()),
        size: snapshot.bounds,
    });

    if snapshot.run_state == RunState::Stopped {
        let progress = snapshot.progress;
        let dot_radius = snapshot.dot_radius * reveal_scale(progress);

        for sat in &snapshot.satellites {
            let pos = sat.position(circle.pos);
            // Spokes grow outward; the dot rides on the spoke tip
            let end = circle.pos + (pos - circle.pos) * progress;

            let spoke_paint = if settings.colored_spokes {
                Paint::Hsl(sat.spoke_color)
            } else {
                SPOKE_PAINT
            };
            commands.push(DrawCommand::Line {
                from: circle.pos,
                to: end,
                width: settings.spoke_width,
                paint: spoke_paint,
            });
            commands.push(DrawCommand::Circle {
                center: end,
                radius: dot_radius,
                paint: Paint::Hsla(sat.color, progress),
            });
        }
    }

    commands.push(DrawCommand::Circle {
        center: circle.pos,
        radius: circle.radius,
        paint: Paint::Hsl(circle.color),
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulation;

    #[test]
    fn test_running_frame_is_background_and_circle() {
        let sim = Simulation::new(1, 800.0, 600.0);
        let frame = build_frame(&sim.snapshot(), &Settings::default());
        assert_eq!(frame.len(), 2);
        assert!(matches!(frame[0], DrawCommand::Clear { .. }));
        assert_eq!(
            frame[1],
            DrawCommand::Circle {
                center: Vec2::new(400.0, 300.0),
                radius: 30.0,
                paint: Paint::Hsl(Hsl::new(200.0, 80.0, 60.0)),
            }
        );
    }

    #[test]
    fn test_stopped_frame_draws_ring_under_circle() {
        let mut sim = Simulation::new(1, 800.0, 600.0);
        sim.click(400.0, 300.0);
        sim.advance(250.0);
        let snap = sim.snapshot();
        let frame = build_frame(&snap, &Settings::default());

        assert_eq!(frame.len(), 2 + 8 * 2);
        assert!(matches!(frame.last(), Some(DrawCommand::Circle { radius, .. }) if *radius == 30.0));

        // First spoke reaches halfway at progress 0.5
        let full = snap.satellites[0].position(snap.circle.pos);
        let DrawCommand::Line { from, to, .. } = &frame[1] else {
            panic!("expected spoke");
        };
        assert_eq!(*from, snap.circle.pos);
        let half = snap.circle.pos + (full - snap.circle.pos) * 0.5;
        assert!((*to - half).length() < 1e-3);

        let DrawCommand::Circle { radius, paint, .. } = &frame[2] else {
            panic!("expected satellite");
        };
        assert!((radius - 15.0 * 0.65).abs() < 1e-4);
        assert_eq!(*paint, Paint::Hsla(snap.satellites[0].color, 0.5));
    }

    #[test]
    fn test_colored_spokes() {
        let mut sim = Simulation::new(1, 800.0, 600.0);
        sim.click(400.0, 300.0);
        let settings = Settings {
            colored_spokes: true,
            ..Default::default()
        };
        let snap = sim.snapshot();
        let frame = build_frame(&snap, &settings);
        let DrawCommand::Line { paint, .. } = &frame[1] else {
            panic!("expected spoke");
        };
        assert_eq!(*paint, Paint::Hsl(snap.satellites[0].spoke_color));
    }

    #[test]
    fn test_paint_css() {
        assert_eq!(SPOKE_PAINT.to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Paint::Css("#0b0f14".into()).to_css(), "#0b0f14");
        assert_eq!(
            Paint::Hsla(Hsl::new(10.0, 20.0, 30.0), 1.0).to_css(),
            "hsla(10, 20%, 30%, 1)"
        );
    }
}
