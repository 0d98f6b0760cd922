//! Tennis for Two - an oscilloscope-style tennis volley game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, ball physics, rally/score state)
//! - `controls`: Key bindings mapped to explicit per-frame input
//! - `view`: Pure presentation helpers (court lines, angle indicators, HUD text)
//! - `settings`: Host settings loaded from JSON
//! - `script`: Headless input replay

pub mod controls;
pub mod error;
pub mod script;
pub mod settings;
pub mod sim;
pub mod view;

pub use controls::{Controls, KeyBindings};
pub use error::Error;
pub use settings::Settings;
pub use sim::{FrameInput, Side, Simulation, Snapshot};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (240 Hz)
    pub const SIM_DT: f32 = 1.0 / 240.0;
    /// Accumulator cap in seconds to prevent spiral of death after a stall
    pub const MAX_ACCUMULATED: f32 = 0.25;

    /// Court dimensions (display units, y grows downward)
    pub const COURT_WIDTH: f32 = 980.0;
    pub const COURT_HEIGHT: f32 = 560.0;
    pub const GROUND_Y: f32 = 420.0;
    pub const NET_X: f32 = COURT_WIDTH * 0.5;
    pub const NET_HEIGHT: f32 = 80.0;
    /// Horizontal distance from the net line that counts as touching it
    pub const NET_HALF_WIDTH: f32 = 6.0;
    /// Push applied away from the net after a net hit
    pub const NET_NUDGE: f32 = 2.0;

    /// Physics
    pub const GRAVITY: f32 = 900.0; // units/s²
    pub const GROUND_RESTITUTION: f32 = 0.75;
    pub const NET_RESTITUTION: f32 = 0.6;
    /// Per-tick horizontal damping
    pub const HORIZONTAL_DAMPING: f32 = 0.995;
    /// Bounce speed below which the ball is dead
    pub const DEAD_BALL_SPEED: f32 = 120.0;

    /// Launch
    pub const LAUNCH_SPEED: f32 = 520.0;
    pub const ANGLE_MIN: f32 = 10.0;
    pub const ANGLE_MAX: f32 = 80.0;
    pub const ANGLE_DEFAULT: f32 = 35.0;
    /// Angle change while a raise/lower key is held (degrees/s)
    pub const ANGLE_RATE: f32 = 90.0;
    /// A volley needs the ball this far past the net on the hitter's side
    pub const VOLLEY_NET_CLEARANCE: f32 = 20.0;
    /// ...and this far above the ground
    pub const VOLLEY_GROUND_CLEARANCE: f32 = 10.0;

    /// Serve hold pose
    pub const SERVE_X_LEFT: f32 = 170.0;
    pub const SERVE_X_RIGHT: f32 = 810.0;
    pub const SERVE_HEIGHT: f32 = 40.0;
}

/// Unit direction for a launch angle in degrees, facing right.
///
/// Screen y grows downward, so a positive angle points up (negative y).
#[inline]
pub fn angle_to_dir(angle_deg: f32) -> Vec2 {
    let a = angle_deg.to_radians();
    Vec2::new(a.cos(), -a.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_to_dir() {
        let flat = angle_to_dir(0.0);
        assert!((flat.x - 1.0).abs() < 1e-6);
        assert!(flat.y.abs() < 1e-6);

        let up = angle_to_dir(90.0);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y + 1.0).abs() < 1e-6);
    }
}
