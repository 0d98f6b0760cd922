//! Collision detection and response against the court
//!
//! The court is flat: a ground line, a thin vertical net in the middle and
//! two open side edges. Each check is a pure function of the ball's position
//! and velocity so the tick can apply them in a fixed order.

use glam::Vec2;

use super::state::Side;
use crate::consts::*;

/// Result of the ball reaching the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Position clamped onto the ground line
    pub pos: Vec2,
    /// Velocity after the bounce
    pub vel: Vec2,
    /// Downward speed before the bounce (0 if the ball wasn't falling)
    pub impact_speed: f32,
    /// Bounce too weak to continue the rally
    pub dead: bool,
}

/// Top of the net in screen coordinates
#[inline]
pub fn net_top() -> f32 {
    GROUND_Y - NET_HEIGHT
}

/// Check the ball against the net.
///
/// Returns the corrected `(pos, vel)` if the ball is within the net's band and
/// below its top: horizontal velocity reversed and damped, position pushed
/// away from the net line so the ball can't stick inside it.
pub fn net_collision(pos: Vec2, vel: Vec2) -> Option<(Vec2, Vec2)> {
    if (pos.x - NET_X).abs() >= NET_HALF_WIDTH || pos.y <= net_top() {
        return None;
    }

    let vel = Vec2::new(-vel.x * NET_RESTITUTION, vel.y);
    let nudge = if pos.x < NET_X { -NET_NUDGE } else { NET_NUDGE };
    Some((Vec2::new(pos.x + nudge, pos.y), vel))
}

/// Check the ball against the ground.
///
/// A falling ball is reflected with [`GROUND_RESTITUTION`]. The rally is dead
/// when the resulting vertical speed is under [`DEAD_BALL_SPEED`], which also
/// covers a ball resting on the ground.
pub fn ground_contact(pos: Vec2, vel: Vec2) -> Option<GroundContact> {
    if pos.y < GROUND_Y {
        return None;
    }

    let mut vel = vel;
    let impact_speed = vel.y.max(0.0);
    if vel.y > 0.0 {
        vel.y = -vel.y * GROUND_RESTITUTION;
    }

    Some(GroundContact {
        pos: Vec2::new(pos.x, GROUND_Y),
        vel,
        impact_speed,
        dead: vel.y.abs() < DEAD_BALL_SPEED,
    })
}

/// Side that wins if the ball has left the court at `x`, if it has
pub fn out_of_bounds(x: f32) -> Option<Side> {
    if x < 0.0 {
        Some(Side::Right)
    } else if x > COURT_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}
