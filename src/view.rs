//! Presentation helpers
//!
//! Pure geometry and text for an oscilloscope-style front end. Nothing here
//! touches simulation state; everything is derived from a [`Snapshot`].

use glam::Vec2;

use crate::angle_to_dir;
use crate::consts::*;
use crate::controls::Controls;
use crate::sim::{Ball, Side, Snapshot};

/// Ball dot radius
pub const BALL_DRAW_RADIUS: f32 = 4.0;
/// Angle indicator line length
pub const INDICATOR_LENGTH: f32 = 30.0;
/// Indicator origin distance from each side edge
pub const INDICATOR_INSET: f32 = 120.0;
/// Indicator origin height above the ground
pub const INDICATOR_HEIGHT: f32 = 20.0;
/// Ground line inset from each side edge
pub const GROUND_LINE_INSET: f32 = 40.0;

/// A line segment in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

/// Static court geometry: ground line then net
pub fn court_lines() -> [Line; 2] {
    [
        Line {
            start: Vec2::new(GROUND_LINE_INSET, GROUND_Y),
            end: Vec2::new(COURT_WIDTH - GROUND_LINE_INSET, GROUND_Y),
        },
        Line {
            start: Vec2::new(NET_X, GROUND_Y - NET_HEIGHT),
            end: Vec2::new(NET_X, GROUND_Y),
        },
    ]
}

/// Short line showing which way `side` will hit at `angle_deg`
pub fn angle_indicator(side: Side, angle_deg: f32) -> Line {
    let x = match side {
        Side::Left => INDICATOR_INSET,
        Side::Right => COURT_WIDTH - INDICATOR_INSET,
    };
    let start = Vec2::new(x, GROUND_Y - INDICATOR_HEIGHT);
    let mut dir = angle_to_dir(angle_deg);
    dir.x *= side.direction();
    Line {
        start,
        end: start + dir * INDICATOR_LENGTH,
    }
}

/// Where to draw the ball: live position, or the server's hold pose
pub fn ball_draw_position(snapshot: &Snapshot) -> Vec2 {
    if snapshot.ball_in_play {
        snapshot.ball_position
    } else {
        Ball::hold_pose(server(snapshot))
    }
}

fn server(snapshot: &Snapshot) -> Side {
    if snapshot.serve_from_left {
        Side::Left
    } else {
        Side::Right
    }
}

pub fn score_line(snapshot: &Snapshot) -> String {
    format!("L: {}   R: {}", snapshot.score_left, snapshot.score_right)
}

pub fn help_line(controls: &Controls) -> String {
    let (l, r) = (controls.left, controls.right);
    format!(
        "Left:  {}/{} angle, {} hit    Right: {}/{} angle, {} hit",
        l.raise, l.lower, l.hit, r.raise, r.lower, r.hit
    )
}

pub fn serve_line(snapshot: &Snapshot, controls: &Controls) -> String {
    let side = server(snapshot);
    format!(
        "Serve: {} (press {})",
        side.as_str(),
        controls.for_side(side).hit
    )
}

/// All HUD text, top to bottom
pub fn hud_lines(snapshot: &Snapshot, controls: &Controls) -> [String; 3] {
    [
        score_line(snapshot),
        help_line(controls),
        serve_line(snapshot, controls),
    ]
}
