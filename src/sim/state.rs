//! Game state and core simulation types
//!
//! Everything the rally state machine owns lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of a shot hit by this side (toward the opponent)
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// Index into per-side arrays
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The half of the court containing `x`. The net line belongs to the right.
    pub fn of_half(x: f32) -> Self {
        if x < NET_X { Side::Left } else { Side::Right }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

/// Current phase of a rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Ball held at the server's pose, not simulated
    Serving(Side),
    /// Ball in flight
    InPlay,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub in_play: bool,
}

impl Ball {
    /// A ball held at `server`'s serve pose
    pub fn held(server: Side) -> Self {
        Self {
            pos: Self::hold_pose(server),
            vel: Vec2::ZERO,
            in_play: false,
        }
    }

    /// Where the ball waits before `server` serves
    pub fn hold_pose(server: Side) -> Vec2 {
        let x = match server {
            Side::Left => SERVE_X_LEFT,
            Side::Right => SERVE_X_RIGHT,
        };
        Vec2::new(x, GROUND_Y - SERVE_HEIGHT)
    }

    /// Teleport back to the serve pose and stop simulating
    pub fn reset(&mut self, server: Side) {
        *self = Self::held(server);
    }

    /// Launch toward `hitter`'s opponent at `angle_deg`
    pub fn launch(&mut self, hitter: Side, angle_deg: f32, speed: f32) {
        let dir = crate::angle_to_dir(angle_deg);
        self.vel = Vec2::new(dir.x * hitter.direction(), dir.y) * speed;
        self.in_play = true;
    }

    /// Legal volley position for `side`: well past the net on their half and off the ground
    pub fn volleyable_by(&self, side: Side) -> bool {
        let on_side = match side {
            Side::Left => self.pos.x < NET_X - VOLLEY_NET_CLEARANCE,
            Side::Right => self.pos.x > NET_X + VOLLEY_NET_CLEARANCE,
        };
        on_side && self.pos.y < GROUND_Y - VOLLEY_GROUND_CLEARANCE
    }
}

/// Per-side player state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Launch angle in degrees, always within [ANGLE_MIN, ANGLE_MAX]
    pub angle_deg: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            angle_deg: ANGLE_DEFAULT,
        }
    }
}

/// Why a rally ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointReason {
    /// Ball stopped bouncing
    GroundDeath,
    /// Ball left the court horizontally
    OutOfBounds,
}

/// Result of a finished rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointScored {
    pub winner: Side,
    pub reason: PointReason,
}

/// Things that happened during a frame (for sound/effects hooks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Launched { side: Side, serve: bool },
    NetHit { pos: Vec2 },
    Bounced { pos: Vec2, speed: f32 },
    PointScored(PointScored),
}

/// Angle keys held by one side this frame (level-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleHold {
    pub raise: bool,
    pub lower: bool,
}

impl AngleHold {
    /// Angle change rate in degrees per second
    pub fn rate(&self) -> f32 {
        let mut rate = 0.0;
        if self.raise {
            rate += ANGLE_RATE;
        }
        if self.lower {
            rate -= ANGLE_RATE;
        }
        rate
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Held angle keys, indexed by [`Side::index`]
    pub angle: [AngleHold; 2],
    /// Hit pressed this frame (edge-triggered), indexed by [`Side::index`]
    pub hit: [bool; 2],
}

impl FrameInput {
    pub fn hold(&self, side: Side) -> AngleHold {
        self.angle[side.index()]
    }

    pub fn hit_pressed(&self, side: Side) -> bool {
        self.hit[side.index()]
    }

    /// Input with only `side`'s hit pressed
    pub fn with_hit(side: Side) -> Self {
        let mut input = Self::default();
        input.hit[side.index()] = true;
        input
    }
}

/// Read-only view of the state handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_position: Vec2,
    pub ball_velocity: Vec2,
    pub ball_in_play: bool,
    pub left_angle: f32,
    pub right_angle: f32,
    pub score_left: u32,
    pub score_right: u32,
    pub serve_from_left: bool,
}

/// Complete rally/match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RallyState {
    pub ball: Ball,
    /// Player state, indexed by [`Side::index`]
    pub players: [Player; 2],
    /// Who serves the next (or current held) ball
    pub server: Side,
    pub score_left: u32,
    pub score_right: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for RallyState {
    fn default() -> Self {
        Self::new()
    }
}

impl RallyState {
    /// Fresh match: left serves, 0-0
    pub fn new() -> Self {
        Self {
            ball: Ball::held(Side::Left),
            players: [Player::default(); 2],
            server: Side::Left,
            score_left: 0,
            score_right: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> RallyPhase {
        if self.ball.in_play {
            RallyPhase::InPlay
        } else {
            RallyPhase::Serving(self.server)
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    /// Credit a point, hand the serve to the winner and hold the ball
    pub fn award_point(&mut self, point: PointScored) {
        match point.winner {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        self.server = point.winner;
        self.ball.reset(point.winner);
        log::info!(
            "point {} ({:?}): L {} - R {}",
            point.winner.as_str(),
            point.reason,
            self.score_left,
            self.score_right
        );
        self.events.push(GameEvent::PointScored(point));
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_position: self.ball.pos,
            ball_velocity: self.ball.vel,
            ball_in_play: self.ball.in_play,
            left_angle: self.player(Side::Left).angle_deg,
            right_angle: self.player(Side::Right).angle_deg,
            score_left: self.score_left,
            score_right: self.score_right,
            serve_from_left: self.server == Side::Left,
        }
    }
}
