//! Fixed timestep simulation tick
//!
//! Rally state transitions: angle input, launches, and the per-step physics
//! that moves the ball and ends rallies.

use log::debug;

use super::clock::SimClock;
use super::collision::{ground_contact, net_collision, out_of_bounds};
use super::state::{
    FrameInput, GameEvent, PointReason, PointScored, RallyPhase, RallyState, Side, Snapshot,
};
use crate::consts::*;

/// Nudge `side`'s launch angle by `rate` degrees/second over `elapsed` seconds.
///
/// The result is always clamped to [`ANGLE_MIN`, `ANGLE_MAX`].
pub fn adjust_angle(state: &mut RallyState, side: Side, rate: f32, elapsed: f32) {
    let player = state.player_mut(side);
    let angle = player.angle_deg + rate * elapsed;
    // NaN input leaves the angle where it was
    if angle.is_nan() {
        return;
    }
    player.angle_deg = angle.clamp(ANGLE_MIN, ANGLE_MAX);
}

/// Try to hit the ball as `side`. Returns whether the ball was launched.
///
/// A held ball can only be served by the server. A ball in flight can be
/// volleyed by whoever has it on their half, in the air.
pub fn try_launch(state: &mut RallyState, side: Side) -> bool {
    let serve = match state.phase() {
        RallyPhase::Serving(server) if server == side => true,
        RallyPhase::Serving(_) => return false,
        RallyPhase::InPlay if state.ball.volleyable_by(side) => false,
        RallyPhase::InPlay => return false,
    };

    let angle = state.player(side).angle_deg;
    state.ball.launch(side, angle, LAUNCH_SPEED);
    debug!(
        "{} {} at {:.1}° from ({:.1}, {:.1})",
        side.as_str(),
        if serve { "serves" } else { "volleys" },
        angle,
        state.ball.pos.x,
        state.ball.pos.y
    );
    state.events.push(GameEvent::Launched { side, serve });
    true
}

/// Advance the ball by one fixed timestep.
///
/// Does nothing while the ball is held. Returns the point if the rally ended.
pub fn tick(state: &mut RallyState, dt: f32) -> Option<PointScored> {
    if !state.ball.in_play {
        return None;
    }
    state.time_ticks += 1;

    let ball = &mut state.ball;
    ball.vel.y += GRAVITY * dt;
    ball.pos += ball.vel * dt;
    ball.vel.x *= HORIZONTAL_DAMPING;

    if let Some((pos, vel)) = net_collision(ball.pos, ball.vel) {
        debug!("net hit at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
        ball.pos = pos;
        ball.vel = vel;
        state.events.push(GameEvent::NetHit { pos });
    }

    let mut ground_death = None;
    if let Some(contact) = ground_contact(ball.pos, ball.vel) {
        ball.pos = contact.pos;
        ball.vel = contact.vel;
        if contact.impact_speed > 0.0 {
            state.events.push(GameEvent::Bounced {
                pos: contact.pos,
                speed: contact.impact_speed,
            });
        }
        if contact.dead {
            // The ball's half decides the point: it died on the loser's side
            ground_death = Some(Side::of_half(contact.pos.x).opponent());
        }
    }

    // Boundary exit is checked last and wins over a ground death in the same step
    let point = if let Some(winner) = out_of_bounds(state.ball.pos.x) {
        Some(PointScored {
            winner,
            reason: PointReason::OutOfBounds,
        })
    } else {
        ground_death.map(|winner| PointScored {
            winner,
            reason: PointReason::GroundDeath,
        })
    };

    if let Some(point) = point {
        state.award_point(point);
    }
    point
}

/// One independent match: a clock plus the rally state it drives
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    pub clock: SimClock,
    pub state: RallyState,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one rendered frame: angles, then hits, then fixed steps.
    pub fn frame(&mut self, input: &FrameInput, frame_dt: f32) -> Snapshot {
        // Angles respond per frame, not per tick, for smooth input feel
        for side in Side::BOTH {
            adjust_angle(&mut self.state, side, input.hold(side).rate(), frame_dt);
        }

        for side in Side::BOTH {
            if input.hit_pressed(side) {
                try_launch(&mut self.state, side);
            }
        }

        let steps = self.clock.advance(frame_dt);
        for _ in 0..steps {
            tick(&mut self.state, SIM_DT);
        }

        self.state.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Events since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{AngleHold, Ball};
    use glam::Vec2;

    fn in_flight(pos: Vec2, vel: Vec2) -> RallyState {
        let mut state = RallyState::new();
        state.ball = Ball {
            pos,
            vel,
            in_play: true,
        };
        state
    }

    #[test]
    fn test_serve_only_by_server() {
        let mut state = RallyState::new();
        assert!(!try_launch(&mut state, Side::Right));
        assert_eq!(state.phase(), RallyPhase::Serving(Side::Left));

        assert!(try_launch(&mut state, Side::Left));
        assert_eq!(state.phase(), RallyPhase::InPlay);
        assert!(state.ball.vel.x > 0.0);
        // Serve starts from the hold pose
        assert_eq!(state.ball.pos, Ball::hold_pose(Side::Left));
    }

    #[test]
    fn test_second_launch_is_noop() {
        let mut state = RallyState::new();
        assert!(try_launch(&mut state, Side::Left));
        let vel = state.ball.vel;

        // The hold pose already satisfies the volley rule, so drop below volley height
        state.ball.pos.y = GROUND_Y - 5.0;
        assert!(!try_launch(&mut state, Side::Left));
        assert!(!try_launch(&mut state, Side::Right));
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_volley_return() {
        let mut state = in_flight(Vec2::new(700.0, 300.0), Vec2::new(200.0, 100.0));
        assert!(!try_launch(&mut state, Side::Left));
        assert!(try_launch(&mut state, Side::Right));
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_adjust_angle_clamps() {
        let mut state = RallyState::new();
        adjust_angle(&mut state, Side::Left, 90.0, 10.0);
        assert_eq!(state.player(Side::Left).angle_deg, ANGLE_MAX);
        adjust_angle(&mut state, Side::Left, -90.0, 10.0);
        assert_eq!(state.player(Side::Left).angle_deg, ANGLE_MIN);
        // Other side untouched
        assert_eq!(state.player(Side::Right).angle_deg, ANGLE_DEFAULT);
    }

    #[test]
    fn test_tick_held_ball_is_frozen() {
        let mut state = RallyState::new();
        let ball = state.ball;
        for _ in 0..100 {
            assert!(tick(&mut state, SIM_DT).is_none());
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_tick_out_of_bounds_right_edge() {
        let mut state = in_flight(Vec2::new(COURT_WIDTH - 0.5, 100.0), Vec2::new(400.0, -50.0));
        let point = tick(&mut state, SIM_DT).unwrap();
        assert_eq!(point.winner, Side::Left);
        assert_eq!(point.reason, PointReason::OutOfBounds);
        assert_eq!(state.score_left, 1);
        assert_eq!(state.server, Side::Left);
        assert_eq!(state.ball, Ball::held(Side::Left));
    }

    #[test]
    fn test_tick_out_of_bounds_left_edge() {
        let mut state = in_flight(Vec2::new(0.5, 200.0), Vec2::new(-400.0, 0.0));
        let point = tick(&mut state, SIM_DT).unwrap();
        assert_eq!(point.winner, Side::Right);
        assert_eq!(state.score_right, 1);
        assert_eq!(state.server, Side::Right);
    }

    #[test]
    fn test_out_of_bounds_beats_ground_death() {
        // Leaves the court and dies on the ground in the same step
        let mut state = in_flight(Vec2::new(COURT_WIDTH - 0.1, GROUND_Y - 0.1), Vec2::new(200.0, 50.0));
        let point = tick(&mut state, SIM_DT).unwrap();
        assert_eq!(point.reason, PointReason::OutOfBounds);
        assert_eq!(point.winner, Side::Left);
        assert_eq!(state.score_left + state.score_right, 1);
    }

    #[test]
    fn test_ground_death_on_net_line_scores_left() {
        let mut state = in_flight(Vec2::new(NET_X, GROUND_Y), Vec2::new(0.0, 0.0));
        // Touching the net with vx = 0 only nudges it
        let point = tick(&mut state, SIM_DT).unwrap();
        assert_eq!(point.reason, PointReason::GroundDeath);
        // Nudged right of the net line, so it died on the right half
        assert_eq!(point.winner, Side::Left);
    }

    #[test]
    fn test_events_recorded() {
        let mut sim = Simulation::new();
        sim.frame(&FrameInput::with_hit(Side::Left), 0.0);
        let events = sim.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::Launched {
                side: Side::Left,
                serve: true
            }]
        );
    }

    #[test]
    fn test_frame_adjusts_angles_before_launch() {
        let mut sim = Simulation::new();
        let mut input = FrameInput::with_hit(Side::Left);
        input.angle[Side::Left.index()] = AngleHold {
            raise: true,
            lower: false,
        };
        sim.frame(&input, 0.1);
        let snap = sim.snapshot();
        assert!((snap.left_angle - 44.0).abs() < 1e-3);
        assert!(snap.ball_in_play);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            FrameInput::with_hit(Side::Left),
            FrameInput::default(),
            FrameInput::with_hit(Side::Right),
            FrameInput::default(),
        ];

        let mut a = Simulation::new();
        let mut b = Simulation::new();
        for _ in 0..200 {
            for input in &inputs {
                a.frame(input, 1.0 / 120.0);
                b.frame(input, 1.0 / 120.0);
            }
        }

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.state.time_ticks, b.state.time_ticks);
    }
}
