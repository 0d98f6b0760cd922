//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as explicit per-frame values
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;

pub use clock::SimClock;
pub use collision::{GroundContact, ground_contact, net_collision, out_of_bounds};
pub use state::{
    AngleHold, Ball, FrameInput, GameEvent, Player, PointReason, PointScored, RallyPhase,
    RallyState, Side, Snapshot,
};
pub use tick::{Simulation, adjust_angle, tick, try_launch};
