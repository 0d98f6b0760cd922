//! Fixed timestep accumulator
//!
//! Turns variable frame time into a whole number of fixed physics steps.

use log::trace;

use crate::consts::{MAX_ACCUMULATED, SIM_DT};

/// Accumulates frame time and hands out fixed steps.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    accumulator: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's elapsed time and return how many fixed steps to run.
    ///
    /// The accumulator is capped at [`MAX_ACCUMULATED`], so a long stall costs
    /// at most 60 steps. Negative or NaN input counts as zero.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // f32::max returns the non-NaN operand
        let frame_dt = frame_dt.max(0.0);
        self.accumulator = (self.accumulator + frame_dt).min(MAX_ACCUMULATED);

        let mut steps = 0;
        while self.accumulator >= SIM_DT {
            self.accumulator -= SIM_DT;
            steps += 1;
        }

        if steps > 0 {
            trace!("clock: {} steps, {:.5}s left over", steps, self.accumulator);
        }
        steps
    }

    /// Leftover fraction of a step, for render interpolation (0.0 to 1.0)
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }

    /// Time carried over to the next frame
    pub fn accumulated(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_frame_time_runs_no_steps() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.accumulated(), 0.0);
    }

    #[test]
    fn test_partial_steps_accumulate() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
        assert!(clock.alpha() > 0.1 && clock.alpha() < 0.3);
    }

    #[test]
    fn test_typical_frame() {
        let mut clock = SimClock::new();
        // 1/60 s is four 1/240 s steps, give or take float error
        let steps = clock.advance(1.0 / 60.0 + 1e-5);
        assert_eq!(steps, 4);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = SimClock::new();
        let steps = clock.advance(10.0);
        assert!(steps <= 60, "got {steps} steps");
        assert!(steps >= 59, "got {steps} steps");
        assert!(clock.accumulated() < SIM_DT);
    }

    #[test]
    fn test_bad_input_is_ignored() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.accumulated(), 0.0);
        assert!(clock.advance(f32::INFINITY) <= 60);
    }

    #[test]
    fn test_reset() {
        let mut clock = SimClock::new();
        clock.advance(SIM_DT * 0.5);
        clock.reset();
        assert_eq!(clock.accumulated(), 0.0);
    }
}
