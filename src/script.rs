//! Headless input replay
//!
//! A script is a list of frames, each naming the keys held and pressed and
//! optionally its own frame time. Replaying one drives a [`Simulation`]
//! exactly as a windowed host would.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::Controls;
use crate::error::{Result, read_json};
use crate::sim::{GameEvent, Simulation, Snapshot};

/// One scripted frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptFrame {
    /// Frame time in seconds (host default if absent)
    pub dt: Option<f32>,
    /// Keys held down during the frame
    pub down: String,
    /// Keys pressed this frame (only the first repeat sees them)
    pub pressed: String,
    /// How many times to run this frame
    pub repeat: u32,
}

impl ScriptFrame {
    fn repeats(&self) -> u32 {
        self.repeat.max(1)
    }
}

/// A recorded or hand-written input sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub frames: Vec<ScriptFrame>,
}

/// Outcome of replaying a script
#[derive(Debug, Clone)]
pub struct ScriptRun {
    pub frames_run: u32,
    pub snapshot: Snapshot,
    pub events: Vec<GameEvent>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let script: Self = read_json(path)?;
        log::info!(
            "Loaded script {} ({} entries)",
            path.display(),
            script.frames.len()
        );
        Ok(script)
    }

    /// Built-in demo: steepen the left angle a little, serve, let the rally play out
    pub fn demo() -> Self {
        Self {
            frames: vec![
                ScriptFrame {
                    down: "E".into(),
                    repeat: 24,
                    ..Default::default()
                },
                ScriptFrame {
                    pressed: "F".into(),
                    ..Default::default()
                },
                ScriptFrame {
                    repeat: 600,
                    ..Default::default()
                },
            ],
        }
    }

    /// Total frames this script runs
    pub fn len(&self) -> u32 {
        self.frames.iter().map(ScriptFrame::repeats).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Replay every frame against `sim`.
    pub fn run(&self, sim: &mut Simulation, controls: &Controls, default_dt: f32) -> ScriptRun {
        let mut events = Vec::new();
        let mut frames_run = 0;

        for frame in &self.frames {
            let dt = frame.dt.unwrap_or(default_dt);
            let first = controls.sample(&frame.down, &frame.pressed);
            let held = controls.sample(&frame.down, "");

            for i in 0..frame.repeats() {
                let input = if i == 0 { &first } else { &held };
                sim.frame(input, dt);
                events.extend(sim.drain_events());
                frames_run += 1;
            }
        }

        log::debug!("script finished: {} frames, {} events", frames_run, events.len());
        ScriptRun {
            frames_run,
            snapshot: sim.snapshot(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_demo_plays_one_rally() {
        let mut sim = Simulation::new();
        let script = Script::demo();
        let run = script.run(&mut sim, &Controls::default(), 1.0 / 120.0);

        assert_eq!(run.frames_run, script.len());
        // 24 frames of raise at 1/120s = +18 degrees
        assert!((run.snapshot.left_angle - 53.0).abs() < 1e-3);
        assert_eq!(run.snapshot.score_left + run.snapshot.score_right, 1);
        assert!(!run.snapshot.ball_in_play);
        assert!(matches!(
            run.events.first(),
            Some(GameEvent::Launched {
                side: Side::Left,
                serve: true
            })
        ));
    }

    #[test]
    fn test_press_only_on_first_repeat() {
        let mut sim = Simulation::new();
        let script = Script {
            frames: vec![ScriptFrame {
                pressed: "F".into(),
                repeat: 5,
                ..Default::default()
            }],
        };
        let run = script.run(&mut sim, &Controls::default(), 0.0);
        let launches = run
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Launched { .. }))
            .count();
        assert_eq!(launches, 1);
    }

    #[test]
    fn test_script_json() {
        let json = r#"{"frames":[{"down":"i","repeat":3,"dt":0.01},{"pressed":"f"}]}"#;
        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(script.frames[0].dt, Some(0.01));
        assert_eq!(script.frames[1].pressed, "f");

        let mut sim = Simulation::new();
        let run = script.run(&mut sim, &Controls::default(), 1.0 / 120.0);
        assert!((run.snapshot.right_angle - 37.7).abs() < 1e-3);
        assert!(run.snapshot.ball_in_play);
    }
}
