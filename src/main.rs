//! Tennis for Two entry point
//!
//! Runs the simulation headless: replays an input script (or the built-in
//! demo) and prints the HUD and final snapshot.
//!
//! Usage: `tennis-for-two [SCRIPT.json] [--settings SETTINGS.json]`

use std::path::PathBuf;

use tennis_for_two::script::Script;
use tennis_for_two::sim::{GameEvent, Simulation};
use tennis_for_two::{Settings, view};

#[derive(Debug, Default)]
struct Args {
    script: Option<PathBuf>,
    settings: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => args.settings = iter.next().map(PathBuf::from),
            _ if args.script.is_none() => args.script = Some(PathBuf::from(arg)),
            _ => log::warn!("ignoring extra argument {arg:?}"),
        }
    }
    args
}

fn main() {
    env_logger::init();
    log::info!("Tennis for Two (headless) starting...");

    let args = parse_args();
    let settings = args
        .settings
        .as_deref()
        .map(Settings::load_or_default)
        .unwrap_or_default();

    let script = match args.script.as_deref().map(Script::load) {
        Some(Ok(script)) => script,
        Some(Err(err)) => {
            log::error!("{err}; running the demo instead");
            Script::demo()
        }
        None => Script::demo(),
    };

    let mut sim = Simulation::new();
    let run = script.run(&mut sim, &settings.controls, settings.frame_dt());

    for event in &run.events {
        if let GameEvent::PointScored(point) = event {
            println!("point: {} ({:?})", point.winner.as_str(), point.reason);
        }
    }
    for line in view::hud_lines(&run.snapshot, &settings.controls) {
        println!("{line}");
    }

    match serde_json::to_string_pretty(&run.snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize snapshot: {err}"),
    }
    log::info!("{} frames simulated", run.frames_run);
}
