//! Rubbish Rush headless runner
//!
//! Plays a demo game with the autopilot and prints the final snapshot as
//! JSON. Usage: `rubbish-rush [seed] [seconds] [miss_percent]`

use rubbish_rush::consts::*;
use rubbish_rush::cues::CueSink;
use rubbish_rush::highscores::{HighScoreRecorder, MemoryStore};
use rubbish_rush::sim::{Autopilot, Engine, Event, FnSink};
use rubbish_rush::{GamePhase, SortConfig};

/// Host frame length the runner pretends to render at
const FRAME_DT: f32 = 1.0 / 60.0;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = arg(&args, 1, 12345);
    let seconds: f32 = arg(&args, 2, 120.0);
    let miss_percent: usize = arg(&args, 3, 10);
    log::info!("Rubbish Rush (headless) starting: seed {seed}, {seconds}s, {miss_percent}% misses");

    let config = match std::env::var("RUBBISH_RUSH_CONFIG") {
        Ok(path) => SortConfig::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => SortConfig::default(),
    };

    let mut recorder = HighScoreRecorder::new(MemoryStore::default());
    let mut engine = Engine::with_seed(config, seed)?;
    engine.set_high_score(recorder.high_score());
    let mut cues = CueSink::new(engine.high_score());
    let mut pilot = Autopilot::with_seed(seed ^ 0x5EED, miss_percent);

    let mut sorted = 0u32;
    let mut missed = 0u32;
    let mut accumulator = 0.0f32;
    let frames = (seconds / FRAME_DT) as u32;

    'frames: for _ in 0..frames {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            pilot.steer(&mut engine)?;

            let mut counter = FnSink(|event: &Event| {
                if let Event::ItemResolved { correct, .. } = event {
                    if *correct {
                        sorted += 1;
                    } else {
                        missed += 1;
                    }
                }
            });
            let mut sinks = (&mut cues, &mut recorder);
            engine.tick_into(SIM_DT, &mut (&mut sinks, &mut counter));

            accumulator -= SIM_DT;
            substeps += 1;

            for cue in cues.drain() {
                log::debug!("cue: {}", cue.asset());
            }
            if engine.phase() == GamePhase::GameOver {
                break 'frames;
            }
        }
    }

    log::info!(
        "Finished: {sorted} sorted, {missed} missed, best {}",
        recorder.high_score()
    );
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}
