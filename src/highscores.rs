//! High score boundary
//!
//! The engine keeps the high score as a plain field. Durable storage belongs
//! to the host: it loads the value once at startup and writes it back when a
//! `ScoreChanged` event raises it. [`HighScoreRecorder`] wires that up.

use serde::{Deserialize, Serialize};

use crate::sim::{Event, EventSink};

/// Where the best score lives between runs
pub trait HighScoreStore {
    fn load(&self) -> u64;
    fn save(&mut self, high_score: u64);
}

/// In-process store, used by the headless runner and tests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    pub high_score: u64,
    /// Number of writes performed
    #[serde(skip)]
    pub saves: u32,
}

impl MemoryStore {
    pub fn new(high_score: u64) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.high_score
    }

    fn save(&mut self, high_score: u64) {
        self.high_score = high_score;
        self.saves += 1;
    }
}

/// Event sink that persists new high scores
///
/// Only writes when the reported high score beats what was last stored, so
/// ordinary score changes cost nothing.
#[derive(Debug, Clone)]
pub struct HighScoreRecorder<S: HighScoreStore> {
    store: S,
    stored: u64,
}

impl<S: HighScoreStore> HighScoreRecorder<S> {
    pub fn new(store: S) -> Self {
        let stored = store.load();
        log::info!("Loaded high score {stored}");
        Self { store, stored }
    }

    /// Value to seed the engine with via `Engine::set_high_score`
    pub fn high_score(&self) -> u64 {
        self.stored
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: HighScoreStore> EventSink for HighScoreRecorder<S> {
    fn on_event(&mut self, event: &Event) {
        if let Event::ScoreChanged { high_score, .. } = *event {
            if high_score > self.stored {
                self.stored = high_score;
                self.store.save(high_score);
                log::info!("New high score {high_score} saved");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfig;
    use crate::consts::SIM_DT;
    use crate::sim::Engine;

    #[test]
    fn test_saves_only_on_increase() {
        let mut recorder = HighScoreRecorder::new(MemoryStore::new(5));
        assert_eq!(recorder.high_score(), 5);

        recorder.on_event(&Event::ScoreChanged {
            score: 3,
            high_score: 5,
        });
        recorder.on_event(&Event::HealthChanged { health: 90.0 });
        assert_eq!(recorder.store().saves, 0);

        recorder.on_event(&Event::ScoreChanged {
            score: 6,
            high_score: 6,
        });
        recorder.on_event(&Event::ScoreChanged {
            score: 7,
            high_score: 7,
        });
        let store = recorder.into_store();
        assert_eq!(store.high_score, 7);
        assert_eq!(store.saves, 2);
    }

    #[test]
    fn test_engine_round_trip() {
        let mut recorder = HighScoreRecorder::new(MemoryStore::new(0));
        let mut engine = Engine::with_seed(SortConfig::default(), 4).unwrap();
        engine.set_high_score(recorder.high_score());

        for _ in 0..5000 {
            // Put everything in its bin so every arrival scores
            let moves: Vec<_> = engine
                .items()
                .iter()
                .map(|item| (item.id, engine.catalog().canonical_lane(item.category)))
                .collect();
            for (id, lane) in moves {
                engine.set_item_lane(id, lane).unwrap();
            }
            engine.tick_into(SIM_DT, &mut recorder);
        }

        assert!(engine.score() > 0);
        assert_eq!(recorder.high_score(), engine.high_score());
        assert_eq!(recorder.store().high_score, engine.high_score());
    }
}
