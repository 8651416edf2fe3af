//! Sound cues derived from engine events
//!
//! The engine never plays audio. Hosts feed the event stream through a
//! [`CueSink`] and drain the queued cues into whatever audio backend they
//! have.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::{Event, EventSink};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Item landed in its bin
    Correct,
    /// Item landed in the wrong bin
    Wrong,
    /// Health ran out
    GameOver,
    /// Score passed the previous best
    NewHighScore,
}

impl SoundCue {
    /// Asset key a host can look up
    pub fn asset(&self) -> &'static str {
        match self {
            SoundCue::Correct => "correct",
            SoundCue::Wrong => "wrong",
            SoundCue::GameOver => "game_over",
            SoundCue::NewHighScore => "high_score",
        }
    }
}

/// Queues cues for the host
#[derive(Debug, Clone)]
pub struct CueSink {
    queue: VecDeque<SoundCue>,
    sound_on: bool,
    /// High score seen at the start of the run; beating it cues once
    best_before_run: u64,
    announced_high_score: bool,
}

impl Default for CueSink {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CueSink {
    /// `best_before_run` is the high score the run has to beat
    pub fn new(best_before_run: u64) -> Self {
        Self {
            queue: VecDeque::new(),
            sound_on: true,
            best_before_run,
            announced_high_score: false,
        }
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound_on
    }

    /// Flip the sound switch. Turning it off drops anything still queued.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        if !self.sound_on {
            self.queue.clear();
        }
        log::info!("Sound {}", if self.sound_on { "on" } else { "off" });
        self.sound_on
    }

    /// Call when the host resets the engine
    pub fn new_run(&mut self, best_before_run: u64) {
        self.best_before_run = best_before_run;
        self.announced_high_score = false;
    }

    /// Take every cue queued so far, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.queue.drain(..)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    fn push(&mut self, cue: SoundCue) {
        if self.sound_on {
            self.queue.push_back(cue);
        }
    }
}

impl EventSink for CueSink {
    fn on_event(&mut self, event: &Event) {
        match *event {
            Event::ItemResolved { correct: true, .. } => self.push(SoundCue::Correct),
            Event::ItemResolved { correct: false, .. } => self.push(SoundCue::Wrong),
            Event::ScoreChanged { score, .. } => {
                if !self.announced_high_score && score > self.best_before_run {
                    self.announced_high_score = true;
                    self.push(SoundCue::NewHighScore);
                }
            }
            Event::GameOverReached => self.push(SoundCue::GameOver),
            Event::HealthChanged { .. } | Event::PhaseChanged { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Category, GamePhase, ItemId};

    fn resolved(correct: bool) -> Event {
        Event::ItemResolved {
            item_id: ItemId(1),
            lane: 0,
            category: Category::Organic,
            correct,
        }
    }

    #[test]
    fn test_maps_events_to_cues() {
        let mut cues = CueSink::new(1);
        for event in [
            resolved(true),
            Event::ScoreChanged {
                score: 1,
                high_score: 1,
            },
            resolved(true),
            Event::ScoreChanged {
                score: 2,
                high_score: 2,
            },
            resolved(true),
            Event::ScoreChanged {
                score: 3,
                high_score: 3,
            },
            resolved(false),
            Event::HealthChanged { health: 0.0 },
            Event::GameOverReached,
            Event::PhaseChanged {
                phase: GamePhase::GameOver,
            },
        ] {
            cues.on_event(&event);
        }
        let drained: Vec<SoundCue> = cues.drain().collect();
        assert_eq!(
            drained,
            vec![
                SoundCue::Correct,
                SoundCue::Correct,
                SoundCue::NewHighScore,
                SoundCue::Correct,
                SoundCue::Wrong,
                SoundCue::GameOver,
            ]
        );
        assert_eq!(cues.pending(), 0);
    }

    #[test]
    fn test_sound_off_suppresses_cues() {
        let mut cues = CueSink::default();
        cues.on_event(&resolved(true));
        assert!(!cues.toggle_sound());
        assert_eq!(cues.pending(), 0);
        cues.on_event(&resolved(false));
        assert_eq!(cues.pending(), 0);
        assert!(cues.toggle_sound());
        cues.on_event(&resolved(false));
        assert_eq!(cues.drain().collect::<Vec<_>>(), vec![SoundCue::Wrong]);
    }

    #[test]
    fn test_new_run_rearms_high_score_cue() {
        let mut cues = CueSink::new(0);
        let score = |s| Event::ScoreChanged {
            score: s,
            high_score: s,
        };
        cues.on_event(&score(1));
        cues.on_event(&score(2));
        cues.new_run(2);
        cues.on_event(&score(1));
        cues.on_event(&score(3));
        assert_eq!(
            cues.drain().collect::<Vec<_>>(),
            vec![SoundCue::NewHighScore, SoundCue::NewHighScore]
        );
    }
}
