//! Game state, events and snapshots
//!
//! Everything the host is allowed to see lives here as plain data.

use serde::{Deserialize, Serialize};

use super::catalog::Category;
use super::item::{FallingItem, ItemId};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Items are falling
    #[default]
    Running,
    /// Frozen until resumed
    Paused,
    /// Health ran out; only a reset leaves this phase
    GameOver,
}

/// Something that happened during a tick
///
/// Hosts turn these into sounds, animations and high-score writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// An item reached the collection line and was scored
    ItemResolved {
        item_id: ItemId,
        lane: usize,
        category: Category,
        correct: bool,
    },
    ScoreChanged { score: u64, high_score: u64 },
    HealthChanged { health: f32 },
    GameOverReached,
    PhaseChanged { phase: GamePhase },
}

/// Score/health/phase bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    /// Never decreases, including across resets
    pub high_score: u64,
    pub health: f32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(max_health: f32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            health: max_health,
            phase: GamePhase::Running,
        }
    }

    /// Count a correct sort; raises the high score when beaten
    pub fn award_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Apply a wrong-sort penalty, floored at zero. Returns true when this
    /// hit emptied the health bar.
    pub fn take_hit(&mut self, penalty: f32) -> bool {
        self.health = (self.health - penalty).max(0.0);
        self.health <= 0.0
    }

    /// Back to a fresh run; the high score survives
    pub fn restart(&mut self, max_health: f32) {
        self.score = 0;
        self.health = max_health;
        self.phase = GamePhase::Running;
    }
}

/// Read-only view of one item for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub lane: usize,
    pub position: f32,
    pub category: Category,
    pub sprite: String,
}

impl From<&FallingItem> for ItemSnapshot {
    fn from(item: &FallingItem) -> Self {
        Self {
            id: item.id,
            lane: item.lane,
            position: item.position,
            category: item.category,
            sprite: item.sprite().to_string(),
        }
    }
}

/// Complete read-only engine view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// In slot order
    pub items: Vec<ItemSnapshot>,
    pub score: u64,
    pub high_score: u64,
    pub health: f32,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_point_raises_high_score() {
        let mut state = GameState::new(100.0);
        state.high_score = 2;
        state.award_point();
        state.award_point();
        assert_eq!((state.score, state.high_score), (2, 2));
        state.award_point();
        assert_eq!((state.score, state.high_score), (3, 3));
    }

    #[test]
    fn test_take_hit_floors_at_zero() {
        let mut state = GameState::new(25.0);
        assert!(!state.take_hit(10.0));
        assert!(!state.take_hit(10.0));
        assert!(state.take_hit(10.0));
        assert_eq!(state.health, 0.0);
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut state = GameState::new(100.0);
        state.award_point();
        state.take_hit(100.0);
        state.phase = GamePhase::GameOver;
        state.restart(100.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 1);
        assert_eq!(state.health, 100.0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_event_serializes() {
        let json = serde_json::to_string(&Event::ScoreChanged {
            score: 3,
            high_score: 5,
        })
        .unwrap();
        assert_eq!(json, r#"{"ScoreChanged":{"score":3,"high_score":5}}"#);
    }
}
