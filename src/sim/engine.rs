//! Sorting simulation engine
//!
//! Owns every falling item plus score/health/phase and advances them on
//! each host-driven tick. The engine is a synchronous state machine:
//!
//! - `Running --tick--> Running`, or `GameOver` when a wrong sort empties health
//! - `Running --pause--> Paused --resume--> Running`
//! - any phase `--reset--> Running`
//!
//! It is not meant to be shared between threads; hosts serialize calls.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::assigner::{LaneAssigner, RandomSource};
use super::catalog::{Category, CategoryCatalog};
use super::item::{Direction, FallingItem, ItemId};
use super::sink::EventSink;
use super::state::{Event, GamePhase, GameState, ItemSnapshot, Snapshot};
use crate::config::SortConfig;
use crate::error::{Result, SortError};

/// The simulation engine
#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource = Pcg32> {
    config: SortConfig,
    catalog: CategoryCatalog,
    assigner: LaneAssigner,
    rng: R,
    /// One entry per slot, in slot order
    items: Vec<FallingItem>,
    state: GameState,
    next_id: u32,
}

impl Engine<Pcg32> {
    /// Engine backed by a seeded PCG stream
    pub fn with_seed(config: SortConfig, seed: u64) -> Result<Self> {
        Self::configure(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// Validate `config` and build a running engine with every slot filled.
    ///
    /// Slot `i` starts with the `i`-th category (wrapping), a random
    /// non-canonical lane and a staggered start position.
    pub fn configure(config: SortConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let catalog = CategoryCatalog::new(config.categories.clone())?;
        let assigner = LaneAssigner::new(catalog.lanes_count())?;

        let mut engine = Self {
            items: Vec::with_capacity(config.slot_count),
            state: GameState::new(config.max_health),
            config,
            catalog,
            assigner,
            rng,
            next_id: 1,
        };

        for slot in 0..engine.config.slot_count {
            let categories = engine.catalog.all_categories();
            let category = categories[slot % categories.len()];
            let id = engine.allocate_id();
            let variant = engine.assigner.random_variant(category, &mut engine.rng);
            let lane = engine
                .assigner
                .spawn_lane(&engine.catalog, category, &mut engine.rng);
            let position = engine.stagger_offset(slot);
            engine
                .items
                .push(FallingItem::new(id, lane, position, category, variant));
        }

        log::info!(
            "Engine ready: {} lanes, {} slots, speed {}",
            engine.catalog.lanes_count(),
            engine.items.len(),
            engine.config.falling_speed
        );
        Ok(engine)
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Start position of slot `slot` after a reset
    fn stagger_offset(&self, slot: usize) -> f32 {
        -self.config.item_radius - slot as f32 * self.config.spawn_spacing
    }

    fn slot_of(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(SortError::UnknownItem(id))
    }

    // === Accessors ===

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn lanes_count(&self) -> usize {
        self.catalog.lanes_count()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.state.high_score
    }

    pub fn health(&self) -> f32 {
        self.state.health
    }

    /// Live items in slot order
    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&FallingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.iter().map(ItemSnapshot::from).collect(),
            score: self.state.score,
            high_score: self.state.high_score,
            health: self.state.health,
            phase: self.state.phase,
        }
    }

    // === Commands ===

    /// Seed the high score loaded from external storage. Only raises it.
    pub fn set_high_score(&mut self, high_score: u64) {
        if high_score > self.state.high_score {
            self.state.high_score = high_score;
        }
    }

    /// Move an item to `lane`. Takes effect at its next arrival test; never
    /// scores by itself. Rejected requests leave the engine untouched.
    pub fn set_item_lane(&mut self, id: ItemId, lane: usize) -> Result<()> {
        let lanes_count = self.lanes_count();
        if lane >= lanes_count {
            log::warn!("Rejected lane {lane} for item {id}: only {lanes_count} lanes");
            return Err(SortError::InvalidLane { lane, lanes_count });
        }
        let slot = self.slot_of(id)?;
        self.items[slot].lane = lane;
        Ok(())
    }

    /// Swipe an item one lane left or right, clamped at the edges.
    /// Returns the item's lane afterwards.
    pub fn nudge_item(&mut self, id: ItemId, direction: Direction) -> Result<usize> {
        let lanes_count = self.lanes_count();
        let slot = self.slot_of(id)?;
        let item = &mut self.items[slot];
        item.lane = item.nudged_lane(direction, lanes_count);
        Ok(item.lane)
    }

    /// Running -> Paused; no-op otherwise
    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Paused;
            log::info!("Paused at score {}", self.state.score);
        }
    }

    /// Paused -> Running; no-op otherwise
    pub fn resume(&mut self) {
        if self.state.phase == GamePhase::Paused {
            self.state.phase = GamePhase::Running;
            log::info!("Resumed");
        }
    }

    /// Start a fresh run. Categories stay; lanes are re-randomized away from
    /// their bins and positions are staggered again.
    pub fn reset(&mut self) {
        self.restart(false);
    }

    /// Like [`reset`](Self::reset) but also re-draws every category
    pub fn reset_shuffled(&mut self) {
        self.restart(true);
    }

    fn restart(&mut self, shuffle: bool) {
        self.state.restart(self.config.max_health);
        for slot in 0..self.items.len() {
            if shuffle {
                let category = self.assigner.random_category(&self.catalog, &mut self.rng);
                let variant = self.assigner.random_variant(category, &mut self.rng);
                self.items[slot].category = category;
                self.items[slot].variant = variant;
            }
            let category = self.items[slot].category;
            self.items[slot].lane = self
                .assigner
                .spawn_lane(&self.catalog, category, &mut self.rng);
            self.items[slot].position = self.stagger_offset(slot);
        }
        log::info!(
            "Game reset (high score {}, shuffled: {})",
            self.state.high_score,
            shuffle
        );
    }

    // === Simulation ===

    /// Advance by `dt` and return this tick's events in order
    pub fn tick(&mut self, dt: f32) -> Vec<Event> {
        let mut events = Vec::new();
        self.tick_into(dt, &mut events);
        events
    }

    /// Advance by `dt`, forwarding events to `sink` as they happen.
    ///
    /// Does nothing unless running. All items move first; arrivals are then
    /// resolved in slot order, and resolution stops at the arrival that ends
    /// the game. A non-finite or negative `dt` counts as no elapsed time.
    pub fn tick_into<S: EventSink + ?Sized>(&mut self, dt: f32, sink: &mut S) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let speed = self.config.falling_speed;
        for item in &mut self.items {
            item.fall(speed, dt);
        }

        for slot in 0..self.items.len() {
            let arrived = self.items[slot]
                .has_arrived(self.config.item_radius, self.config.collection_line_y);
            if arrived && self.resolve_arrival(slot, sink) {
                break;
            }
        }
    }

    /// Score the item in `slot` and respawn it. Returns true if this arrival
    /// ended the game.
    fn resolve_arrival<S: EventSink + ?Sized>(&mut self, slot: usize, sink: &mut S) -> bool {
        let item = &self.items[slot];
        let (item_id, lane, category) = (item.id, item.lane, item.category);
        let correct = lane == self.catalog.canonical_lane(category);

        log::debug!(
            "Item {item_id} ({}) arrived in lane {lane}: {}",
            category.label(),
            if correct { "correct" } else { "wrong" }
        );
        sink.on_event(&Event::ItemResolved {
            item_id,
            lane,
            category,
            correct,
        });

        let mut game_over = false;
        if correct {
            self.state.award_point();
            sink.on_event(&Event::ScoreChanged {
                score: self.state.score,
                high_score: self.state.high_score,
            });
        } else {
            let drained = self.state.take_hit(self.config.hit_penalty);
            sink.on_event(&Event::HealthChanged {
                health: self.state.health,
            });
            if drained {
                self.state.phase = GamePhase::GameOver;
                game_over = true;
                log::info!(
                    "Game over: score {}, high score {}",
                    self.state.score,
                    self.state.high_score
                );
                sink.on_event(&Event::GameOverReached);
                sink.on_event(&Event::PhaseChanged {
                    phase: GamePhase::GameOver,
                });
            }
        }

        self.respawn(slot);
        game_over
    }

    /// Replace the item in `slot` with a fresh one at the top
    fn respawn(&mut self, slot: usize) {
        let category: Category = self.assigner.random_category(&self.catalog, &mut self.rng);
        let variant = self.assigner.random_variant(category, &mut self.rng);
        let lane = self
            .assigner
            .spawn_lane(&self.catalog, category, &mut self.rng);
        let id = self.allocate_id();
        self.items[slot] = FallingItem::new(id, lane, -self.config.item_radius, category, variant);
    }
}
