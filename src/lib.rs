//! Rubbish Rush - a lane-sorting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (falling items, scoring, health, phases)
//! - `config`: Data-driven engine tuning
//! - `highscores`: High-score boundary fed from the event stream
//! - `cues`: Event -> sound cue mapping for hosts

pub mod config;
pub mod cues;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::SortConfig;
pub use error::{Result, SortError};
pub use sim::{Engine, Event, GamePhase, Snapshot};

/// Stock game tuning constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz)
    pub const SIM_DT: f32 = 0.02;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Items falling at once
    pub const SLOT_COUNT: usize = 4;

    /// Units per second (3 units per 0.02s step)
    pub const FALLING_SPEED: f32 = 150.0;
    pub const MAX_HEALTH: f32 = 100.0;
    /// Health lost per wrongly sorted item
    pub const HIT_PENALTY: f32 = 10.0;

    /// Half the item size
    pub const ITEM_RADIUS: f32 = 50.0;
    /// Where items meet the bins (arena height minus bin depth)
    pub const COLLECTION_LINE_Y: f32 = 720.0;
    /// Vertical gap between slots at the start of a run
    pub const SPAWN_SPACING: f32 = 200.0;
}
