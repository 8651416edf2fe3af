//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through host-supplied `tick` calls
//! - Randomness only through an injected [`RandomSource`]
//! - Stable iteration order (by slot)
//! - No rendering, audio or storage dependencies

pub mod assigner;
pub mod autopilot;
pub mod catalog;
pub mod engine;
pub mod item;
pub mod sink;
pub mod state;

pub use assigner::{LaneAssigner, RandomSource};
pub use autopilot::Autopilot;
pub use catalog::{Category, CategoryCatalog};
pub use engine::Engine;
pub use item::{Direction, FallingItem, ItemId};
pub use sink::{EventSink, FnSink};
pub use state::{Event, GamePhase, GameState, ItemSnapshot, Snapshot};
