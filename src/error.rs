//! Error types for engine construction and player commands
//!
//! The engine performs no I/O, so every error here is a caller-input
//! validation failure. Reaching zero health is not an error; it is reported
//! through [`crate::sim::Event::GameOverReached`].

use thiserror::Error;

use crate::sim::ItemId;

/// Errors raised by the sorting engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SortError {
    /// Rejected at construction time; no engine is created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A lane index outside `[0, lanes_count)` was requested.
    #[error("lane {lane} is out of range for {lanes_count} lanes")]
    InvalidLane { lane: usize, lanes_count: usize },
    /// No live item carries this id (it may already have been respawned).
    #[error("no live item with id {0}")]
    UnknownItem(ItemId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortError>;
