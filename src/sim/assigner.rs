//! Randomized lane/category placement
//!
//! The only source of nondeterminism in the simulation. Everything draws
//! through [`RandomSource`] so a seeded RNG (or a scripted test double)
//! makes runs reproducible.

use rand::Rng;

use super::catalog::{Category, CategoryCatalog};
use crate::error::{Result, SortError};

/// Uniform integer sampling
pub trait RandomSource {
    /// Uniform value in `[0, upper)`. `upper` is always at least 1.
    fn below(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Placement policy for spawned and respawned items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAssigner {
    lanes_count: usize,
}

impl LaneAssigner {
    /// Fails when fewer than two lanes exist, since no non-canonical lane
    /// could then be chosen.
    pub fn new(lanes_count: usize) -> Result<Self> {
        if lanes_count < 2 {
            return Err(SortError::InvalidConfiguration(format!(
                "need at least 2 lanes, got {lanes_count}"
            )));
        }
        Ok(Self { lanes_count })
    }

    pub fn lanes_count(&self) -> usize {
        self.lanes_count
    }

    /// Uniform over `[0, lanes_count) \ {excluding}`
    pub fn random_lane<R: RandomSource + ?Sized>(&self, excluding: usize, rng: &mut R) -> usize {
        let lane = rng.below(self.lanes_count - 1);
        if lane >= excluding { lane + 1 } else { lane }
    }

    /// Uniform over all catalog categories; independent of any current value
    pub fn random_category<R: RandomSource + ?Sized>(
        &self,
        catalog: &CategoryCatalog,
        rng: &mut R,
    ) -> Category {
        let categories = catalog.all_categories();
        categories[rng.below(categories.len())]
    }

    /// Uniform sprite variant index for `category`
    pub fn random_variant<R: RandomSource + ?Sized>(&self, category: Category, rng: &mut R) -> usize {
        rng.below(category.variants().len())
    }

    /// Lane guaranteed not to already be correct for `category`
    pub fn spawn_lane<R: RandomSource + ?Sized>(
        &self,
        catalog: &CategoryCatalog,
        category: Category,
        rng: &mut R,
    ) -> usize {
        self.random_lane(catalog.canonical_lane(category), rng)
    }
}
