//! Idle/demo player
//!
//! Swipes items toward their bins one lane per call, like a player would,
//! but deliberately lets a share of items fall into the wrong bin so demo
//! runs eventually end.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::assigner::RandomSource;
use super::engine::Engine;
use super::item::{Direction, ItemId};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Autopilot<R: RandomSource = Pcg32> {
    rng: R,
    /// Percent of items left unsorted
    miss_percent: usize,
    /// Per slot: the item last planned for and whether it gets sorted
    plans: Vec<Option<(ItemId, bool)>>,
}

impl Autopilot<Pcg32> {
    pub fn with_seed(seed: u64, miss_percent: usize) -> Self {
        Self::new(Pcg32::seed_from_u64(seed), miss_percent)
    }
}

impl<R: RandomSource> Autopilot<R> {
    pub fn new(rng: R, miss_percent: usize) -> Self {
        Self {
            rng,
            miss_percent: miss_percent.min(100),
            plans: Vec::new(),
        }
    }

    /// Nudge every planned item one lane closer to its bin.
    /// Returns how many items moved.
    pub fn steer<E: RandomSource>(&mut self, engine: &mut Engine<E>) -> Result<usize> {
        let targets: Vec<(ItemId, usize, usize)> = engine
            .items()
            .iter()
            .map(|item| {
                let bin = engine.catalog().canonical_lane(item.category);
                (item.id, item.lane, bin)
            })
            .collect();
        self.plans.resize(targets.len(), None);

        let mut moved = 0;
        for (slot, (id, lane, bin)) in targets.into_iter().enumerate() {
            let plan = self.plans[slot];
            let sort = match plan {
                Some((planned, sort)) if planned == id => sort,
                _ => {
                    let sort = self.rng.below(100) >= self.miss_percent;
                    self.plans[slot] = Some((id, sort));
                    sort
                }
            };
            if !sort || lane == bin {
                continue;
            }
            let direction = if bin < lane {
                Direction::Left
            } else {
                Direction::Right
            };
            engine.nudge_item(id, direction)?;
            moved += 1;
        }
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfig;
    use crate::consts::SIM_DT;
    use crate::sim::GamePhase;

    #[test]
    fn test_perfect_autopilot_never_loses_health() {
        let mut engine = Engine::with_seed(SortConfig::default(), 11).unwrap();
        let mut pilot = Autopilot::with_seed(11, 0);
        for _ in 0..5000 {
            pilot.steer(&mut engine).unwrap();
            engine.tick(SIM_DT);
        }
        assert_eq!(engine.health(), 100.0);
        assert!(engine.score() > 10);
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn test_hopeless_autopilot_moves_nothing() {
        let mut engine = Engine::with_seed(SortConfig::default(), 12).unwrap();
        let mut pilot = Autopilot::with_seed(12, 100);
        let before = engine.snapshot();
        assert_eq!(pilot.steer(&mut engine).unwrap(), 0);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_one_lane_per_call() {
        let mut engine = Engine::with_seed(SortConfig::default(), 13).unwrap();
        let mut pilot = Autopilot::with_seed(13, 0);
        let before: Vec<usize> = engine.items().iter().map(|i| i.lane).collect();
        pilot.steer(&mut engine).unwrap();
        for (item, lane) in engine.items().iter().zip(before) {
            assert_eq!(item.lane.abs_diff(lane), 1);
        }
    }
}
