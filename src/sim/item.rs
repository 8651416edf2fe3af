//! Falling item entity

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::Category;

/// Stable identifier of a live item
///
/// Allocated from a monotonically increasing counter; a respawned slot gets
/// a fresh id, so ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Swipe direction for [`crate::sim::Engine::nudge_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// One descending item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: ItemId,
    /// Lane index in `[0, lanes_count)`
    pub lane: usize,
    /// Distance travelled toward the collection line (grows while falling)
    pub position: f32,
    pub category: Category,
    /// Index into [`Category::variants`]
    pub variant: usize,
}

impl FallingItem {
    pub fn new(id: ItemId, lane: usize, position: f32, category: Category, variant: usize) -> Self {
        Self {
            id,
            lane,
            position,
            category,
            variant,
        }
    }

    /// Advance by `speed * dt`
    pub fn fall(&mut self, speed: f32, dt: f32) {
        self.position += speed * dt;
    }

    /// True once the item's leading edge touches the collection line
    pub fn has_arrived(&self, radius: f32, collection_line_y: f32) -> bool {
        self.position + radius >= collection_line_y
    }

    /// Sprite key for the current category/variant
    pub fn sprite(&self) -> &'static str {
        let variants = self.category.variants();
        variants
            .get(self.variant)
            .or_else(|| variants.first())
            .copied()
            .unwrap_or("")
    }

    /// Lane one step in `direction`, clamped to `[0, lanes_count)`
    pub fn nudged_lane(&self, direction: Direction, lanes_count: usize) -> usize {
        match direction {
            Direction::Left => self.lane.saturating_sub(1),
            Direction::Right => (self.lane + 1).min(lanes_count.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(lane: usize, position: f32) -> FallingItem {
        FallingItem::new(ItemId(1), lane, position, Category::Glass, 2)
    }

    #[test]
    fn test_fall_scales_with_dt() {
        let mut it = item(0, -50.0);
        it.fall(150.0, 0.02);
        assert!((it.position - (-47.0)).abs() < 1e-4);
        it.fall(150.0, 0.04);
        assert!((it.position - (-41.0)).abs() < 1e-4);
    }

    #[test]
    fn test_arrival_uses_leading_edge() {
        assert!(!item(0, 669.0).has_arrived(50.0, 720.0));
        assert!(item(0, 670.0).has_arrived(50.0, 720.0));
        assert!(item(0, 900.0).has_arrived(50.0, 720.0));
    }

    #[test]
    fn test_nudge_clamps_at_edges() {
        assert_eq!(item(0, 0.0).nudged_lane(Direction::Left, 4), 0);
        assert_eq!(item(0, 0.0).nudged_lane(Direction::Right, 4), 1);
        assert_eq!(item(3, 0.0).nudged_lane(Direction::Right, 4), 3);
        assert_eq!(item(3, 0.0).nudged_lane(Direction::Left, 4), 2);
    }

    #[test]
    fn test_sprite_lookup() {
        assert_eq!(item(0, 0.0).sprite(), "GlassTrash");
        let mut odd = item(0, 0.0);
        odd.variant = 99;
        assert_eq!(odd.sprite(), "BottleGlassTrash");
    }
}
