//! Waste categories and their bins
//!
//! Each category owns exactly one lane (its bin). The catalog fixes that
//! mapping once at configuration time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};

/// Waste category of a falling item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Organic,
    Glass,
    Plastic,
    Paper,
}

impl Category {
    /// All categories in bin order (left to right)
    pub const ALL: [Category; 4] = [
        Category::Organic,
        Category::Glass,
        Category::Plastic,
        Category::Paper,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Organic => "Organic",
            Category::Glass => "Glass",
            Category::Plastic => "Plastic",
            Category::Paper => "Paper",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "organic" => Some(Category::Organic),
            "glass" => Some(Category::Glass),
            "plastic" => Some(Category::Plastic),
            "paper" => Some(Category::Paper),
            _ => None,
        }
    }

    /// Sprite keys a host may draw for this category.
    ///
    /// Purely cosmetic: an item stores an index into this list.
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            Category::Organic => &[
                "AppleTrash",
                "BananaTrash",
                "ChickenTrash",
                "FishTrash",
                "WatermelonTrash",
            ],
            Category::Glass => &[
                "BottleGlassTrash",
                "GlassCrackTrash",
                "GlassTrash",
                "PlateTrash",
                "LampTrash",
            ],
            Category::Plastic => &[
                "FaceWashTrash",
                "InfusionBottle",
                "PlasticBagTrash",
                "PlasticBottleTrash",
                "PlasticGlassTrash",
            ],
            Category::Paper => &[
                "BookTrash",
                "MagazineTrash",
                "MailTrash",
                "PaperBoxTrash",
                "SmallPaperBoxTrash",
            ],
        }
    }
}

/// Bijective category <-> lane mapping
///
/// The position of a category in the list is its canonical lane, so the
/// number of lanes always equals the number of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog from an ordered category list (lane 0 first).
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].contains(category) {
                return Err(SortError::InvalidConfiguration(format!(
                    "category {} appears more than once",
                    category.label()
                )));
            }
        }
        Ok(Self { categories })
    }

    /// Canonical lane for a category.
    ///
    /// Total over the categories the catalog was built with; a category
    /// outside the catalog falls back to lane 0.
    pub fn canonical_lane(&self, category: Category) -> usize {
        self.categories
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0)
    }

    /// Inverse of [`canonical_lane`](Self::canonical_lane)
    pub fn category_for_lane(&self, lane: usize) -> Option<Category> {
        self.categories.get(lane).copied()
    }

    /// Ordered categories, used for uniform sampling
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn lanes_count(&self) -> usize {
        self.categories.len()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
        }
    }
}
