// MarketView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use crate::util::error::CategoryError;
use std::str::FromStr;

// =============================================================================
// Product
// =============================================================================

/// A static catalog entry.
///
/// Products are fixed at compile time and never mutated; the UI only ever
/// holds shared references into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: u32,

    /// Display name, matched by the search box.
    pub name: &'static str,

    /// Price in whole dollars.
    pub price: u32,

    pub category: Category,
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Electronics,
    Furniture,
    Appliances,
    Sports,
}

impl Category {
    /// Returns all variants in checkbox display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Electronics,
            Category::Furniture,
            Category::Appliances,
            Category::Sports,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Appliances => "Appliances",
            Category::Sports => "Sports",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Case-insensitive lookup by label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryError::Unknown {
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!(" SPORTS ".parse::<Category>(), Ok(Category::Sports));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "Garden".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            CategoryError::Unknown {
                label: "Garden".to_string()
            }
        );
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for category in Category::all() {
            assert_eq!(category.label().parse::<Category>(), Ok(*category));
        }
    }
}
