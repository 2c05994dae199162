//! Default catalog of workouts and categories.
//!
//! This module provides the built-in, immutable workout library the user
//! assembles sessions from. The catalog is loaded once and never mutated;
//! lookups are by id and listing preserves the definition order.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding the item tables on every operation.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with built-in categories and workouts
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog
/// creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("mobility", "Mobility / Stretch", "#A855F7"),
    ("upper", "Upper Body", "#F97316"),
    ("lower", "Lower Body", "#22C55E"),
    ("core", "Core", "#38BDF8"),
    ("cardio", "Cardio", "#FACC15"),
    ("conditioning", "Conditioning", "#E11D48"),
    ("fullbody", "Full Body", "#4ADE80"),
];

const WORKOUTS: &[(&str, &str, &str)] = &[
    ("w1", "Dynamic Stretch Warm-up", "mobility"),
    ("w2", "Hamstring Stretch", "mobility"),
    ("w3", "Hip Flexor Stretch", "mobility"),
    ("w4", "Shoulder Circles", "mobility"),
    ("w5", "Arm Swings", "mobility"),
    ("w6", "Push-ups", "upper"),
    ("w7", "Bench Press", "upper"),
    ("w8", "Incline Dumbbell Press", "upper"),
    ("w9", "Dumbbell Rows", "upper"),
    ("w10", "Shoulder Press", "upper"),
    ("w11", "Back Squats", "lower"),
    ("w12", "Front Squats", "lower"),
    ("w13", "Lunges", "lower"),
    ("w14", "Romanian Deadlifts", "lower"),
    ("w15", "Leg Press", "lower"),
    ("w16", "Plank", "core"),
    ("w17", "Side Plank", "core"),
    ("w18", "Crunches", "core"),
    ("w19", "Hanging Leg Raises", "core"),
    ("w20", "Russian Twists", "core"),
    ("w21", "Treadmill Run", "cardio"),
    ("w22", "Bike (Spin)", "cardio"),
    ("w23", "Rowing Machine", "cardio"),
    ("w24", "Stair Climber", "cardio"),
    ("w25", "Jump Rope", "cardio"),
    ("w26", "Burpees", "conditioning"),
    ("w27", "Battle Ropes", "conditioning"),
    ("w28", "Kettlebell Swings", "conditioning"),
    ("w29", "Sled Push", "conditioning"),
    ("w30", "Box Jumps", "conditioning"),
    ("w31", "Full Body Circuit #1", "fullbody"),
    ("w32", "Full Body Circuit #2", "fullbody"),
    ("w33", "EMOM Circuit", "fullbody"),
    ("w34", "AMRAP Circuit", "fullbody"),
    ("w35", "Complex Barbell Circuit", "fullbody"),
    ("w36", "Calf Raises", "lower"),
    ("w37", "Glute Bridges", "lower"),
    ("w38", "Face Pulls", "upper"),
    ("w39", "Lat Pulldown", "upper"),
    ("w40", "Chest Fly Machine", "upper"),
    ("w41", "Side Lunges", "lower"),
    ("w42", "Wall Sit", "lower"),
    ("w43", "Mountain Climbers", "conditioning"),
    ("w44", "High Knees", "conditioning"),
    ("w45", "Bear Crawls", "conditioning"),
    ("w46", "Bird Dogs", "core"),
    ("w47", "Dead Bug", "core"),
    ("w48", "Oblique Crunches", "core"),
    ("w49", "Foam Roll - Back", "mobility"),
    ("w50", "Foam Roll - Legs", "mobility"),
];

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let categories = CATEGORIES
        .iter()
        .map(|(id, label, color)| Category {
            id: (*id).into(),
            label: (*label).into(),
            color: (*color).into(),
        })
        .collect();

    let items = WORKOUTS
        .iter()
        .map(|(id, name, category_id)| CatalogItem {
            id: (*id).into(),
            name: (*name).into(),
            category_id: (*category_id).into(),
        })
        .collect();

    Catalog { items, categories }
}

impl Catalog {
    /// All catalog items in stable catalog-definition order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// All categories in stable catalog-definition order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Items matching the given filter, preserving catalog order
    pub fn filter<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a CatalogItem> {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (i, category) in self.categories.iter().enumerate() {
            if category.id.is_empty() {
                errors.push(format!("Category at position {} has empty ID", i));
            }
            if category.label.is_empty() {
                errors.push(format!("Category '{}' has empty label", category.id));
            }
            if self.categories.iter().filter(|c| c.id == category.id).count() > 1 {
                errors.push(format!("Duplicate category ID '{}'", category.id));
            }
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.id.is_empty() {
                errors.push(format!("Item at position {} has empty ID", i));
            }
            if item.name.is_empty() {
                errors.push(format!("Item '{}' has empty name", item.id));
            }
            if self.items.iter().filter(|other| other.id == item.id).count() > 1 {
                errors.push(format!("Duplicate item ID '{}'", item.id));
            }
            if self.category(&item.category_id).is_none() {
                errors.push(format!(
                    "Item '{}' references non-existent category '{}'",
                    item.id, item.category_id
                ));
            }
        }

        // Every category should have at least one selectable item
        for category in &self.categories {
            if !self.items.iter().any(|item| item.category_id == category.id) {
                errors.push(format!("Category '{}' has no items", category.id));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.items().len(), 50);
        assert_eq!(catalog.categories().len(), 7);
    }

    #[test]
    fn test_all_referenced_categories_exist() {
        let catalog = build_default_catalog();
        for item in catalog.items() {
            assert!(
                catalog.category(&item.category_id).is_some(),
                "Category {} referenced but not found",
                item.category_id
            );
        }
    }

    #[test]
    fn test_filter_all_preserves_order() {
        let catalog = build_default_catalog();
        let all: Vec<_> = catalog.filter(&CategoryFilter::All).collect();
        assert_eq!(all.len(), 50);
        assert_eq!(all[0].id, "w1");
        assert_eq!(all[49].id, "w50");
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = build_default_catalog();
        let filter = CategoryFilter::Category("mobility".into());
        let mobility: Vec<_> = catalog.filter(&filter).collect();
        assert_eq!(mobility.len(), 7);
        assert!(mobility.iter().all(|item| item.category_id == "mobility"));
        // Catalog order preserved within the filtered view
        assert_eq!(mobility.first().map(|i| i.id.as_str()), Some("w1"));
        assert_eq!(mobility.last().map(|i| i.id.as_str()), Some("w50"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.get("w6").map(|i| i.name.as_str()), Some("Push-ups"));
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_validate_flags_dangling_category() {
        let mut catalog = build_default_catalog();
        catalog.items[0].category_id = "missing".into();
        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("non-existent category")));
    }

    #[test]
    fn test_cached_catalog_matches_built() {
        let built = build_default_catalog();
        let cached = default_catalog();
        assert_eq!(cached.items().len(), built.items().len());
        assert_eq!(cached.categories().len(), built.categories().len());
    }
}
