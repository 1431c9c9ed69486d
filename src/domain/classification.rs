//! Static lookup of specification item names to resource categories.
//!
//! The table is closed: names are matched case-insensitively after trimming,
//! and anything not listed classifies as [`ResourceCategory::Other`].

use crate::domain::types::ResourceCategory;

/// Fixed `name -> category` table consulted by [`ItemClassifier`].
pub type ClassificationTable = &'static [(&'static str, ResourceCategory)];

/// Item names recognised as raw construction materials or equipment.
pub const DEFAULT_ITEM_CATEGORIES: ClassificationTable = &[
    ("aggregate", ResourceCategory::Material),
    ("asphalt", ResourceCategory::Material),
    ("brick", ResourceCategory::Material),
    ("bricks", ResourceCategory::Material),
    ("cement", ResourceCategory::Material),
    ("concrete", ResourceCategory::Material),
    ("drywall", ResourceCategory::Material),
    ("epoxy", ResourceCategory::Material),
    ("glass", ResourceCategory::Material),
    ("gravel", ResourceCategory::Material),
    ("insulation", ResourceCategory::Material),
    ("lumber", ResourceCategory::Material),
    ("mortar", ResourceCategory::Material),
    ("nails", ResourceCategory::Material),
    ("paint", ResourceCategory::Material),
    ("pipe", ResourceCategory::Material),
    ("plywood", ResourceCategory::Material),
    ("rebar", ResourceCategory::Material),
    ("sand", ResourceCategory::Material),
    ("screws", ResourceCategory::Material),
    ("shingles", ResourceCategory::Material),
    ("steel", ResourceCategory::Material),
    ("steel beam", ResourceCategory::Material),
    ("stone", ResourceCategory::Material),
    ("tile", ResourceCategory::Material),
    ("timber", ResourceCategory::Material),
    ("wire", ResourceCategory::Material),
    ("backhoe", ResourceCategory::Equipment),
    ("boom lift", ResourceCategory::Equipment),
    ("bulldozer", ResourceCategory::Equipment),
    ("compactor", ResourceCategory::Equipment),
    ("compressor", ResourceCategory::Equipment),
    ("concrete mixer", ResourceCategory::Equipment),
    ("crane", ResourceCategory::Equipment),
    ("drill", ResourceCategory::Equipment),
    ("dump truck", ResourceCategory::Equipment),
    ("excavator", ResourceCategory::Equipment),
    ("forklift", ResourceCategory::Equipment),
    ("generator", ResourceCategory::Equipment),
    ("jackhammer", ResourceCategory::Equipment),
    ("ladder", ResourceCategory::Equipment),
    ("loader", ResourceCategory::Equipment),
    ("mixer", ResourceCategory::Equipment),
    ("nail gun", ResourceCategory::Equipment),
    ("pump", ResourceCategory::Equipment),
    ("saw", ResourceCategory::Equipment),
    ("scaffolding", ResourceCategory::Equipment),
    ("scissor lift", ResourceCategory::Equipment),
    ("trencher", ResourceCategory::Equipment),
    ("welder", ResourceCategory::Equipment),
];

/// Classifies specification items using a fixed table.
#[derive(Debug, Clone, Copy)]
pub struct ItemClassifier {
    table: ClassificationTable,
}

impl Default for ItemClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_CATEGORIES)
    }
}

impl ItemClassifier {
    /// Creates a classifier over `table`. Table keys are expected lowercase.
    pub const fn new(table: ClassificationTable) -> Self {
        Self { table }
    }

    /// Returns the category for `item`, or `Other` when it is not listed.
    pub fn classify(&self, item: &str) -> ResourceCategory {
        let needle = item.trim().to_lowercase();
        self.table
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, category)| *category)
            .unwrap_or(ResourceCategory::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_materials_and_equipment() {
        let classifier = ItemClassifier::default();
        assert_eq!(classifier.classify("Brick"), ResourceCategory::Material);
        assert_eq!(classifier.classify("Cement"), ResourceCategory::Material);
        assert_eq!(classifier.classify("Drill"), ResourceCategory::Equipment);
        assert_eq!(
            classifier.classify("  Concrete Mixer "),
            ResourceCategory::Equipment
        );
    }

    #[test]
    fn unknown_items_are_other() {
        let classifier = ItemClassifier::default();
        assert_eq!(classifier.classify("Team Size"), ResourceCategory::Other);
        assert_eq!(classifier.classify("Red Brick"), ResourceCategory::Other);
    }

    #[test]
    fn custom_table_replaces_defaults() {
        const TABLE: ClassificationTable = &[("crew", ResourceCategory::Labor)];
        let classifier = ItemClassifier::new(TABLE);
        assert_eq!(classifier.classify("Crew"), ResourceCategory::Labor);
        assert_eq!(classifier.classify("Brick"), ResourceCategory::Other);
    }

    #[test]
    fn default_table_keys_are_lowercase_and_unique() {
        let mut keys: Vec<&str> = DEFAULT_ITEM_CATEGORIES.iter().map(|(k, _)| *k).collect();
        assert!(keys.iter().all(|k| *k == k.to_lowercase()));
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
