//! In-memory filtering of the resource catalog.
//!
//! [`filter`] keeps a resource when every active predicate of the
//! [`FilterCriteria`] passes. Inactive predicates (empty search, `All`
//! category, missing bounds, no vendor scope) are skipped. The catalog order is
//! preserved and the inputs are never modified.

use serde::{Serialize, Serializer};

use crate::domain::resource::Resource;
use crate::domain::types::{ResourceCategory, VendorId};

/// Category restriction of a [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Sentinel accepting every category.
    #[default]
    All,
    Only(ResourceCategory),
    /// A category value that names no known category; matches nothing.
    Unrecognized(String),
}

impl CategoryFilter {
    /// Parses a user-supplied value. Blank input and `"All"` mean no restriction.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "All" {
            return Self::All;
        }
        match ResourceCategory::try_from(value) {
            Ok(category) => Self::Only(category),
            Err(_) => Self::Unrecognized(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.as_str(),
            Self::Unrecognized(value) => value,
        }
    }

    fn accepts(&self, category: ResourceCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == category,
            Self::Unrecognized(_) => false,
        }
    }
}

impl From<ResourceCategory> for CategoryFilter {
    fn from(value: ResourceCategory) -> Self {
        Self::Only(value)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// User-chosen constraints narrowing the displayed catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and description.
    pub search: String,
    pub category: CategoryFilter,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    pub vendor_id: Option<VendorId>,
}

impl FilterCriteria {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }
    pub fn vendor(mut self, vendor_id: VendorId) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    /// True when no predicate is active.
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty()
            && self.category == CategoryFilter::All
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.vendor_id.is_none()
    }

    fn matches(&self, resource: &Resource, needle: &str) -> bool {
        let price = resource.price.get();

        (needle.is_empty()
            || resource.title.to_lowercase().contains(needle)
            || resource.description.to_lowercase().contains(needle))
            && self.category.accepts(resource.category)
            && self.min_price.is_none_or(|min| price >= min)
            && self.max_price.is_none_or(|max| price <= max)
            && self.vendor_id.is_none_or(|vendor| resource.vendor_id == vendor)
    }
}

/// Returns the resources of `catalog` matching `criteria`, in catalog order.
pub fn filter(catalog: &[Resource], criteria: &FilterCriteria) -> Vec<Resource> {
    let needle = criteria.search.to_lowercase();
    catalog
        .iter()
        .filter(|resource| criteria.matches(resource, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ResourceId;
    use crate::repository::test::sample_resource;

    fn ids(resources: &[Resource]) -> Vec<i32> {
        resources.iter().map(|r| r.id.get()).collect()
    }

    fn catalog() -> Vec<Resource> {
        use ResourceCategory::*;
        vec![
            sample_resource(1, 1, "Red Brick Pallet", Material, 450.0),
            sample_resource(2, 2, "Excavator Rental", Equipment, 1200.0),
            sample_resource(3, 3, "Framing Crew", Labor, 45.0),
            sample_resource(4, 1, "Portland Cement", Material, 12.5),
            sample_resource(5, 4, "Electrical Subcontract", Subcontractor, 5200.0),
            sample_resource(6, 1, "Structural Steel Beams", Material, 2800.0),
            sample_resource(7, 2, "Boom Lift", Equipment, 350.0),
            sample_resource(8, 1, "Epoxy Floor Coating", Material, 3000.0),
        ]
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter(&[], &FilterCriteria::default().search("brick")).is_empty());
    }

    #[test]
    fn neutral_criteria_return_catalog_unchanged() {
        let catalog = catalog();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_neutral());
        assert_eq!(filter(&catalog, &criteria), catalog);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = catalog();
        let upper = filter(&catalog, &FilterCriteria::default().search("BRICK"));
        let lower = filter(&catalog, &FilterCriteria::default().search("brick"));
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![1]);
    }

    #[test]
    fn search_matches_description() {
        let mut catalog = catalog();
        catalog[2].description =
            crate::domain::types::ResourceDescription::new("Experienced carpenters").unwrap();
        let result = filter(&catalog, &FilterCriteria::default().search("CARPENTER"));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn equal_bounds_keep_exact_price_only() {
        let catalog = catalog();
        let criteria = FilterCriteria::default().min_price(350.0).max_price(350.0);
        let result = filter(&catalog, &criteria);
        assert_eq!(ids(&result), vec![7]);
        assert!(result.iter().all(|r| r.price == 350.0));
    }

    #[test]
    fn inverted_bounds_yield_empty_result() {
        let criteria = FilterCriteria::default().min_price(500.0).max_price(100.0);
        assert!(filter(&catalog(), &criteria).is_empty());
    }

    #[test]
    fn vendor_scope_restricts_to_owner() {
        let criteria =
            FilterCriteria::default().vendor(crate::domain::types::VendorId::new(2).unwrap());
        assert_eq!(ids(&filter(&catalog(), &criteria)), vec![2, 7]);
    }

    #[test]
    fn unrecognized_category_matches_nothing() {
        let criteria = FilterCriteria::default().category(CategoryFilter::parse("Tools"));
        assert!(filter(&catalog(), &criteria).is_empty());
    }

    #[test]
    fn parses_category_sentinel() {
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Labor"),
            CategoryFilter::Only(ResourceCategory::Labor)
        );
    }

    #[test]
    fn material_price_window_preserves_relative_order() {
        let catalog = catalog();
        let criteria = FilterCriteria::default()
            .category(ResourceCategory::Material)
            .min_price(100.0)
            .max_price(3000.0);

        let result = filter(&catalog, &criteria);

        assert_eq!(ids(&result), vec![1, 6, 8]);
        assert!(
            result
                .iter()
                .all(|r| r.category == ResourceCategory::Material)
        );
    }

    #[test]
    fn filtering_does_not_mutate_catalog() {
        let catalog = catalog();
        let snapshot = catalog.clone();
        let _ = filter(&catalog, &FilterCriteria::default().search("steel"));
        assert_eq!(catalog, snapshot);
        assert_eq!(catalog[0].id, ResourceId::new(1).unwrap());
    }
}
