//! Splitting a resource into request lines.
//!
//! A resource without a specification becomes a single line carrying the full
//! price. A resource with a specification becomes one line per entry, in entry
//! order, each carrying an equal share of the listed price.
//!
//! The equal split is a pricing policy, not a derived fact: listings carry a
//! single total price and no per-item prices. Shares keep full precision;
//! rounding to currency happens when a line is persisted
//! (see [`crate::domain::resource_request::round_currency`]).

use serde::Serialize;
use thiserror::Error;

use crate::domain::classification::ItemClassifier;
use crate::domain::resource::Resource;
use crate::domain::specification::SpecificationError;
use crate::domain::types::{ItemName, Quantity, ResourceCategory, ResourceUnit};

/// One line of a buyer's request derived from a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestLine {
    pub name: ItemName,
    pub category_guess: ResourceCategory,
    pub quantity: Quantity,
    pub unit: ResourceUnit,
    /// Portion of the resource price allocated to this line.
    pub cost_share: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// A specification quantity was zero, negative or not a whole number.
    #[error("invalid specification: {0}")]
    Validation(#[from] SpecificationError),
    /// An equal split was requested over zero entries.
    #[error("cannot split a price across zero specification entries")]
    DivisionHazard,
}

/// Splits `resource` into request lines using the default item table.
pub fn aggregate(resource: &Resource) -> Result<Vec<RequestLine>, AggregationError> {
    aggregate_with(resource, &ItemClassifier::default())
}

/// Same as [`aggregate`] with a caller-supplied classifier.
pub fn aggregate_with(
    resource: &Resource,
    classifier: &ItemClassifier,
) -> Result<Vec<RequestLine>, AggregationError> {
    let specification = match &resource.specification {
        Some(specification) if !specification.is_empty() => specification,
        _ => {
            return Ok(vec![RequestLine {
                name: ItemName::from(resource.title.clone()),
                category_guess: resource.category,
                quantity: Quantity::ONE,
                unit: resource.unit,
                cost_share: resource.price.get(),
            }]);
        }
    };

    let share = equal_share(resource.price.get(), specification.len())?;

    Ok(specification
        .iter()
        .map(|entry| RequestLine {
            name: entry.item.clone(),
            category_guess: classifier.classify(&entry.item),
            quantity: entry.quantity,
            unit: resource.unit,
            cost_share: share,
        })
        .collect())
}

/// Divides `total` into `parts` equal shares.
pub fn equal_share(total: f64, parts: usize) -> Result<f64, AggregationError> {
    if parts == 0 {
        return Err(AggregationError::DivisionHazard);
    }
    Ok(total / parts as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::specification::Specification;
    use crate::domain::types::ResourcePrice;
    use crate::repository::test::sample_resource;

    #[test]
    fn splits_price_equally_across_entries() {
        let mut resource = sample_resource(1, 1, "Masonry Kit", ResourceCategory::Material, 150.0);
        resource.specification =
            Some(Specification::from_pairs([("Brick", 10), ("Cement", 5)]).unwrap());

        let lines = aggregate(&resource).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Brick");
        assert_eq!(lines[0].quantity, 10);
        assert_eq!(lines[1].name, "Cement");
        assert_eq!(lines[1].quantity, 5);
        assert!(lines.iter().all(|l| l.cost_share == 75.0));
        assert!(
            lines
                .iter()
                .all(|l| l.category_guess == ResourceCategory::Material)
        );
    }

    #[test]
    fn resource_without_specification_is_one_line() {
        let mut resource = sample_resource(2, 1, "Framing Crew", ResourceCategory::Labor, 300.0);
        resource.unit = ResourceUnit::Day;

        let lines = aggregate(&resource).unwrap();

        assert_eq!(
            lines,
            vec![RequestLine {
                name: ItemName::new("Framing Crew").unwrap(),
                category_guess: ResourceCategory::Labor,
                quantity: Quantity::ONE,
                unit: ResourceUnit::Day,
                cost_share: 300.0,
            }]
        );
    }

    #[test]
    fn empty_specification_is_one_line() {
        let mut resource = sample_resource(3, 1, "Gravel", ResourceCategory::Material, 80.0);
        resource.specification = Some(Specification::default());

        let lines = aggregate(&resource).unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].cost_share, 80.0);
    }

    #[test]
    fn lines_inherit_unit_and_classify_unknown_items_as_other() {
        let mut resource =
            sample_resource(4, 1, "Site Package", ResourceCategory::Equipment, 90.0);
        resource.unit = ResourceUnit::Week;
        resource.specification = Some(
            Specification::from_pairs([("Drill", 2), ("Safety Vest", 4), ("Sand", 1)]).unwrap(),
        );

        let lines = aggregate(&resource).unwrap();

        let categories: Vec<ResourceCategory> = lines.iter().map(|l| l.category_guess).collect();
        assert_eq!(
            categories,
            vec![
                ResourceCategory::Equipment,
                ResourceCategory::Other,
                ResourceCategory::Material
            ]
        );
        assert!(lines.iter().all(|l| l.unit == ResourceUnit::Week));
        assert!(lines.iter().all(|l| l.cost_share == 30.0));
    }

    #[test]
    fn shares_are_not_rounded() {
        let mut resource = sample_resource(5, 1, "Bundle", ResourceCategory::Material, 100.0);
        resource.price = ResourcePrice::new(100.0).unwrap();
        resource.specification =
            Some(Specification::from_pairs([("Brick", 1), ("Sand", 1), ("Gravel", 1)]).unwrap());

        let lines = aggregate(&resource).unwrap();

        assert_eq!(lines[0].cost_share, 100.0 / 3.0);
    }

    #[test]
    fn zero_quantity_is_a_validation_error() {
        let err: AggregationError = Specification::from_pairs([("Drill", 0)])
            .unwrap_err()
            .into();
        assert!(matches!(err, AggregationError::Validation(_)));
    }

    #[test]
    fn splitting_over_zero_parts_is_a_division_hazard() {
        assert_eq!(
            equal_share(10.0, 0).unwrap_err(),
            AggregationError::DivisionHazard
        );
    }

    #[test]
    fn aggregation_is_deterministic() {
        let mut resource = sample_resource(6, 1, "Kit", ResourceCategory::Material, 42.0);
        resource.specification =
            Some(Specification::from_pairs([("Tile", 3), ("Mortar", 1)]).unwrap());
        assert_eq!(aggregate(&resource).unwrap(), aggregate(&resource).unwrap());
    }
}
