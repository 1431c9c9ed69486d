use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::resource::Resource;
use crate::domain::specification::Specification;

/// One specification entry, kept as a list so templates render it in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificationItemDto {
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDto {
    pub id: i32,
    pub vendor_id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub availability: String,
    /// Listing image or the placeholder.
    pub image_url: String,
    pub featured: bool,
    pub specification: Vec<SpecificationItemDto>,
    /// Specification in the `Name: quantity` form used by the edit form.
    pub specification_text: String,
    pub created_at: NaiveDateTime,
}

/// Renders a specification as one `Name: quantity` line per entry.
pub fn specification_to_text(specification: &Specification) -> String {
    specification
        .iter()
        .map(|entry| format!("{}: {}", entry.item, entry.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<Resource> for ResourceDto {
    fn from(value: Resource) -> Self {
        let image_url = value.image_or_placeholder().to_string();
        let (specification, specification_text) = match &value.specification {
            Some(specification) => (
                specification
                    .iter()
                    .map(|entry| SpecificationItemDto {
                        name: entry.item.to_string(),
                        quantity: entry.quantity.get(),
                    })
                    .collect(),
                specification_to_text(specification),
            ),
            None => (Vec::new(), String::new()),
        };

        Self {
            id: value.id.get(),
            vendor_id: value.vendor_id.get(),
            title: value.title.into_inner(),
            description: value.description.into_inner(),
            category: value.category.as_str().to_string(),
            price: value.price.get(),
            unit: value.unit.as_str().to_string(),
            availability: value.availability.into_inner(),
            image_url,
            featured: value.featured,
            specification,
            specification_text,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::PLACEHOLDER_IMAGE_URL;
    use crate::domain::types::ResourceCategory;
    use crate::repository::test::sample_resource;

    #[test]
    fn keeps_specification_order_and_applies_placeholder() {
        let mut resource = sample_resource(1, 1, "Masonry Kit", ResourceCategory::Material, 150.0);
        resource.specification =
            Some(Specification::from_pairs([("Sand", 2), ("Brick", 10)]).unwrap());

        let dto = ResourceDto::from(resource);

        assert_eq!(dto.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(dto.specification[0].name, "Sand");
        assert_eq!(dto.specification[1].quantity, 10);
        assert_eq!(dto.specification_text, "Sand: 2\nBrick: 10");
    }
}
