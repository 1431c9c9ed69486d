use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::resource::{NewResource, ResourceUpdate};
use crate::domain::specification::{Specification, SpecificationError};
use crate::domain::types::{
    Availability, ImageUrl, ResourceCategory, ResourceDescription, ResourcePrice, ResourceTitle,
    ResourceUnit, TypeConstraintError, VendorId,
};
use crate::forms::empty_string_as_none;

/// Listing form used both to add and to edit a resource.
#[derive(Deserialize, Validate)]
pub struct ResourceForm {
    #[validate(length(min = 2))]
    pub title: String,
    #[validate(length(min = 10))]
    pub description: String,
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub unit: String,
    #[validate(length(min = 2))]
    pub availability: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url)]
    pub image_url: Option<String>,
    /// One `Name: quantity` entry per line.
    #[serde(default)]
    pub specification: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceFormPayload {
    pub title: ResourceTitle,
    pub description: ResourceDescription,
    pub category: ResourceCategory,
    pub price: ResourcePrice,
    pub unit: ResourceUnit,
    pub availability: Availability,
    pub image_url: Option<ImageUrl>,
    pub specification: Option<Specification>,
}

impl ResourceFormPayload {
    /// New listings are never featured.
    pub fn into_new_resource(self, vendor_id: VendorId) -> NewResource {
        let now = Utc::now().naive_utc();
        NewResource {
            vendor_id,
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            unit: self.unit,
            availability: self.availability,
            image_url: self.image_url,
            featured: false,
            specification: self.specification,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_resource_update(self) -> ResourceUpdate {
        ResourceUpdate {
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            unit: self.unit,
            availability: self.availability,
            image_url: self.image_url,
            specification: self.specification,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResourceFormError {
    #[error("Resource form validation failed: {0}")]
    Validation(String),
    #[error("Resource form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Resource specification is invalid: {0}")]
    Specification(#[from] SpecificationError),
}

impl From<ValidationErrors> for ResourceFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ResourceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ResourceForm> for ResourceFormPayload {
    type Error = ResourceFormError;

    fn try_from(value: ResourceForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: ResourceTitle::new(value.title)?,
            description: ResourceDescription::new(value.description)?,
            category: ResourceCategory::try_from(value.category)?,
            price: ResourcePrice::new(value.price)?,
            unit: ResourceUnit::try_from(value.unit)?,
            availability: Availability::new(value.availability)?,
            image_url: value.image_url.map(ImageUrl::new).transpose()?,
            specification: parse_specification_lines(&value.specification)?,
        })
    }
}

/// Parses `Name: quantity` lines. Blank input means no specification.
///
/// The quantity follows the last colon so item names may contain colons.
pub fn parse_specification_lines(text: &str) -> Result<Option<Specification>, SpecificationError> {
    let mut pairs = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (name, quantity) = line
            .rsplit_once(':')
            .ok_or_else(|| SpecificationError::MalformedLine(line.to_string()))?;
        let name = name.trim();
        let quantity = quantity.trim();

        let quantity = match quantity.parse::<i64>() {
            Ok(quantity) => quantity,
            Err(_) => match quantity.parse::<f64>() {
                Ok(value) if value.is_finite() && value.fract() != 0.0 => {
                    return Err(SpecificationError::NonIntegerQuantity(name.to_string()));
                }
                Ok(value) if value.is_finite() => value as i64,
                _ => return Err(SpecificationError::MalformedLine(line.to_string())),
            },
        };

        pairs.push((name.to_string(), quantity));
    }

    if pairs.is_empty() {
        return Ok(None);
    }
    Specification::from_pairs(pairs).map(Some)
}
