use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::resource::{
    NewResource as DomainNewResource, Resource as DomainResource,
    ResourceUpdate as DomainResourceUpdate,
};
use crate::domain::specification::Specification;
use crate::domain::types::{
    Availability, ImageUrl, ResourceCategory, ResourceDescription, ResourcePrice, ResourceTitle,
    ResourceUnit, TypeConstraintError,
};

/// Diesel model representing the `resources` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::resources)]
pub struct Resource {
    pub id: i32,
    pub vendor_id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub availability: String,
    pub image_url: Option<String>,
    pub featured: bool,
    /// JSON object text in entry order; `NULL` when there is no breakdown.
    pub specification: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Resource`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::resources)]
pub struct NewResource {
    pub vendor_id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub availability: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub specification: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Listing changeset; `None` clears the image and the specification.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::resources)]
#[diesel(treat_none_as_null = true)]
pub struct ResourceChangeset {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub availability: String,
    pub image_url: Option<String>,
    pub specification: Option<String>,
    pub updated_at: NaiveDateTime,
}

fn specification_to_column(
    specification: Option<Specification>,
) -> Result<Option<String>, TypeConstraintError> {
    specification
        .filter(|s| !s.is_empty())
        .map(|s| serde_json::to_string(&s))
        .transpose()
        .map_err(|e| TypeConstraintError::InvalidValue(e.to_string()))
}

impl TryFrom<Resource> for DomainResource {
    type Error = TypeConstraintError;

    fn try_from(resource: Resource) -> Result<Self, Self::Error> {
        let specification = resource
            .specification
            .as_deref()
            .filter(|raw| !raw.trim().is_empty() && raw.trim() != "null")
            .map(Specification::from_json_str)
            .transpose()
            .map_err(|e| TypeConstraintError::InvalidValue(e.to_string()))?;

        Ok(Self {
            id: resource.id.try_into()?,
            vendor_id: resource.vendor_id.try_into()?,
            title: ResourceTitle::new(resource.title)?,
            description: ResourceDescription::new(resource.description)?,
            category: ResourceCategory::try_from(resource.category)?,
            price: ResourcePrice::new(resource.price)?,
            unit: ResourceUnit::try_from(resource.unit)?,
            availability: Availability::new(resource.availability)?,
            image_url: resource
                .image_url
                .filter(|url| !url.trim().is_empty())
                .map(ImageUrl::new)
                .transpose()?,
            featured: resource.featured,
            specification,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        })
    }
}

impl TryFrom<DomainNewResource> for NewResource {
    type Error = TypeConstraintError;

    fn try_from(resource: DomainNewResource) -> Result<Self, Self::Error> {
        Ok(Self {
            vendor_id: resource.vendor_id.get(),
            title: resource.title.into_inner(),
            description: resource.description.into_inner(),
            category: resource.category.into(),
            price: resource.price.get(),
            unit: resource.unit.into(),
            availability: resource.availability.into_inner(),
            image_url: resource.image_url.map(ImageUrl::into_inner),
            featured: resource.featured,
            specification: specification_to_column(resource.specification)?,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        })
    }
}

impl TryFrom<DomainResourceUpdate> for ResourceChangeset {
    type Error = TypeConstraintError;

    fn try_from(update: DomainResourceUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: update.title.into_inner(),
            description: update.description.into_inner(),
            category: update.category.into(),
            price: update.price.get(),
            unit: update.unit.into(),
            availability: update.availability.into_inner(),
            image_url: update.image_url.map(ImageUrl::into_inner),
            specification: specification_to_column(update.specification)?,
            updated_at: update.updated_at,
        })
    }
}
