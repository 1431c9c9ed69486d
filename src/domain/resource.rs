use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::specification::Specification;
use crate::domain::types::{
    Availability, ImageUrl, ResourceCategory, ResourceDescription, ResourceId, ResourcePrice,
    ResourceTitle, ResourceUnit, VendorId,
};

/// Image shown for listings that were published without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=Resource";

/// A material, piece of equipment or service listed by a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub vendor_id: VendorId,
    pub title: ResourceTitle,
    pub description: ResourceDescription,
    pub category: ResourceCategory,
    /// Price per [`Self::unit`].
    pub price: ResourcePrice,
    pub unit: ResourceUnit,
    pub availability: Availability,
    pub image_url: Option<ImageUrl>,
    pub featured: bool,
    /// Optional item breakdown; `None` or empty means "sold as one unit".
    pub specification: Option<Specification>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Resource {
    /// Image URL to render, falling back to [`PLACEHOLDER_IMAGE_URL`].
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_ref()
            .map(ImageUrl::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

/// Information required to create a new [`Resource`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewResource {
    pub vendor_id: VendorId,
    pub title: ResourceTitle,
    pub description: ResourceDescription,
    pub category: ResourceCategory,
    pub price: ResourcePrice,
    pub unit: ResourceUnit,
    pub availability: Availability,
    pub image_url: Option<ImageUrl>,
    pub featured: bool,
    pub specification: Option<Specification>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable fields of an existing [`Resource`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceUpdate {
    pub title: ResourceTitle,
    pub description: ResourceDescription,
    pub category: ResourceCategory,
    pub price: ResourcePrice,
    pub unit: ResourceUnit,
    pub availability: Availability,
    pub image_url: Option<ImageUrl>,
    pub specification: Option<Specification>,
    pub updated_at: NaiveDateTime,
}
