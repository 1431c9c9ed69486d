use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::aggregation::RequestLine;
use crate::domain::resource::Resource;
use crate::domain::types::{
    ItemName, Quantity, RequestCost, RequestStatus, ResourceCategory, ResourceId,
    ResourceRequestId, ResourceUnit, TypeConstraintError, UserSubject, VendorId,
};

/// A buyer's request for a resource or one of its specification items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceRequest {
    pub id: ResourceRequestId,
    pub user_id: UserSubject,
    pub vendor_id: VendorId,
    /// Cleared when the source listing is deleted.
    pub resource_id: Option<ResourceId>,
    pub name: ItemName,
    pub request_type: ResourceCategory,
    pub quantity: Quantity,
    pub unit: ResourceUnit,
    pub cost: RequestCost,
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`ResourceRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewResourceRequest {
    pub user_id: UserSubject,
    pub vendor_id: VendorId,
    pub resource_id: ResourceId,
    pub name: ItemName,
    pub request_type: ResourceCategory,
    pub quantity: Quantity,
    pub unit: ResourceUnit,
    pub cost: RequestCost,
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
}

impl NewResourceRequest {
    /// Builds a pending request for one aggregated line of `resource`.
    ///
    /// The line's cost share is rounded to currency precision here, at the
    /// persistence boundary.
    pub fn from_line(
        line: RequestLine,
        resource: &Resource,
        user_id: UserSubject,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            user_id,
            vendor_id: resource.vendor_id,
            resource_id: resource.id,
            name: line.name,
            request_type: line.category_guess,
            quantity: line.quantity,
            unit: line.unit,
            cost: RequestCost::new(round_currency(line.cost_share))?,
            status: RequestStatus::Pending,
            created_at,
        })
    }
}

/// Rounds to two decimals, halves away from zero.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_currency(33.333_333), 33.33);
        assert_eq!(round_currency(66.666_666), 66.67);
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(75.0), 75.0);
    }
}
