use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::resource_request::{
    NewResourceRequest as DomainNewResourceRequest, ResourceRequest as DomainResourceRequest,
};
use crate::domain::types::{
    ItemName, Quantity, RequestCost, RequestStatus, ResourceCategory, ResourceUnit,
    TypeConstraintError, UserSubject,
};

/// Diesel model representing the `resource_requests` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::resource_requests)]
pub struct ResourceRequest {
    pub id: i32,
    pub user_id: String,
    pub vendor_id: i32,
    pub resource_id: Option<i32>,
    pub name: String,
    pub request_type: String,
    pub quantity: i32,
    pub unit: String,
    pub cost: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ResourceRequest`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::resource_requests)]
pub struct NewResourceRequest {
    pub user_id: String,
    pub vendor_id: i32,
    pub resource_id: Option<i32>,
    pub name: String,
    pub request_type: String,
    pub quantity: i32,
    pub unit: String,
    pub cost: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ResourceRequest> for DomainResourceRequest {
    type Error = TypeConstraintError;

    fn try_from(request: ResourceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: request.id.try_into()?,
            user_id: UserSubject::new(request.user_id)?,
            vendor_id: request.vendor_id.try_into()?,
            resource_id: request.resource_id.map(TryInto::try_into).transpose()?,
            name: ItemName::new(request.name)?,
            request_type: ResourceCategory::try_from(request.request_type)?,
            quantity: Quantity::new(request.quantity)?,
            unit: ResourceUnit::try_from(request.unit)?,
            cost: RequestCost::new(request.cost)?,
            status: RequestStatus::try_from(request.status)?,
            created_at: request.created_at,
        })
    }
}

impl From<&DomainNewResourceRequest> for NewResourceRequest {
    fn from(request: &DomainNewResourceRequest) -> Self {
        Self {
            user_id: request.user_id.to_string(),
            vendor_id: request.vendor_id.get(),
            resource_id: Some(request.resource_id.get()),
            name: request.name.to_string(),
            request_type: request.request_type.into(),
            quantity: request.quantity.get(),
            unit: request.unit.into(),
            cost: request.cost.get(),
            status: request.status.into(),
            created_at: request.created_at,
        }
    }
}
