use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{
    ContactEmail, ContactName, ContactPhone, Location, TypeConstraintError, UserSubject,
    VendorDescription, VendorName, VendorRating,
};
use crate::domain::vendor::{
    NewVendor as DomainNewVendor, Vendor as DomainVendor, VendorUpdate as DomainVendorUpdate,
};

/// Diesel model representing the `vendors` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vendors)]
pub struct Vendor {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: String,
    pub rating: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Vendor`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::vendors)]
pub struct NewVendor {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Profile changeset; a missing description clears the column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::vendors)]
#[diesel(treat_none_as_null = true)]
pub struct VendorChangeset {
    pub name: String,
    pub description: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Vendor> for DomainVendor {
    type Error = TypeConstraintError;

    fn try_from(vendor: Vendor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: vendor.id.try_into()?,
            user_id: UserSubject::new(vendor.user_id)?,
            name: VendorName::new(vendor.name)?,
            description: vendor
                .description
                .filter(|d| !d.trim().is_empty())
                .map(VendorDescription::new)
                .transpose()?,
            contact_name: ContactName::new(vendor.contact_name)?,
            contact_email: ContactEmail::new(vendor.contact_email)?,
            contact_phone: ContactPhone::new(vendor.contact_phone)?,
            location: Location::new(vendor.location)?,
            rating: vendor.rating.map(VendorRating::new).transpose()?,
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        })
    }
}

impl From<DomainNewVendor> for NewVendor {
    fn from(vendor: DomainNewVendor) -> Self {
        Self {
            user_id: vendor.user_id.into_inner(),
            name: vendor.name.into_inner(),
            description: vendor.description.map(VendorDescription::into_inner),
            contact_name: vendor.contact_name.into_inner(),
            contact_email: vendor.contact_email.into_inner(),
            contact_phone: vendor.contact_phone.into_inner(),
            location: vendor.location.into_inner(),
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}

impl From<DomainVendorUpdate> for VendorChangeset {
    fn from(update: DomainVendorUpdate) -> Self {
        Self {
            name: update.name.into_inner(),
            description: update.description.map(VendorDescription::into_inner),
            contact_name: update.contact_name.into_inner(),
            contact_email: update.contact_email.into_inner(),
            contact_phone: update.contact_phone.into_inner(),
            location: update.location.into_inner(),
            updated_at: update.updated_at,
        }
    }
}
