use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ContactEmail, ContactName, ContactPhone, Location, UserSubject, VendorDescription, VendorId,
    VendorName, VendorRating,
};

/// A company offering resources on the marketplace.
///
/// Each authenticated user owns at most one vendor profile, linked through
/// `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub user_id: UserSubject,
    pub name: VendorName,
    pub description: Option<VendorDescription>,
    pub contact_name: ContactName,
    pub contact_email: ContactEmail,
    pub contact_phone: ContactPhone,
    pub location: Location,
    pub rating: Option<VendorRating>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Vendor`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVendor {
    pub user_id: UserSubject,
    pub name: VendorName,
    pub description: Option<VendorDescription>,
    pub contact_name: ContactName,
    pub contact_email: ContactEmail,
    pub contact_phone: ContactPhone,
    pub location: Location,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Profile fields a vendor may change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorUpdate {
    pub name: VendorName,
    pub description: Option<VendorDescription>,
    pub contact_name: ContactName,
    pub contact_email: ContactEmail,
    pub contact_phone: ContactPhone,
    pub location: Location,
    pub updated_at: NaiveDateTime,
}
