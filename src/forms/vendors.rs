use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{
    ContactEmail, ContactName, ContactPhone, Location, TypeConstraintError, UserSubject,
    VendorDescription, VendorName,
};
use crate::domain::vendor::{NewVendor, VendorUpdate};
use crate::forms::empty_string_as_none;

/// Vendor profile form, shared by registration and profile update.
#[derive(Deserialize, Validate)]
pub struct VendorForm {
    #[validate(length(min = 2))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 10))]
    pub description: Option<String>,
    #[validate(length(min = 2))]
    pub contact_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(length(min = 10))]
    pub contact_phone: String,
    #[validate(length(min = 2))]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VendorFormPayload {
    pub name: VendorName,
    pub description: Option<VendorDescription>,
    pub contact_name: ContactName,
    pub contact_email: ContactEmail,
    pub contact_phone: ContactPhone,
    pub location: Location,
}

impl VendorFormPayload {
    pub fn into_new_vendor(self, user_id: UserSubject) -> NewVendor {
        let now = Utc::now().naive_utc();
        NewVendor {
            user_id,
            name: self.name,
            description: self.description,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            location: self.location,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_vendor_update(self) -> VendorUpdate {
        VendorUpdate {
            name: self.name,
            description: self.description,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            location: self.location,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum VendorFormError {
    #[error("Vendor form validation failed: {0}")]
    Validation(String),
    #[error("Vendor form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for VendorFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for VendorFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<VendorForm> for VendorFormPayload {
    type Error = VendorFormError;

    fn try_from(value: VendorForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: VendorName::new(value.name)?,
            description: value.description.map(VendorDescription::new).transpose()?,
            contact_name: ContactName::new(value.contact_name)?,
            contact_email: ContactEmail::new(value.contact_email)?,
            contact_phone: ContactPhone::new(value.contact_phone)?,
            location: Location::new(value.location)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> VendorForm {
        VendorForm {
            name: "Builders Supply Co.".into(),
            description: None,
            contact_name: "John Smith".into(),
            contact_email: "john@builderssupply.com".into(),
            contact_phone: "555-123-4567".into(),
            location: "Chicago, IL".into(),
        }
    }

    #[test]
    fn valid_form_converts_to_payload() {
        let payload = VendorFormPayload::try_from(form()).unwrap();
        assert_eq!(payload.name.as_str(), "Builders Supply Co.");
        assert!(payload.description.is_none());
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut form = form();
        form.contact_phone = "555".into();
        assert!(matches!(
            VendorFormPayload::try_from(form),
            Err(VendorFormError::Validation(_))
        ));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut form = form();
        form.contact_email = "not-an-email".into();
        assert!(VendorFormPayload::try_from(form).is_err());
    }

    #[test]
    fn short_description_is_rejected() {
        let mut form = form();
        form.description = Some("Bricks".into());
        assert!(VendorFormPayload::try_from(form).is_err());
    }
}
