//! Business logic behind the HTTP handlers.
//!
//! Services receive the acting user and a repository explicitly, log
//! repository failures and translate them into [`ServiceError`].

use crate::domain::auth::AuthenticatedUser;
use crate::domain::vendor::Vendor;
use crate::repository::VendorReader;

pub mod api;
pub mod errors;
pub mod main;
pub mod resources;
pub mod vendors;

pub use errors::{ServiceError, ServiceResult};

/// Vendor profile owned by `user`, if any.
pub(crate) fn current_vendor<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Option<Vendor>>
where
    R: VendorReader,
{
    let subject = user.subject().map_err(|e| {
        log::error!("Invalid subject in user context: {e}");
        ServiceError::Internal
    })?;

    match repo.get_vendor_by_user(&subject) {
        Ok(vendor) => Ok(vendor),
        Err(e) => {
            log::error!("Failed to get vendor for user: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::auth::AuthenticatedUser;

    pub fn sample_user(sub: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: sub.into(),
            email: "test@example.com".into(),
            name: "Test".into(),
        }
    }
}
