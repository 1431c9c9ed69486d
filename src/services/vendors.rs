use serde::Serialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::resource::Resource;
use crate::domain::resource_request::ResourceRequest;
use crate::domain::vendor::Vendor;
use crate::forms::vendors::VendorFormPayload;
use crate::repository::{
    ResourceListQuery, ResourceReader, ResourceRequestReader, VendorReader, VendorWriter,
};

use super::{ServiceError, ServiceResult, current_vendor};

/// Vendor dashboard data.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub vendor: Vendor,
    pub resources: Vec<Resource>,
    pub requests: Vec<ResourceRequest>,
}

/// Returns the caller's vendor profile; `None` means the portal should show
/// the registration form.
pub fn show_portal<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Option<Vendor>>
where
    R: VendorReader,
{
    current_vendor(user, repo)
}

/// Creates the caller's vendor profile. A user may own only one.
pub fn register_vendor<R>(
    payload: VendorFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Vendor>
where
    R: VendorReader + VendorWriter,
{
    if current_vendor(user, repo)?.is_some() {
        return Err(ServiceError::Form(
            "You already have a vendor profile.".to_string(),
        ));
    }

    let new_vendor = payload.into_new_vendor(user.subject()?);
    match repo.create_vendor(&new_vendor) {
        Ok(vendor) => {
            log::info!("Registered vendor {} for {}", vendor.id, user.sub);
            Ok(vendor)
        }
        Err(e) => {
            log::error!("Failed to create vendor: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_vendor<R>(
    payload: VendorFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Vendor>
where
    R: VendorReader + VendorWriter,
{
    let vendor = current_vendor(user, repo)?.ok_or(ServiceError::NotFound)?;

    match repo.update_vendor(vendor.id, &payload.into_vendor_update()) {
        Ok(vendor) => Ok(vendor),
        Err(e) => {
            log::error!("Failed to update vendor: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The caller's own listings together with the requests they received.
pub fn show_dashboard<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Dashboard>
where
    R: VendorReader + ResourceReader + ResourceRequestReader,
{
    let vendor = current_vendor(user, repo)?.ok_or(ServiceError::NotFound)?;

    let resources = match repo.list_resources(ResourceListQuery::default().vendor(vendor.id)) {
        Ok((_total, resources)) => resources,
        Err(e) => {
            log::error!("Failed to list vendor resources: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let requests = match repo.list_requests_for_vendor(vendor.id) {
        Ok(requests) => requests,
        Err(e) => {
            log::error!("Failed to list vendor requests: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(Dashboard {
        vendor,
        resources,
        requests,
    })
}
