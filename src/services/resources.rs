use chrono::Utc;
use serde::Serialize;

use crate::domain::aggregation::{RequestLine, aggregate};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::resource::Resource;
use crate::domain::resource_request::NewResourceRequest;
use crate::domain::types::ResourceId;
use crate::domain::vendor::Vendor;
use crate::forms::resources::ResourceFormPayload;
use crate::repository::{
    ResourceReader, ResourceRequestWriter, ResourceWriter, VendorReader,
};

use super::{ServiceError, ServiceResult, current_vendor};

/// Resource details page data.
#[derive(Debug, Serialize)]
pub struct ResourceDetails {
    pub resource: Resource,
    pub vendor: Option<Vendor>,
    /// Preview of the lines a request would create.
    pub lines: Vec<RequestLine>,
    pub is_owner: bool,
}

fn load_resource<R>(resource_id: i32, repo: &R) -> ServiceResult<Resource>
where
    R: ResourceReader,
{
    let resource_id = ResourceId::new(resource_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_resource_by_id(resource_id) {
        Ok(Some(resource)) => Ok(resource),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Splits a resource into request lines for display or persistence.
pub fn resource_lines<R>(resource_id: i32, repo: &R) -> ServiceResult<Vec<RequestLine>>
where
    R: ResourceReader,
{
    let resource = load_resource(resource_id, repo)?;
    aggregate(&resource).map_err(|e| {
        log::error!("Failed to aggregate resource {}: {e}", resource.id);
        ServiceError::Internal
    })
}

pub fn show_resource<R>(
    resource_id: i32,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<ResourceDetails>
where
    R: ResourceReader + VendorReader,
{
    let resource = load_resource(resource_id, repo)?;

    let vendor = match repo.get_vendor_by_id(resource.vendor_id) {
        Ok(vendor) => vendor,
        Err(e) => {
            log::error!("Failed to get vendor: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let lines = aggregate(&resource).map_err(|e| {
        log::error!("Failed to aggregate resource {}: {e}", resource.id);
        ServiceError::Internal
    })?;

    let is_owner = vendor
        .as_ref()
        .is_some_and(|v| v.user_id.as_str() == user.sub);

    Ok(ResourceDetails {
        resource,
        vendor,
        lines,
        is_owner,
    })
}

/// Records a pending request for every line of the resource.
///
/// All lines are stored in one transaction. Returns the number of lines.
pub fn request_resource<R>(
    resource_id: i32,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<usize>
where
    R: ResourceReader + ResourceRequestWriter,
{
    let user_id = user.subject()?;
    let resource = load_resource(resource_id, repo)?;

    let lines = aggregate(&resource).map_err(|e| {
        log::error!("Failed to aggregate resource {}: {e}", resource.id);
        ServiceError::Internal
    })?;

    let now = Utc::now().naive_utc();
    let requests = lines
        .into_iter()
        .map(|line| NewResourceRequest::from_line(line, &resource, user_id.clone(), now))
        .collect::<Result<Vec<_>, _>>()?;

    match repo.create_requests(&requests) {
        Ok(count) => {
            log::info!(
                "Recorded {count} request line(s) for resource {} from {}",
                resource.id,
                user.sub
            );
            Ok(count)
        }
        Err(e) => {
            log::error!("Failed to create resource requests: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Publishes a listing under the caller's vendor profile.
pub fn add_resource<R>(
    payload: ResourceFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Resource>
where
    R: VendorReader + ResourceWriter,
{
    let vendor = current_vendor(user, repo)?.ok_or(ServiceError::Unauthorized)?;

    match repo.create_resource(&payload.into_new_resource(vendor.id)) {
        Ok(resource) => Ok(resource),
        Err(e) => {
            log::error!("Failed to create resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Updates one of the caller's listings.
pub fn update_resource<R>(
    resource_id: i32,
    payload: ResourceFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<()>
where
    R: VendorReader + ResourceWriter,
{
    let vendor = current_vendor(user, repo)?.ok_or(ServiceError::Unauthorized)?;
    let resource_id = ResourceId::new(resource_id).map_err(|_| ServiceError::NotFound)?;

    match repo.update_resource(resource_id, vendor.id, &payload.into_resource_update()) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Deletes one of the caller's listings.
pub fn delete_resource<R>(resource_id: i32, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: VendorReader + ResourceWriter,
{
    let vendor = current_vendor(user, repo)?.ok_or(ServiceError::Unauthorized)?;
    let resource_id = ResourceId::new(resource_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_resource(resource_id, vendor.id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}
