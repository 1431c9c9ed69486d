use crate::db::{DbConnection, DbPool};
use crate::domain::resource::{NewResource, Resource, ResourceUpdate};
use crate::domain::resource_request::{NewResourceRequest, ResourceRequest};
use crate::domain::types::{ResourceId, UserSubject, VendorId};
use crate::domain::vendor::{NewVendor, Vendor, VendorUpdate};

pub mod errors;
pub mod resource;
pub mod resource_request;
pub mod vendor;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing resources.
///
/// Results are always ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct ResourceListQuery {
    /// Restrict to the listings of one vendor.
    pub vendor_id: Option<VendorId>,
}

impl ResourceListQuery {
    pub fn vendor(mut self, vendor_id: VendorId) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }
}

/// Read-only operations for vendor profiles.
pub trait VendorReader {
    fn get_vendor_by_id(&self, id: VendorId) -> RepositoryResult<Option<Vendor>>;
    /// The profile owned by a user, if they registered one.
    fn get_vendor_by_user(&self, user_id: &UserSubject) -> RepositoryResult<Option<Vendor>>;
}

/// Write operations for vendor profiles.
pub trait VendorWriter {
    fn create_vendor(&self, vendor: &NewVendor) -> RepositoryResult<Vendor>;
    fn update_vendor(&self, id: VendorId, update: &VendorUpdate) -> RepositoryResult<Vendor>;
}

/// Read-only operations for resource listings.
pub trait ResourceReader {
    /// List resources matching the query, newest first, with their count.
    /// Paging is applied by the caller after catalog filtering.
    fn list_resources(&self, query: ResourceListQuery)
    -> RepositoryResult<(usize, Vec<Resource>)>;
    fn get_resource_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>>;
}

/// Write operations for resource listings.
///
/// Updates and deletes are scoped by owner; the returned count is zero when
/// the listing does not belong to `vendor_id`.
pub trait ResourceWriter {
    fn create_resource(&self, resource: &NewResource) -> RepositoryResult<Resource>;
    fn update_resource(
        &self,
        id: ResourceId,
        vendor_id: VendorId,
        update: &ResourceUpdate,
    ) -> RepositoryResult<usize>;
    fn delete_resource(&self, id: ResourceId, vendor_id: VendorId) -> RepositoryResult<usize>;
}

/// Read-only operations for buyer requests.
pub trait ResourceRequestReader {
    /// Requests addressed to a vendor, newest first.
    fn list_requests_for_vendor(&self, vendor_id: VendorId)
    -> RepositoryResult<Vec<ResourceRequest>>;
}

/// Write operations for buyer requests.
pub trait ResourceRequestWriter {
    /// Persist all lines of one request atomically.
    fn create_requests(&self, requests: &[NewResourceRequest]) -> RepositoryResult<usize>;
}
