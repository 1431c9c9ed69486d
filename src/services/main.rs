use serde::Serialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::filter::{FilterCriteria, filter};
use crate::domain::resource::Resource;
use crate::domain::vendor::Vendor;
use crate::forms::filter::CatalogQuery;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, Pagination};
use crate::repository::{ResourceListQuery, ResourceReader, VendorReader};

use super::{ServiceError, ServiceResult, current_vendor};

/// Everything the catalog page renders.
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    pub resources: Paginated<Resource>,
    pub criteria: FilterCriteria,
    /// The caller's vendor profile, if registered.
    pub vendor: Option<Vendor>,
}

/// Filters the whole catalog (newest first) and returns one page of it.
pub fn list_catalog<R>(
    criteria: &FilterCriteria,
    page: usize,
    repo: &R,
) -> ServiceResult<Paginated<Resource>>
where
    R: ResourceReader,
{
    let catalog = match repo.list_resources(ResourceListQuery::default()) {
        Ok((_total, resources)) => resources,
        Err(e) => {
            log::error!("Failed to list resources: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let matching = filter(&catalog, criteria);
    let total = matching.len();
    let pagination = Pagination {
        page,
        per_page: DEFAULT_ITEMS_PER_PAGE,
    };

    Ok(Paginated::new(
        pagination.apply(matching),
        page,
        total,
        DEFAULT_ITEMS_PER_PAGE,
    ))
}

/// Core business logic for rendering the catalog page.
pub fn show_catalog<R>(
    query: &CatalogQuery,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<CatalogPage>
where
    R: ResourceReader + VendorReader,
{
    let vendor = current_vendor(user, repo)?;
    let criteria = query.to_criteria(vendor.as_ref().map(|v| v.id));
    let resources = list_catalog(&criteria, query.page(), repo)?;

    Ok(CatalogPage {
        resources,
        criteria,
        vendor,
    })
}
