use diesel::prelude::*;

use crate::domain::resource_request::{NewResourceRequest, ResourceRequest};
use crate::domain::types::VendorId;
use crate::models::resource_request::{
    NewResourceRequest as DbNewResourceRequest, ResourceRequest as DbResourceRequest,
};
use crate::repository::{
    DieselRepository, RepositoryResult, ResourceRequestReader, ResourceRequestWriter,
};

impl ResourceRequestReader for DieselRepository {
    fn list_requests_for_vendor(
        &self,
        vendor_id: VendorId,
    ) -> RepositoryResult<Vec<ResourceRequest>> {
        use crate::schema::resource_requests;

        let mut conn = self.conn()?;

        let requests = resource_requests::table
            .filter(resource_requests::vendor_id.eq(vendor_id.get()))
            .order((
                resource_requests::created_at.desc(),
                resource_requests::id.asc(),
            ))
            .load::<DbResourceRequest>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ResourceRequest>, _>>()?;

        Ok(requests)
    }
}

impl ResourceRequestWriter for DieselRepository {
    fn create_requests(&self, requests: &[NewResourceRequest]) -> RepositoryResult<usize> {
        use crate::schema::resource_requests;

        let mut conn = self.conn()?;
        let rows: Vec<DbNewResourceRequest> = requests.iter().map(Into::into).collect();

        let affected = conn.transaction(|conn| {
            diesel::insert_into(resource_requests::table)
                .values(&rows)
                .execute(conn)
        })?;

        Ok(affected)
    }
}
