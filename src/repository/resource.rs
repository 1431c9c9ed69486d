use diesel::prelude::*;

use crate::domain::resource::{NewResource, Resource, ResourceUpdate};
use crate::domain::types::{ResourceId, VendorId};
use crate::models::resource::{
    NewResource as DbNewResource, Resource as DbResource,
    ResourceChangeset as DbResourceChangeset,
};
use crate::repository::{
    DieselRepository, RepositoryResult, ResourceListQuery, ResourceReader, ResourceWriter,
};

/// Converts loaded rows, dropping those that no longer satisfy the domain
/// constraints so one bad row cannot take the catalog down.
fn into_valid_resources(rows: Vec<DbResource>) -> Vec<Resource> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match Resource::try_from(row) {
                Ok(resource) => Some(resource),
                Err(e) => {
                    log::warn!("Skipping invalid resource {id}: {e}");
                    None
                }
            }
        })
        .collect()
}

impl ResourceReader for DieselRepository {
    fn list_resources(
        &self,
        query: ResourceListQuery,
    ) -> RepositoryResult<(usize, Vec<Resource>)> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let mut items = resources::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(vendor_id) = query.vendor_id {
            items = items.filter(resources::vendor_id.eq(vendor_id.get()));
        }

        let rows = items
            .order((resources::created_at.desc(), resources::id.desc()))
            .load::<DbResource>(&mut conn)?;

        let items = into_valid_resources(rows);

        Ok((items.len(), items))
    }

    fn get_resource_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let resource = resources::table
            .filter(resources::id.eq(id.get()))
            .first::<DbResource>(&mut conn)
            .optional()?;

        Ok(resource.map(TryInto::try_into).transpose()?)
    }
}

impl ResourceWriter for DieselRepository {
    fn create_resource(&self, resource: &NewResource) -> RepositoryResult<Resource> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let db_resource: DbNewResource = resource.clone().try_into()?;

        let created = diesel::insert_into(resources::table)
            .values(db_resource)
            .returning(DbResource::as_returning())
            .get_result::<DbResource>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_resource(
        &self,
        id: ResourceId,
        vendor_id: VendorId,
        update: &ResourceUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let changeset: DbResourceChangeset = update.clone().try_into()?;

        let affected = diesel::update(
            resources::table
                .filter(resources::id.eq(id.get()))
                .filter(resources::vendor_id.eq(vendor_id.get())),
        )
        .set(changeset)
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_resource(&self, id: ResourceId, vendor_id: VendorId) -> RepositoryResult<usize> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let affected = diesel::delete(
            resources::table
                .filter(resources::id.eq(id.get()))
                .filter(resources::vendor_id.eq(vendor_id.get())),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
