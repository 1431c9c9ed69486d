use diesel::prelude::*;

use crate::domain::types::{UserSubject, VendorId};
use crate::domain::vendor::{NewVendor, Vendor, VendorUpdate};
use crate::models::vendor::{
    NewVendor as DbNewVendor, Vendor as DbVendor, VendorChangeset as DbVendorChangeset,
};
use crate::repository::{DieselRepository, RepositoryResult, VendorReader, VendorWriter};

impl VendorReader for DieselRepository {
    fn get_vendor_by_id(&self, id: VendorId) -> RepositoryResult<Option<Vendor>> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;

        let vendor = vendors::table
            .filter(vendors::id.eq(id.get()))
            .first::<DbVendor>(&mut conn)
            .optional()?;

        Ok(vendor.map(TryInto::try_into).transpose()?)
    }

    fn get_vendor_by_user(&self, user_id: &UserSubject) -> RepositoryResult<Option<Vendor>> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;

        let vendor = vendors::table
            .filter(vendors::user_id.eq(user_id.as_str()))
            .first::<DbVendor>(&mut conn)
            .optional()?;

        Ok(vendor.map(TryInto::try_into).transpose()?)
    }
}

impl VendorWriter for DieselRepository {
    fn create_vendor(&self, vendor: &NewVendor) -> RepositoryResult<Vendor> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;
        let db_vendor: DbNewVendor = vendor.clone().into();

        let created = diesel::insert_into(vendors::table)
            .values(db_vendor)
            .returning(DbVendor::as_returning())
            .get_result::<DbVendor>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_vendor(&self, id: VendorId, update: &VendorUpdate) -> RepositoryResult<Vendor> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;
        let changeset: DbVendorChangeset = update.clone().into();

        let updated = diesel::update(vendors::table.filter(vendors::id.eq(id.get())))
            .set(changeset)
            .returning(DbVendor::as_returning())
            .get_result::<DbVendor>(&mut conn)?;

        Ok(updated.try_into()?)
    }
}
