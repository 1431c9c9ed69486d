use chrono::{Duration, Utc};
use diesel::prelude::*;
use vendor_connect::domain::aggregation::aggregate;
use vendor_connect::domain::filter::{FilterCriteria, filter};
use vendor_connect::domain::resource::{NewResource, ResourceUpdate};
use vendor_connect::domain::resource_request::NewResourceRequest;
use vendor_connect::domain::specification::Specification;
use vendor_connect::domain::types::{
    Availability, ContactEmail, ContactName, ContactPhone, ImageUrl, Location, ResourceCategory,
    ResourceDescription, ResourcePrice, ResourceTitle, ResourceUnit, UserSubject, VendorId,
    VendorName,
};
use vendor_connect::domain::vendor::{NewVendor, Vendor, VendorUpdate};
use vendor_connect::repository::{
    DieselRepository, ResourceListQuery, ResourceReader, ResourceRequestReader,
    ResourceRequestWriter, ResourceWriter, VendorReader, VendorWriter,
};
use vendor_connect::schema::resources;

mod common;

fn new_vendor(user_id: &str) -> NewVendor {
    let now = Utc::now().naive_utc();
    NewVendor {
        user_id: UserSubject::new(user_id).expect("valid subject"),
        name: VendorName::new("Builders Supply Co.").expect("valid name"),
        description: None,
        contact_name: ContactName::new("John Smith").expect("valid contact"),
        contact_email: ContactEmail::new("john@builderssupply.com").expect("valid email"),
        contact_phone: ContactPhone::new("555-123-4567").expect("valid phone"),
        location: Location::new("Chicago, IL").expect("valid location"),
        created_at: now,
        updated_at: now,
    }
}

fn new_resource(
    vendor_id: VendorId,
    title: &str,
    category: ResourceCategory,
    price: f64,
    age_minutes: i64,
) -> NewResource {
    let created_at = Utc::now().naive_utc() - Duration::minutes(age_minutes);
    NewResource {
        vendor_id,
        title: ResourceTitle::new(title).expect("valid title"),
        description: ResourceDescription::new("Delivered to site on request").expect("valid"),
        category,
        price: ResourcePrice::new(price).expect("valid price"),
        unit: ResourceUnit::Each,
        availability: Availability::new("In stock").expect("valid availability"),
        image_url: None,
        featured: false,
        specification: None,
        created_at,
        updated_at: created_at,
    }
}

fn register(repo: &DieselRepository, user_id: &str) -> Vendor {
    repo.create_vendor(&new_vendor(user_id))
        .expect("should create vendor")
}

#[test]
fn vendor_crud() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let vendor = register(&repo, "user-1");
    assert!(vendor.rating.is_none());

    let found = repo
        .get_vendor_by_user(&UserSubject::new("user-1").unwrap())
        .expect("should query vendor")
        .expect("vendor should exist");
    assert_eq!(found.id, vendor.id);

    let update = VendorUpdate {
        name: VendorName::new("Stone Works").unwrap(),
        description: None,
        contact_name: ContactName::new("Jane Doe").unwrap(),
        contact_email: ContactEmail::new("jane@example.com").unwrap(),
        contact_phone: ContactPhone::new("555-987-6543").unwrap(),
        location: Location::new("Denver, CO").unwrap(),
        updated_at: Utc::now().naive_utc(),
    };
    let updated = repo
        .update_vendor(vendor.id, &update)
        .expect("should update vendor");
    assert_eq!(updated.name.as_str(), "Stone Works");

    assert!(
        repo.get_vendor_by_user(&UserSubject::new("user-2").unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn one_vendor_per_user() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    register(&repo, "user-1");
    assert!(repo.create_vendor(&new_vendor("user-1")).is_err());
}

#[test]
fn resources_round_trip_with_ordered_specification() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let vendor = register(&repo, "user-1");

    let mut resource = new_resource(vendor.id, "Masonry Kit", ResourceCategory::Material, 150.0, 0);
    resource.specification = Some(
        Specification::from_pairs([("Sand", 2), ("Brick", 10), ("Cement", 5)]).unwrap(),
    );
    resource.image_url = Some(ImageUrl::new("https://example.com/kit.png").unwrap());

    let created = repo.create_resource(&resource).expect("should create");
    let loaded = repo
        .get_resource_by_id(created.id)
        .expect("should query")
        .expect("resource should exist");

    assert_eq!(loaded, created);
    let names: Vec<String> = loaded
        .specification
        .as_ref()
        .unwrap()
        .iter()
        .map(|e| e.item.to_string())
        .collect();
    assert_eq!(names, vec!["Sand", "Brick", "Cement"]);

    let lines = aggregate(&loaded).expect("should aggregate");
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.cost_share == 50.0));
}

#[test]
fn list_resources_orders_newest_first_and_scopes_vendor() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let first = register(&repo, "user-1");
    let second = register(&repo, "user-2");

    for resource in [
        new_resource(first.id, "Red Brick Pallet", ResourceCategory::Material, 450.0, 30),
        new_resource(second.id, "Excavator Rental", ResourceCategory::Equipment, 1200.0, 20),
        new_resource(first.id, "Portland Cement", ResourceCategory::Material, 12.5, 10),
    ] {
        repo.create_resource(&resource).expect("should create");
    }

    let (total, all) = repo
        .list_resources(ResourceListQuery::default())
        .expect("should list");
    assert_eq!(total, 3);
    let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Portland Cement", "Excavator Rental", "Red Brick Pallet"]
    );

    let (total, own) = repo
        .list_resources(ResourceListQuery::default().vendor(first.id))
        .expect("should list");
    assert_eq!(total, 2);
    let own_titles: Vec<&str> = own.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(own_titles, vec!["Portland Cement", "Red Brick Pallet"]);

    let cheap = filter(&all, &FilterCriteria::default().max_price(500.0));
    assert_eq!(cheap.len(), 2);
}

#[test]
fn invalid_rows_are_skipped_in_listing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let vendor = register(&repo, "user-1");

    let good = repo
        .create_resource(&new_resource(vendor.id, "Boom Lift", ResourceCategory::Equipment, 350.0, 0))
        .expect("should create");
    let bad = repo
        .create_resource(&new_resource(vendor.id, "Mystery", ResourceCategory::Other, 1.0, 5))
        .expect("should create");

    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    diesel::update(resources::table.filter(resources::id.eq(bad.id.get())))
        .set(resources::category.eq("Tools"))
        .execute(&mut conn)
        .expect("should corrupt row");

    let (total, items) = repo
        .list_resources(ResourceListQuery::default())
        .expect("listing should survive a bad row");
    assert_eq!(total, 1);
    assert_eq!(items[0].id, good.id);
}

#[test]
fn updates_and_deletes_are_owner_scoped() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let owner = register(&repo, "user-1");
    let other = register(&repo, "user-2");

    let resource = repo
        .create_resource(&new_resource(owner.id, "Boom Lift", ResourceCategory::Equipment, 350.0, 0))
        .expect("should create");

    let update = ResourceUpdate {
        title: ResourceTitle::new("Boom Lift 60ft").unwrap(),
        description: resource.description.clone(),
        category: ResourceCategory::Equipment,
        price: ResourcePrice::new(400.0).unwrap(),
        unit: ResourceUnit::Day,
        availability: resource.availability.clone(),
        image_url: None,
        specification: Some(Specification::from_pairs([("Harness", 2)]).unwrap()),
        updated_at: Utc::now().naive_utc(),
    };

    assert_eq!(repo.update_resource(resource.id, other.id, &update).unwrap(), 0);
    assert_eq!(repo.update_resource(resource.id, owner.id, &update).unwrap(), 1);

    let loaded = repo.get_resource_by_id(resource.id).unwrap().unwrap();
    assert_eq!(loaded.title.as_str(), "Boom Lift 60ft");
    assert_eq!(loaded.unit, ResourceUnit::Day);
    assert_eq!(loaded.specification.unwrap().len(), 1);

    assert_eq!(repo.delete_resource(resource.id, other.id).unwrap(), 0);
    assert_eq!(repo.delete_resource(resource.id, owner.id).unwrap(), 1);
    assert!(repo.get_resource_by_id(resource.id).unwrap().is_none());
}

#[test]
fn requests_are_stored_and_survive_listing_deletion() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let vendor = register(&repo, "user-1");

    let mut kit = new_resource(vendor.id, "Masonry Kit", ResourceCategory::Material, 100.0, 0);
    kit.specification =
        Some(Specification::from_pairs([("Brick", 10), ("Sand", 2), ("Safety Vest", 4)]).unwrap());
    let kit = repo.create_resource(&kit).expect("should create");

    let buyer = UserSubject::new("buyer-1").unwrap();
    let now = Utc::now().naive_utc();
    let requests = aggregate(&kit)
        .unwrap()
        .into_iter()
        .map(|line| NewResourceRequest::from_line(line, &kit, buyer.clone(), now))
        .collect::<Result<Vec<_>, _>>()
        .expect("valid lines");

    assert_eq!(repo.create_requests(&requests).unwrap(), 3);

    let stored = repo.list_requests_for_vendor(vendor.id).unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|r| r.cost == 33.33));
    assert_eq!(stored[0].name.as_str(), "Brick");
    assert_eq!(stored[2].request_type, ResourceCategory::Other);

    repo.delete_resource(kit.id, vendor.id).unwrap();

    let stored = repo.list_requests_for_vendor(vendor.id).unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|r| r.resource_id.is_none()));
}
