use crate::domain::aggregation::RequestLine;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::resource::Resource;
use crate::forms::filter::CatalogQuery;
use crate::pagination::Paginated;
use crate::repository::{ResourceReader, VendorReader};

use super::main::list_catalog;
use super::resources::resource_lines;
use super::{ServiceResult, current_vendor};

/// Filtered catalog page for the JSON API.
pub fn api_list_resources<R>(
    query: &CatalogQuery,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Paginated<Resource>>
where
    R: ResourceReader + VendorReader,
{
    let own_vendor = if query.wants_own_resources() {
        current_vendor(user, repo)?.map(|v| v.id)
    } else {
        None
    };

    list_catalog(&query.to_criteria(own_vendor), query.page(), repo)
}

/// Request lines a resource would produce, without storing anything.
pub fn api_resource_lines<R>(resource_id: i32, repo: &R) -> ServiceResult<Vec<RequestLine>>
where
    R: ResourceReader,
{
    resource_lines(resource_id, repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::specification::Specification;
    use crate::domain::types::ResourceCategory;
    use crate::repository::test::{TestRepository, sample_resource};
    use crate::services::ServiceError;
    use crate::services::test_support::sample_user;

    #[test]
    fn filters_by_price_window() {
        let repo = TestRepository::new(
            vec![],
            vec![
                sample_resource(1, 1, "Boom Lift", ResourceCategory::Equipment, 350.0),
                sample_resource(2, 1, "Excavator Rental", ResourceCategory::Equipment, 1200.0),
            ],
        );
        let query = CatalogQuery {
            min_price: Some("350".into()),
            max_price: Some("350".into()),
            ..Default::default()
        };

        let page = api_list_resources(&query, &sample_user("buyer"), &repo).unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, 1);
    }

    #[test]
    fn lines_serialize_with_cost_share() {
        let mut resource = sample_resource(1, 1, "Masonry Kit", ResourceCategory::Material, 150.0);
        resource.specification =
            Some(Specification::from_pairs([("Brick", 10), ("Cement", 5)]).unwrap());
        let repo = TestRepository::new(vec![], vec![resource]);

        let lines = api_resource_lines(1, &repo).unwrap();
        let json = serde_json::to_value(&lines).unwrap();

        assert_eq!(json[0]["name"], "Brick");
        assert_eq!(json[0]["category_guess"], "Material");
        assert_eq!(json[1]["cost_share"], 75.0);
        assert_eq!(json[1]["unit"], "Each");
    }

    #[test]
    fn missing_resource_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(api_resource_lines(3, &repo), Err(ServiceError::NotFound));
    }
}
