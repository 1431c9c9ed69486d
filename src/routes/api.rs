use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::filter::CatalogQuery;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api::{api_list_resources, api_resource_lines};

#[get("/v1/resources")]
pub async fn api_v1_resources(
    query: web::Query<CatalogQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_list_resources(&query, &user, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list resources: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/resources/{resource_id}/lines")]
pub async fn api_v1_resource_lines(
    resource_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_resource_lines(resource_id.into_inner(), repo.get_ref()) {
        Ok(lines) => HttpResponse::Ok().json(lines),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to build request lines: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
