use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::ResourceCategory;
use crate::dto::resources::ResourceDto;
use crate::forms::filter::CatalogQuery;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::main::show_catalog as show_catalog_service;

#[get("/")]
pub async fn index(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    query: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_catalog_service(&query, &user, repo.get_ref()) {
        Ok(page) => {
            let mut context =
                base_context(&flash_messages, &user, "index", &server_config.auth_service_url);
            let resources = page
                .resources
                .items
                .into_iter()
                .map(ResourceDto::from)
                .collect::<Vec<_>>();
            context.insert("resources", &resources);
            context.insert("result_count", &page.resources.total);
            context.insert("page", &page.resources.page);
            context.insert("pages", &page.resources.pages);
            context.insert("criteria", &page.criteria);
            context.insert("filters_active", &!page.criteria.is_neutral());
            context.insert("mine", &query.wants_own_resources());
            context.insert("vendor", &page.vendor);
            context.insert("categories", ResourceCategory::ALL);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render catalog: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/logout")]
pub async fn logout(
    identity: Identity,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    identity.logout();
    redirect(&server_config.auth_service_url)
}
