use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::resource::PLACEHOLDER_IMAGE_URL;
use crate::domain::types::{ResourceCategory, ResourceUnit};
use crate::dto::resources::ResourceDto;
use crate::forms::vendors::{VendorForm, VendorFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::vendors::{
    register_vendor as register_vendor_service, show_dashboard as show_dashboard_service,
    show_portal as show_portal_service, update_vendor as update_vendor_service,
};

#[get("/vendor")]
pub async fn show_portal(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_portal_service(&user, repo.get_ref()) {
        Ok(Some(_vendor)) => redirect("/vendor/dashboard"),
        Ok(None) => {
            let context =
                base_context(&flash_messages, &user, "vendor", &server_config.auth_service_url);
            render_template(&tera, "vendors/register.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render vendor portal: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/vendor/register")]
pub async fn register_vendor(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<VendorForm>,
) -> impl Responder {
    let payload: VendorFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/vendor");
        }
    };

    match register_vendor_service(payload, &user, repo.get_ref()) {
        Ok(_) => {
            FlashMessage::success("Vendor profile created.").send();
            redirect("/vendor/dashboard")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/vendor/dashboard")
        }
        Err(err) => {
            log::error!("Failed to register vendor: {err}");
            FlashMessage::error("Failed to create the vendor profile.").send();
            redirect("/vendor")
        }
    }
}

#[post("/vendor/update")]
pub async fn update_vendor(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<VendorForm>,
) -> impl Responder {
    let payload: VendorFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/vendor/dashboard");
        }
    };

    match update_vendor_service(payload, &user, repo.get_ref()) {
        Ok(_) => FlashMessage::success("Vendor profile updated.").send(),
        Err(ServiceError::NotFound) => return redirect("/vendor"),
        Err(err) => {
            log::error!("Failed to update vendor: {err}");
            FlashMessage::error("Failed to update the vendor profile.").send();
        }
    }

    redirect("/vendor/dashboard")
}

#[get("/vendor/dashboard")]
pub async fn show_dashboard(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_dashboard_service(&user, repo.get_ref()) {
        Ok(dashboard) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "dashboard",
                &server_config.auth_service_url,
            );
            let resources = dashboard
                .resources
                .into_iter()
                .map(ResourceDto::from)
                .collect::<Vec<_>>();
            context.insert("vendor", &dashboard.vendor);
            context.insert("resources", &resources);
            context.insert("requests", &dashboard.requests);
            context.insert("categories", ResourceCategory::ALL);
            context.insert("units", ResourceUnit::ALL);
            context.insert("placeholder", PLACEHOLDER_IMAGE_URL);
            render_template(&tera, "vendors/dashboard.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::info("Register as a vendor first.").send();
            redirect("/vendor")
        }
        Err(err) => {
            log::error!("Failed to render dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
