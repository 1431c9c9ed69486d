use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::resources::ResourceDto;
use crate::forms::resources::{ResourceForm, ResourceFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::resources::{
    add_resource as add_resource_service, delete_resource as delete_resource_service,
    request_resource as request_resource_service, show_resource as show_resource_service,
    update_resource as update_resource_service,
};

#[get("/resource/{resource_id}")]
pub async fn show_resource(
    resource_id: web::Path<i32>,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_resource_service(resource_id.into_inner(), &user, repo.get_ref()) {
        Ok(details) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "resource",
                &server_config.auth_service_url,
            );
            context.insert("resource", &ResourceDto::from(details.resource));
            context.insert("vendor", &details.vendor);
            context.insert("lines", &details.lines);
            context.insert("is_owner", &details.is_owner);
            render_template(&tera, "resources/show.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render resource: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/resource/{resource_id}/request")]
pub async fn request_resource(
    resource_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let resource_id = resource_id.into_inner();
    let back = format!("/resource/{resource_id}");

    match request_resource_service(resource_id, &user, repo.get_ref()) {
        Ok(_) => FlashMessage::success("Resource request sent to vendor.").send(),
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to request resource: {err}");
            FlashMessage::error("Failed to send the request.").send();
        }
    }

    redirect(&back)
}

#[post("/vendor/resource/add")]
pub async fn add_resource(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ResourceForm>,
) -> impl Responder {
    let payload: ResourceFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/vendor/dashboard");
        }
    };

    match add_resource_service(payload, &user, repo.get_ref()) {
        Ok(resource) => {
            FlashMessage::success(format!("Resource '{}' added.", resource.title)).send()
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Register as a vendor to list resources.").send();
            return redirect("/vendor");
        }
        Err(err) => {
            log::error!("Failed to add resource: {err}");
            FlashMessage::error("Failed to add the resource.").send();
        }
    }

    redirect("/vendor/dashboard")
}

#[post("/vendor/resource/{resource_id}/update")]
pub async fn update_resource(
    resource_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ResourceForm>,
) -> impl Responder {
    let payload: ResourceFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/vendor/dashboard");
        }
    };

    match update_resource_service(resource_id.into_inner(), payload, &user, repo.get_ref()) {
        Ok(()) => FlashMessage::success("Resource updated.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/vendor"),
        Err(ServiceError::NotFound) => FlashMessage::error("Resource not found.").send(),
        Err(err) => {
            log::error!("Failed to update resource: {err}");
            FlashMessage::error("Failed to update the resource.").send();
        }
    }

    redirect("/vendor/dashboard")
}

#[post("/vendor/resource/{resource_id}/delete")]
pub async fn delete_resource(
    resource_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_resource_service(resource_id.into_inner(), &user, repo.get_ref()) {
        Ok(()) => FlashMessage::success("Resource deleted.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/vendor"),
        Err(ServiceError::NotFound) => FlashMessage::error("Resource not found.").send(),
        Err(err) => {
            log::error!("Failed to delete resource: {err}");
            FlashMessage::error("Failed to delete the resource.").send();
        }
    }

    redirect("/vendor/dashboard")
}
