//! Extraction of the signed-in user from the identity cookie.
//!
//! The auth service stores the user as JSON in the identity id.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error};

use crate::domain::auth::AuthenticatedUser;

fn user_from_request(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let identity = req
        .get_identity()
        .map_err(|_| error::ErrorUnauthorized("not signed in"))?;
    let raw = identity.id().map_err(|e| {
        log::warn!("Failed to read identity: {e}");
        error::ErrorUnauthorized("not signed in")
    })?;
    parse_user(&raw).map_err(|e| {
        log::warn!("Malformed identity payload: {e}");
        error::ErrorUnauthorized("not signed in")
    })
}

/// Decodes the JSON payload stored in the identity cookie.
pub fn parse_user(raw: &str) -> Result<AuthenticatedUser, serde_json::Error> {
    serde_json::from_str(raw)
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(user_from_request(req))
    }
}
