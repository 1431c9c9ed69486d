//! Diesel row types and their conversions to and from domain entities.

#[cfg(feature = "server")]
pub mod config;
pub mod resource;
pub mod resource_request;
pub mod vendor;
