//! Core library exports for the Vendor Connect marketplace.
//!
//! The `data` feature exposes the domain (catalog filtering, specification
//! aggregation), Diesel models and repositories. The `server` feature adds
//! forms, services and the Actix routes used by the web application.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
