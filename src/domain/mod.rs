//! Domain entities and the pure catalog logic built on them.

pub mod aggregation;
pub mod auth;
pub mod classification;
pub mod filter;
pub mod resource;
pub mod resource_request;
pub mod specification;
pub mod types;
pub mod vendor;
