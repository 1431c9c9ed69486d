//! Flat, template-friendly views of domain entities.

pub mod resources;
