//! HTTP handlers, one module per resource.

pub mod auth;
pub mod landing;
pub mod upload;
