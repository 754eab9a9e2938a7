//! Landex domain logic.
//!
//! Everything in this crate is pure: the section catalog, the collection
//! codec, the reconstruction pipeline, and the presentation helpers have
//! no knowledge of the database or the HTTP layer.

pub mod codec;
pub mod error;
pub mod presentation;
pub mod render;
pub mod sections;
pub mod types;
