//! Repository layer: one struct of associated functions per table.

pub mod admin_repo;
pub mod landing_repo;

pub use admin_repo::AdminRepo;
pub use landing_repo::LandingRepo;
