//! Authentication: JWT generation and validation.

pub mod jwt;
