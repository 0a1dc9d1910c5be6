//! Domain types shared across Shelf crates.
//!
//! Pure types and rules with no framework or database dependencies.

pub mod favourite;
pub mod media;
