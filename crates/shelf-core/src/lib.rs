//! HTTP and runtime plumbing shared by Shelf services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
