//! Auth types shared across Shelf services.
//!
//! Provides JWT issuance/validation and the `Identity` bearer-token extractor.

pub mod identity;
pub mod token;
