//! sea-orm entities for the tracker database.

pub mod media;
pub mod movies;
pub mod notes;
pub mod novels;
pub mod shows;
pub mod user_favourites;
pub mod users;
