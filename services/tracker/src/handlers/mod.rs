pub mod health;
pub mod media;
pub mod note;
pub mod user;
