pub mod media;
pub mod note;
pub mod password;
pub mod user;
