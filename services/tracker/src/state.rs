use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use shelf_auth_types::identity::JwtSecret;

use crate::infra::db::{DbMediaRepository, DbNoteRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn media_repo(&self) -> DbMediaRepository {
        DbMediaRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn note_repo(&self) -> DbNoteRepository {
        DbNoteRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
