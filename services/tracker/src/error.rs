use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use shelf_domain::favourite::FavouriteLimitExceeded;
use shelf_domain::media::UnknownMediaKind;

/// Tracker service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error("invalid media type")]
    InvalidMediaType,
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("shows require totalEpisodes")]
    ShowMissingEpisodes,
    #[error("novels require totalPages")]
    NovelMissingPages,
    #[error("invalid value for field: {0}")]
    InvalidField(&'static str),
    #[error("media already tracked")]
    AlreadyTracked,
    #[error("content not found")]
    ContentNotFound,
    #[error("media wrapper not found")]
    MediaWrapperNotFound,
    #[error("content name already taken")]
    ContentNameTaken,
    #[error("no favourites found")]
    FavouritesNotFound,
    #[error("favourite limit reached")]
    FavouriteLimitExceeded,
    #[error("user not found")]
    UserNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("note not found")]
    NoteNotFound,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidMediaType => "INVALID_MEDIA_TYPE",
            Self::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            Self::ShowMissingEpisodes => "SHOW_MISSING_EPISODES",
            Self::NovelMissingPages => "NOVEL_MISSING_PAGES",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::AlreadyTracked => "ALREADY_TRACKED",
            Self::ContentNotFound => "CONTENT_NOT_FOUND",
            Self::MediaWrapperNotFound => "MEDIA_WRAPPER_NOT_FOUND",
            Self::ContentNameTaken => "CONTENT_NAME_TAKEN",
            Self::FavouritesNotFound => "FAVOURITES_NOT_FOUND",
            Self::FavouriteLimitExceeded => "FAVOURITE_LIMIT_EXCEEDED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NoteNotFound => "NOTE_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<UnknownMediaKind> for TrackerServiceError {
    fn from(_: UnknownMediaKind) -> Self {
        Self::InvalidMediaType
    }
}

impl From<FavouriteLimitExceeded> for TrackerServiceError {
    fn from(_: FavouriteLimitExceeded) -> Self {
        Self::FavouriteLimitExceeded
    }
}

impl IntoResponse for TrackerServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidMediaType
            | Self::MissingRequiredField(_)
            | Self::ShowMissingEpisodes
            | Self::NovelMissingPages
            | Self::InvalidField(_)
            | Self::AlreadyTracked
            | Self::FavouriteLimitExceeded
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::ContentNotFound
            | Self::MediaWrapperNotFound
            | Self::FavouritesNotFound
            | Self::UserNotFound
            | Self::NoteNotFound => StatusCode::NOT_FOUND,
            Self::ContentNameTaken | Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; the trace layer already records them.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
