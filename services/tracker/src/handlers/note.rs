use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use shelf_auth_types::identity::Identity;

use crate::domain::types::Note;
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::note::{CreateNoteUseCase, DeleteNoteUseCase, ListNotesUseCase};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: i32,
    pub user_id: i32,
    pub body: String,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            user_id: note.user_id,
            body: note.body,
            created_at: note.created_at,
        }
    }
}

// ── POST /notes ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateNoteRequest {
    pub body: Option<String>,
}

pub async fn create_note(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), TrackerServiceError> {
    let usecase = CreateNoteUseCase {
        repo: state.note_repo(),
    };
    let note = usecase
        .execute(identity.user_id, body.body.as_deref().unwrap_or_default())
        .await?;
    Ok((StatusCode::CREATED, Json(note.into())))
}

// ── GET /notes?user-id= ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct NoteListQuery {
    pub user_id: Option<i32>,
}

pub async fn list_notes(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<NoteResponse>>, TrackerServiceError> {
    let query: NoteListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| TrackerServiceError::InvalidField("user-id"))?
        .unwrap_or_default();
    let user_id = query
        .user_id
        .ok_or(TrackerServiceError::MissingRequiredField("user-id"))?;

    let usecase = ListNotesUseCase {
        repo: state.note_repo(),
    };
    let notes = usecase.execute(user_id).await?;
    Ok(Json(notes.into_iter().map(Into::into).collect()))
}

// ── DELETE /notes/{id} ───────────────────────────────────────────────────────

pub async fn delete_note(
    identity: Identity,
    State(state): State<AppState>,
    Path(note_id): Path<i32>,
) -> Result<StatusCode, TrackerServiceError> {
    let usecase = DeleteNoteUseCase {
        repo: state.note_repo(),
    };
    usecase.execute(identity.user_id, note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
