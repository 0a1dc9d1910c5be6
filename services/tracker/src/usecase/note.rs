use tracing::info;

use crate::domain::repository::NoteRepository;
use crate::domain::types::{Note, validate_note_body};
use crate::error::TrackerServiceError;

// ── CreateNote ───────────────────────────────────────────────────────────────

pub struct CreateNoteUseCase<R: NoteRepository> {
    pub repo: R,
}

impl<R: NoteRepository> CreateNoteUseCase<R> {
    pub async fn execute(&self, user_id: i32, body: &str) -> Result<Note, TrackerServiceError> {
        let body = validate_note_body(body)?;
        let note = self.repo.create(user_id, &body).await?;
        info!(user_id, note_id = note.id, "note created");
        Ok(note)
    }
}

// ── ListNotes ────────────────────────────────────────────────────────────────

pub struct ListNotesUseCase<R: NoteRepository> {
    pub repo: R,
}

impl<R: NoteRepository> ListNotesUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<Vec<Note>, TrackerServiceError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── DeleteNote ───────────────────────────────────────────────────────────────

pub struct DeleteNoteUseCase<R: NoteRepository> {
    pub repo: R,
}

impl<R: NoteRepository> DeleteNoteUseCase<R> {
    pub async fn execute(&self, user_id: i32, note_id: i32) -> Result<(), TrackerServiceError> {
        if !self.repo.delete_owned(note_id, user_id).await? {
            return Err(TrackerServiceError::NoteNotFound);
        }
        Ok(())
    }
}
