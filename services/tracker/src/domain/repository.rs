#![allow(async_fn_in_trait)]

use chrono::NaiveDate;

use shelf_domain::favourite::FavouriteToggle;
use shelf_domain::media::{ContentRef, MediaKind};

use crate::domain::types::{
    Content, ContentPatch, ContentSelector, ContentSource, MediaWrapper, NewUser, Note,
    ProfileUpdate, TrackedMedia, User, UserCredentials,
};
use crate::error::TrackerServiceError;

/// Repository for tracked media, shared content rows and favourites.
pub trait MediaRepository: Send + Sync {
    /// Every wrapper joined with its content row.
    async fn list_all(&self) -> Result<Vec<TrackedMedia>, TrackerServiceError>;

    /// Wrappers the user has favourited, joined with their content rows.
    async fn list_favourites(&self, user_id: i32)
    -> Result<Vec<TrackedMedia>, TrackerServiceError>;

    /// Most recently updated wrappers first.
    async fn list_recent_edits(
        &self,
        limit: u64,
    ) -> Result<Vec<TrackedMedia>, TrackerServiceError>;

    async fn find_content(
        &self,
        kind: MediaKind,
        selector: &ContentSelector,
    ) -> Result<Option<Content>, TrackerServiceError>;

    /// Resolve-or-create the content row and add a wrapper for the user,
    /// atomically. Fails with `AlreadyTracked` if the user already has one.
    async fn track(
        &self,
        user_id: i32,
        content: &ContentSource,
        date_started: NaiveDate,
    ) -> Result<MediaWrapper, TrackerServiceError>;

    /// Apply the patch to the content row and bump `edits` on every wrapper
    /// referencing it, atomically. Returns the number of wrappers bumped.
    async fn edit(
        &self,
        target: ContentRef,
        patch: &ContentPatch,
    ) -> Result<u64, TrackerServiceError>;

    /// Flip the user's favourite on their wrapper for `target`, keeping both
    /// `favourite` mirrors in step, atomically.
    async fn toggle_favourite(
        &self,
        user_id: i32,
        target: ContentRef,
    ) -> Result<FavouriteToggle, TrackerServiceError>;
}

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, TrackerServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, TrackerServiceError>;
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, TrackerServiceError>;
    async fn update_profile(
        &self,
        id: i32,
        update: &ProfileUpdate,
    ) -> Result<(), TrackerServiceError>;
}

/// Repository for short user notes.
pub trait NoteRepository: Send + Sync {
    async fn create(&self, user_id: i32, body: &str) -> Result<Note, TrackerServiceError>;

    /// Newest first.
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Note>, TrackerServiceError>;

    /// Delete a note only if `user_id` owns it. Returns `true` if a row was deleted.
    async fn delete_owned(&self, id: i32, user_id: i32) -> Result<bool, TrackerServiceError>;
}
