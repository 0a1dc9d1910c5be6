use serde_json::{Map, Value};
use tracing::info;

use shelf_domain::favourite::FavouriteToggle;
use shelf_domain::media::MediaKind;

use crate::domain::repository::MediaRepository;
use crate::domain::types::{
    Content, ContentFields, ContentPatch, ContentSelector, ContentSource, MediaWrapper,
    NewContent, TrackedMedia, parse_date,
};
use crate::error::TrackerServiceError;

/// Number of wrappers returned by the recent-edits feed.
pub const RECENT_EDITS_LIMIT: u64 = 20;

fn parse_kind(raw: Option<&str>) -> Result<MediaKind, TrackerServiceError> {
    let raw = raw.ok_or(TrackerServiceError::MissingRequiredField("type"))?;
    Ok(raw.parse::<MediaKind>()?)
}

// ── ListMedia ────────────────────────────────────────────────────────────────

pub struct ListMediaUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> ListMediaUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
        self.repo.list_all().await
    }
}

// ── ListFavourites ───────────────────────────────────────────────────────────

pub struct ListFavouritesUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> ListFavouritesUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
        let favourites = self.repo.list_favourites(user_id).await?;
        if favourites.is_empty() {
            return Err(TrackerServiceError::FavouritesNotFound);
        }
        Ok(favourites)
    }
}

// ── ListRecentEdits ──────────────────────────────────────────────────────────

pub struct ListRecentEditsUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> ListRecentEditsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
        self.repo.list_recent_edits(RECENT_EDITS_LIMIT).await
    }
}

// ── GetContent ───────────────────────────────────────────────────────────────

pub struct GetContentUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> GetContentUseCase<R> {
    pub async fn execute(&self, kind: &str, name: &str) -> Result<Content, TrackerServiceError> {
        let kind = parse_kind(Some(kind))?;
        let selector = ContentSelector::from_parts(None, Some(name))?;
        self.repo
            .find_content(kind, &selector)
            .await?
            .ok_or(TrackerServiceError::ContentNotFound)
    }
}

// ── TrackMedia ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct TrackMediaInput {
    pub kind: Option<String>,
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub date_started: Option<String>,
    pub total_episodes: Option<i32>,
    pub watched_episodes: Option<i32>,
    pub total_pages: Option<i32>,
    pub pages_read: Option<i32>,
}

pub struct TrackMediaUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> TrackMediaUseCase<R> {
    pub async fn execute(&self, input: TrackMediaInput) -> Result<MediaWrapper, TrackerServiceError> {
        let kind = parse_kind(input.kind.as_deref())?;
        let user_id = input
            .user_id
            .ok_or(TrackerServiceError::MissingRequiredField("userId"))?;
        let date_started = input
            .date_started
            .as_deref()
            .ok_or(TrackerServiceError::MissingRequiredField("dateStarted"))?;
        let date_started =
            parse_date(date_started).ok_or(TrackerServiceError::InvalidField("dateStarted"))?;
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(TrackerServiceError::MissingRequiredField("name"))?
            .to_owned();

        // Kind-specific fields only matter when the content row is new.
        let source = match self
            .repo
            .find_content(kind, &ContentSelector::Name(name.clone()))
            .await?
        {
            Some(existing) => ContentSource::Existing(existing.content_ref()),
            None => ContentSource::New(NewContent::from_fields(
                kind,
                ContentFields {
                    name: Some(name),
                    total_episodes: input.total_episodes,
                    watched_episodes: input.watched_episodes,
                    total_pages: input.total_pages,
                    pages_read: input.pages_read,
                },
            )?),
        };

        let wrapper = self.repo.track(user_id, &source, date_started).await?;
        info!(
            user_id,
            media_id = wrapper.id,
            kind = %kind,
            content_id = wrapper.content.id(),
            "media tracked"
        );
        Ok(wrapper)
    }
}

// ── EditMedia ────────────────────────────────────────────────────────────────

pub struct EditMediaInput {
    pub kind: Option<String>,
    pub id: Option<i32>,
    /// Remaining body fields; whitelisted per kind.
    pub fields: Map<String, Value>,
}

pub struct EditMediaUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> EditMediaUseCase<R> {
    /// Returns the number of wrappers whose edit counter was bumped.
    pub async fn execute(&self, input: EditMediaInput) -> Result<u64, TrackerServiceError> {
        let kind = parse_kind(input.kind.as_deref())?;
        let patch = ContentPatch::from_fields(kind, &input.fields)?;
        let name = input.fields.get("name").and_then(Value::as_str);
        let selector = ContentSelector::from_parts(input.id, name)?;
        let patch = match selector {
            ContentSelector::Name(_) => patch.without_name(),
            ContentSelector::Id(_) => patch,
        };

        let content = self
            .repo
            .find_content(kind, &selector)
            .await?
            .ok_or(TrackerServiceError::ContentNotFound)?;
        let target = content.content_ref();
        let bumped = self.repo.edit(target, &patch).await?;
        info!(kind = %kind, content_id = target.id(), wrappers = bumped, "content edited");
        Ok(bumped)
    }
}

// ── ToggleFavourite ──────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ToggleFavouriteInput {
    pub kind: Option<String>,
    pub user_id: Option<i32>,
    pub id: Option<i32>,
    pub name: Option<String>,
}

pub struct ToggleFavouriteUseCase<R: MediaRepository> {
    pub repo: R,
}

impl<R: MediaRepository> ToggleFavouriteUseCase<R> {
    pub async fn execute(
        &self,
        input: ToggleFavouriteInput,
    ) -> Result<FavouriteToggle, TrackerServiceError> {
        let kind = parse_kind(input.kind.as_deref())?;
        let user_id = input
            .user_id
            .ok_or(TrackerServiceError::MissingRequiredField("userId"))?;
        let selector = ContentSelector::from_parts(input.id, input.name.as_deref())?;

        let content = self
            .repo
            .find_content(kind, &selector)
            .await?
            .ok_or(TrackerServiceError::ContentNotFound)?;
        let outcome = self
            .repo
            .toggle_favourite(user_id, content.content_ref())
            .await?;
        info!(
            user_id,
            kind = %kind,
            content_id = content.content_ref().id(),
            outcome = outcome.message(),
            "favourite toggled"
        );
        Ok(outcome)
    }
}
