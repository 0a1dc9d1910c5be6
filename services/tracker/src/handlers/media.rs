use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use shelf_domain::media::MediaKind;

use crate::domain::types::{Content, MediaWrapper, TrackedMedia, take_count};
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::media::{
    EditMediaInput, EditMediaUseCase, GetContentUseCase, ListFavouritesUseCase, ListMediaUseCase,
    ListRecentEditsUseCase, ToggleFavouriteInput, ToggleFavouriteUseCase, TrackMediaInput,
    TrackMediaUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i32,
    pub name: String,
    pub episode: i32,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub director: Option<String>,
    pub favourite: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowResponse {
    pub id: i32,
    pub name: String,
    pub total_episodes: i32,
    pub watched_episodes: i32,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub creator: Option<String>,
    pub favourite: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelResponse {
    pub id: i32,
    pub name: String,
    pub total_pages: i32,
    pub pages_read: i32,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub favourite: bool,
}

/// A content row; the shape tells the kind apart.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ContentResponse {
    Movie(MovieResponse),
    Show(ShowResponse),
    Novel(NovelResponse),
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        match content {
            Content::Movie(m) => Self::Movie(MovieResponse {
                id: m.id,
                name: m.name,
                episode: m.episode,
                release_date: m.release_date,
                synopsis: m.synopsis,
                director: m.director,
                favourite: m.favourite,
            }),
            Content::Show(s) => Self::Show(ShowResponse {
                id: s.id,
                name: s.name,
                total_episodes: s.total_episodes,
                watched_episodes: s.watched_episodes,
                release_date: s.release_date,
                synopsis: s.synopsis,
                creator: s.creator,
                favourite: s.favourite,
            }),
            Content::Novel(n) => Self::Novel(NovelResponse {
                id: n.id,
                name: n.name,
                total_pages: n.total_pages,
                pages_read: n.pages_read,
                release_date: n.release_date,
                synopsis: n.synopsis,
                author: n.author,
                favourite: n.favourite,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperResponse {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub media_id: i32,
    pub date_started: NaiveDate,
    pub edits: i32,
    pub favourite: bool,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<MediaWrapper> for WrapperResponse {
    fn from(wrapper: MediaWrapper) -> Self {
        Self {
            id: wrapper.id,
            user_id: wrapper.user_id,
            kind: wrapper.content.kind(),
            media_id: wrapper.content.id(),
            date_started: wrapper.date_started,
            edits: wrapper.edits,
            favourite: wrapper.favourite,
            created_at: wrapper.created_at,
            updated_at: wrapper.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    #[serde(flatten)]
    pub wrapper: WrapperResponse,
    pub media_details: Option<ContentResponse>,
}

impl From<TrackedMedia> for MediaResponse {
    fn from(media: TrackedMedia) -> Self {
        Self {
            wrapper: media.wrapper.into(),
            media_details: media.details.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteResponse {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub media_details: Option<ContentResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEditResponse {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub media_id: i32,
    pub name: Option<String>,
    pub edits: i32,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

// ── GET /media ───────────────────────────────────────────────────────────────

pub async fn list_media(
    State(state): State<AppState>,
) -> Result<Json<Vec<MediaResponse>>, TrackerServiceError> {
    let usecase = ListMediaUseCase {
        repo: state.media_repo(),
    };
    let media = usecase.execute().await?;
    Ok(Json(media.into_iter().map(Into::into).collect()))
}

// ── GET /media/favourites/{id} ───────────────────────────────────────────────

pub async fn list_favourites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<FavouriteResponse>>, TrackerServiceError> {
    let usecase = ListFavouritesUseCase {
        repo: state.media_repo(),
    };
    let favourites = usecase.execute(user_id).await?;
    let items = favourites
        .into_iter()
        .map(|media| FavouriteResponse {
            kind: media.wrapper.content.kind(),
            media_details: media.details.map(Into::into),
        })
        .collect();
    Ok(Json(items))
}

// ── GET /media/edits ─────────────────────────────────────────────────────────

pub async fn list_recent_edits(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentEditResponse>>, TrackerServiceError> {
    let usecase = ListRecentEditsUseCase {
        repo: state.media_repo(),
    };
    let media = usecase.execute().await?;
    let items = media
        .into_iter()
        .map(|media| RecentEditResponse {
            id: media.wrapper.id,
            user_id: media.wrapper.user_id,
            kind: media.wrapper.content.kind(),
            media_id: media.wrapper.content.id(),
            name: media.details.as_ref().map(|c| c.name().to_owned()),
            edits: media.wrapper.edits,
            updated_at: media.wrapper.updated_at,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /media/{type}/{name} ─────────────────────────────────────────────────

pub async fn get_content(
    State(state): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> Result<Json<ContentResponse>, TrackerServiceError> {
    let usecase = GetContentUseCase {
        repo: state.media_repo(),
    };
    let content = usecase.execute(&kind, &name).await?;
    Ok(Json(content.into()))
}

// ── POST /media/addmedia ─────────────────────────────────────────────────────

pub async fn add_media(
    State(state): State<AppState>,
    Json(mut body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<WrapperResponse>), TrackerServiceError> {
    let input = TrackMediaInput {
        kind: take_kind(&mut body)?,
        user_id: take_id(&body, "userId")?,
        name: take_string(&body, "name")?,
        date_started: take_string(&body, "dateStarted")?,
        total_episodes: take_count(&body, "totalEpisodes")?,
        watched_episodes: take_count(&body, "watchedEpisodes")?,
        total_pages: take_count(&body, "totalPages")?,
        pages_read: take_count(&body, "pagesRead")?,
    };

    let usecase = TrackMediaUseCase {
        repo: state.media_repo(),
    };
    let wrapper = usecase.execute(input).await?;
    Ok((StatusCode::CREATED, Json(wrapper.into())))
}

// ── PUT /media/editmedia ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditMediaResponse {
    pub msg: &'static str,
    pub wrappers_updated: u64,
}

pub async fn edit_media(
    State(state): State<AppState>,
    Json(mut body): Json<Map<String, Value>>,
) -> Result<Json<EditMediaResponse>, TrackerServiceError> {
    let kind = take_kind(&mut body)?;
    let id = take_id(&body, "id")?;
    body.remove("id");

    let usecase = EditMediaUseCase {
        repo: state.media_repo(),
    };
    let wrappers_updated = usecase
        .execute(EditMediaInput {
            kind,
            id,
            fields: body,
        })
        .await?;
    Ok(Json(EditMediaResponse {
        msg: "Updated",
        wrappers_updated,
    }))
}

// ── PUT /media/favourite ─────────────────────────────────────────────────────

pub async fn toggle_favourite(
    State(state): State<AppState>,
    Json(mut body): Json<Map<String, Value>>,
) -> Result<Json<MessageResponse>, TrackerServiceError> {
    let input = ToggleFavouriteInput {
        kind: take_kind(&mut body)?,
        user_id: take_id(&body, "userId")?,
        id: take_id(&body, "id")?,
        name: take_string(&body, "name")?,
    };

    let usecase = ToggleFavouriteUseCase {
        repo: state.media_repo(),
    };
    let outcome = usecase.execute(input).await?;
    Ok(Json(MessageResponse {
        msg: outcome.message(),
    }))
}

// ── Body fields ──────────────────────────────────────────────────────────────

/// Removes `type` so an edit payload keeps only content fields.
fn take_kind(body: &mut Map<String, Value>) -> Result<Option<String>, TrackerServiceError> {
    match body.remove("type") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(kind)) => Ok(Some(kind)),
        Some(_) => Err(TrackerServiceError::InvalidMediaType),
    }
}

fn take_id(
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<i32>, TrackerServiceError> {
    let id = match body.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        Some(_) => None,
    };
    id.map(Some).ok_or(TrackerServiceError::InvalidField(key))
}

fn take_string(
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, TrackerServiceError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(TrackerServiceError::InvalidField(key)),
    }
}
