use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use shelf_domain::media::{ContentRef, MediaKind};

use crate::error::TrackerServiceError;

/// Per-user tracking record pointing at one content row.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaWrapper {
    pub id: i32,
    pub user_id: i32,
    pub content: ContentRef,
    pub date_started: NaiveDate,
    pub edits: i32,
    pub favourite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub episode: i32,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub director: Option<String>,
    pub favourite: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i32,
    pub name: String,
    pub total_episodes: i32,
    pub watched_episodes: i32,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub creator: Option<String>,
    pub favourite: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Novel {
    pub id: i32,
    pub name: String,
    pub total_pages: i32,
    pub pages_read: i32,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub favourite: bool,
}

/// A content row of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Movie(Movie),
    Show(Show),
    Novel(Novel),
}

impl Content {
    pub fn content_ref(&self) -> ContentRef {
        match self {
            Self::Movie(m) => ContentRef::Movie(m.id),
            Self::Show(s) => ContentRef::Show(s.id),
            Self::Novel(n) => ContentRef::Novel(n.id),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.content_ref().kind()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Movie(m) => &m.name,
            Self::Show(s) => &s.name,
            Self::Novel(n) => &n.name,
        }
    }
}

/// A wrapper joined with the content row it references.
///
/// `details` is `None` only when the polymorphic reference dangles.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedMedia {
    pub wrapper: MediaWrapper,
    pub details: Option<Content>,
}

/// How a request identifies a content row within a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSelector {
    Id(i32),
    Name(String),
}

impl ContentSelector {
    /// Prefer the primary key; fall back to the name.
    pub fn from_parts(id: Option<i32>, name: Option<&str>) -> Result<Self, TrackerServiceError> {
        if let Some(id) = id {
            return Ok(Self::Id(id));
        }
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => Ok(Self::Name(name.to_owned())),
            _ => Err(TrackerServiceError::MissingRequiredField("name")),
        }
    }
}

/// Content row to create the first time anyone tracks a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewContent {
    Movie {
        name: String,
    },
    Show {
        name: String,
        total_episodes: i32,
        watched_episodes: i32,
    },
    Novel {
        name: String,
        total_pages: i32,
        pages_read: i32,
    },
}

/// Raw kind-specific fields from an add request.
#[derive(Debug, Clone, Default)]
pub struct ContentFields {
    pub name: Option<String>,
    pub total_episodes: Option<i32>,
    pub watched_episodes: Option<i32>,
    pub total_pages: Option<i32>,
    pub pages_read: Option<i32>,
}

impl NewContent {
    /// Validate the fields the given kind requires. Fields of other kinds are ignored.
    pub fn from_fields(kind: MediaKind, fields: ContentFields) -> Result<Self, TrackerServiceError> {
        let name = fields
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(TrackerServiceError::MissingRequiredField("name"))?
            .to_owned();

        match kind {
            MediaKind::Movie => Ok(Self::Movie { name }),
            MediaKind::Show => {
                let total_episodes = fields
                    .total_episodes
                    .ok_or(TrackerServiceError::ShowMissingEpisodes)?;
                Ok(Self::Show {
                    name,
                    total_episodes: non_negative(total_episodes, "totalEpisodes")?,
                    watched_episodes: non_negative(
                        fields.watched_episodes.unwrap_or(0),
                        "watchedEpisodes",
                    )?,
                })
            }
            MediaKind::Novel => {
                let total_pages = fields
                    .total_pages
                    .ok_or(TrackerServiceError::NovelMissingPages)?;
                Ok(Self::Novel {
                    name,
                    total_pages: non_negative(total_pages, "totalPages")?,
                    pages_read: non_negative(fields.pages_read.unwrap_or(0), "pagesRead")?,
                })
            }
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie { .. } => MediaKind::Movie,
            Self::Show { .. } => MediaKind::Show,
            Self::Novel { .. } => MediaKind::Novel,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Movie { name } | Self::Show { name, .. } | Self::Novel { name, .. } => name,
        }
    }
}

/// Where the content row for a new wrapper comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Existing(ContentRef),
    New(NewContent),
}

impl ContentSource {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Existing(content) => content.kind(),
            Self::New(content) => content.kind(),
        }
    }
}

fn non_negative(value: i32, field: &'static str) -> Result<i32, TrackerServiceError> {
    if value < 0 {
        return Err(TrackerServiceError::InvalidField(field));
    }
    Ok(value)
}

// ── Edit payloads ────────────────────────────────────────────────────────────

/// Fields an edit may write on a movie. `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub name: Option<String>,
    pub release_date: Option<Option<NaiveDate>>,
    pub synopsis: Option<Option<String>>,
    pub director: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowPatch {
    pub name: Option<String>,
    pub release_date: Option<Option<NaiveDate>>,
    pub synopsis: Option<Option<String>>,
    pub creator: Option<Option<String>>,
    pub total_episodes: Option<i32>,
    pub watched_episodes: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NovelPatch {
    pub name: Option<String>,
    pub release_date: Option<Option<NaiveDate>>,
    pub synopsis: Option<Option<String>>,
    pub author: Option<Option<String>>,
    pub total_pages: Option<i32>,
    pub pages_read: Option<i32>,
}

/// Whitelisted partial update for one content kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPatch {
    Movie(MoviePatch),
    Show(ShowPatch),
    Novel(NovelPatch),
}

impl ContentPatch {
    /// Build a patch from a JSON object, keeping only the keys the kind allows.
    ///
    /// Unknown keys are dropped. Empty strings clear nullable fields and are
    /// ignored for counts.
    pub fn from_fields(
        kind: MediaKind,
        fields: &Map<String, Value>,
    ) -> Result<Self, TrackerServiceError> {
        let name = take_name(fields)?;
        let release_date = take_date(fields, "releaseDate")?;
        let synopsis = take_text(fields, "synopsis")?;

        let patch = match kind {
            MediaKind::Movie => Self::Movie(MoviePatch {
                name,
                release_date,
                synopsis,
                director: take_text(fields, "director")?,
            }),
            MediaKind::Show => Self::Show(ShowPatch {
                name,
                release_date,
                synopsis,
                creator: take_text(fields, "creator")?,
                total_episodes: take_count(fields, "totalEpisodes")?,
                watched_episodes: take_count(fields, "watchedEpisodes")?,
            }),
            MediaKind::Novel => Self::Novel(NovelPatch {
                name,
                release_date,
                synopsis,
                author: take_text(fields, "author")?,
                total_pages: take_count(fields, "totalPages")?,
                pages_read: take_count(fields, "pagesRead")?,
            }),
        };
        Ok(patch)
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::Show(_) => MediaKind::Show,
            Self::Novel(_) => MediaKind::Novel,
        }
    }

    /// Drop a `name` that only repeats the lookup key.
    pub fn without_name(mut self) -> Self {
        match &mut self {
            Self::Movie(p) => p.name = None,
            Self::Show(p) => p.name = None,
            Self::Novel(p) => p.name = None,
        }
        self
    }
}

fn take_name(fields: &Map<String, Value>) -> Result<Option<String>, TrackerServiceError> {
    match fields.get("name") {
        None => Ok(None),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.trim().to_owned())),
        Some(_) => Err(TrackerServiceError::InvalidField("name")),
    }
}

fn take_text(
    fields: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<Option<String>>, TrackerServiceError> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) if s.is_empty() => Ok(Some(None)),
        Some(Value::String(s)) => Ok(Some(Some(s.clone()))),
        Some(_) => Err(TrackerServiceError::InvalidField(key)),
    }
}

fn take_date(
    fields: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<Option<NaiveDate>>, TrackerServiceError> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) if s.is_empty() => Ok(Some(None)),
        Some(Value::String(s)) => parse_date(s)
            .map(|d| Some(Some(d)))
            .ok_or(TrackerServiceError::InvalidField(key)),
        Some(_) => Err(TrackerServiceError::InvalidField(key)),
    }
}

/// Non-negative count from a JSON number or numeric string; blank means absent.
pub fn take_count(
    fields: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<i32>, TrackerServiceError> {
    let value = match fields.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(_) => None,
    };
    match value {
        Some(n) if n >= 0 => Ok(Some(n)),
        _ => Err(TrackerServiceError::InvalidField(key)),
    }
}

/// Accept `YYYY-MM-DD` or a full RFC 3339 timestamp (date part kept).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

// ── Accounts and notes ───────────────────────────────────────────────────────

/// Public account profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account plus its stored password digest; only login reads this.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none() && self.country.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i32,
    pub user_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Maximum note length in characters.
pub const NOTE_MAX_CHARS: usize = 280;

/// Trim a note body and check it is 1–280 characters.
pub fn validate_note_body(body: &str) -> Result<String, TrackerServiceError> {
    let body = body.trim();
    if body.is_empty() || body.chars().count() > NOTE_MAX_CHARS {
        return Err(TrackerServiceError::InvalidField("body"));
    }
    Ok(body.to_owned())
}
