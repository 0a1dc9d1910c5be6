//! Content kinds and the polymorphic reference a media wrapper holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discriminator selecting which content table a media wrapper points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Movie,
    Show,
    Novel,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Movie, MediaKind::Show, MediaKind::Novel];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Show => "Show",
            Self::Novel => "Novel",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media type: {0}")]
pub struct UnknownMediaKind(pub String);

/// Case-insensitive: `"movie"`, `"Movie"` and `"MOVIE"` all parse.
impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMediaKind(s.to_owned()))
    }
}

/// Tagged reference from a media wrapper to exactly one content row.
///
/// Persisted as `(kind, content_id)`; every lookup that crosses the
/// discriminator goes through a `match` on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRef {
    Movie(i32),
    Show(i32),
    Novel(i32),
}

impl ContentRef {
    pub fn new(kind: MediaKind, id: i32) -> Self {
        match kind {
            MediaKind::Movie => Self::Movie(id),
            MediaKind::Show => Self::Show(id),
            MediaKind::Novel => Self::Novel(id),
        }
    }

    pub fn kind(self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::Show(_) => MediaKind::Show,
            Self::Novel(_) => MediaKind::Novel,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Self::Movie(id) | Self::Show(id) | Self::Novel(id) => id,
        }
    }
}
