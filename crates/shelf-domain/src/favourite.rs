//! Favourite cap and toggle outcome.

use serde::Serialize;

/// Maximum number of media a user may hold as favourites at once, across all kinds.
pub const FAVOURITE_CAP: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("favourite limit of {FAVOURITE_CAP} reached")]
pub struct FavouriteLimitExceeded;

/// Check that a user currently holding `current` favourites may add one more.
pub fn ensure_favourite_capacity(current: u64) -> Result<(), FavouriteLimitExceeded> {
    if current >= FAVOURITE_CAP {
        return Err(FavouriteLimitExceeded);
    }
    Ok(())
}

/// Result of flipping a user's favourite on a media wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FavouriteToggle {
    Favourited,
    Unfavourited,
}

impl FavouriteToggle {
    pub fn is_favourite(self) -> bool {
        matches!(self, Self::Favourited)
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Favourited => "Favourited",
            Self::Unfavourited => "Unfavourited",
        }
    }
}
