use std::fmt;
use std::str::FromStr;

use tmdb_api::types::MovieID;

use crate::error::FavoritesError;

/// Longest id accepted for movies and accounts.
pub const MAX_ID_LENGTH: usize = 20;

/// Desired favorite status of a movie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FavoriteState {
    /// The movie should be in the account's favorites.
    #[default]
    Present,
    /// The movie should not be in the account's favorites.
    Absent,
}

impl FromStr for FavoriteState {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" => Ok(FavoriteState::Present),
            "absent" => Ok(FavoriteState::Absent),
            _ => Err(FavoritesError::InvalidInput(format!(
                "unknown state '{}'. Valid values: present, absent",
                s
            ))),
        }
    }
}

impl fmt::Display for FavoriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoriteState::Present => f.write_str("present"),
            FavoriteState::Absent => f.write_str("absent"),
        }
    }
}

fn validate_numeric_id(input: &str, what: &str) -> Result<String, FavoritesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FavoritesError::InvalidInput(format!("{} is empty", what)));
    }
    if trimmed.len() > MAX_ID_LENGTH {
        return Err(FavoritesError::InvalidInput(format!(
            "{} exceeds maximum length of {} characters",
            what, MAX_ID_LENGTH
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FavoritesError::InvalidInput(format!(
            "invalid {} '{}'. Expected digits only (found in the URL of the page)",
            what, input
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a movie id and parse it. Leading zeros are accepted and dropped.
pub fn validate_movie_id(input: &str) -> Result<MovieID, FavoritesError> {
    let digits = validate_numeric_id(input, "movie ID")?;
    digits.parse::<MovieID>().map_err(|_| {
        FavoritesError::InvalidInput(format!("movie ID '{}' is out of range", input))
    })
}

/// Validate an account id: trimmed, non-empty, ASCII digits.
pub fn validate_account_id(input: &str) -> Result<String, FavoritesError> {
    validate_numeric_id(input, "account ID")
}
