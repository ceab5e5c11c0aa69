//! Favorite-movie management on top of an authenticated client.

use serde::Serialize;
use tmdb_api::types::{Movie, MovieID, Page};
use tmdb_api::{Client, Params};

use crate::error::FavoritesError;
use crate::validation::FavoriteState;

/// Upper bound on pages fetched for one listing. The API never serves more.
pub const MAX_PAGES: i64 = 500;

const MEDIA_TYPE_MOVIE: &str = "movie";

/// Body of `POST /account/{id}/favorite`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FavoritePayload {
    pub media_type: &'static str,
    pub media_id: MovieID,
    pub favorite: bool,
}

impl FavoritePayload {
    pub fn movie(movie_id: MovieID, favorite: bool) -> Self {
        Self {
            media_type: MEDIA_TYPE_MOVIE,
            media_id: movie_id,
            favorite,
        }
    }
}

/// Result of [`ensure_favorite`]: whether anything changed, and the
/// account's favorites after the operation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FavoriteOutcome {
    pub changed: bool,
    pub favorites: Vec<Movie>,
}

fn favorites_path(account_id: &str) -> String {
    format!("/account/{}/favorite/movies", account_id)
}

/// Fetches every favorite movie of the account, following pagination.
pub async fn fetch_favorites(
    client: &Client,
    account_id: &str,
) -> Result<Vec<Movie>, FavoritesError> {
    let path = favorites_path(account_id);
    let mut movies = Vec::new();
    let mut page = 1;
    loop {
        let params = Params::new().with("page", &page.to_string());
        let resp = client.get(&path, &params).await?;
        if resp.status() == 404 {
            return Err(FavoritesError::AccountNotFound(account_id.to_string()));
        }
        let listing: Page<Movie> = serde_json::from_slice(resp.body())?;
        let more = listing.has_next();
        movies.extend(listing.results);
        if !more {
            break;
        }
        if page >= MAX_PAGES {
            tracing::warn!(
                "Stopping after {} pages of favorites for account {}",
                MAX_PAGES,
                account_id
            );
            break;
        }
        page += 1;
    }
    tracing::debug!("Account {} has {} favorite movies", account_id, movies.len());
    Ok(movies)
}

pub fn is_favorite(movie_id: MovieID, favorites: &[Movie]) -> bool {
    favorites.iter().any(|m| m.id == movie_id)
}

/// Marks or unmarks a movie as favorite.
pub async fn mark_favorite(
    client: &Client,
    account_id: &str,
    movie_id: MovieID,
    favorite: bool,
) -> Result<(), FavoritesError> {
    let path = format!("/account/{}/favorite", account_id);
    client
        .post(&path, &FavoritePayload::movie(movie_id, favorite), &Params::new())
        .await?;
    Ok(())
}

/// Brings a movie's favorite status to `state`.
///
/// Only posts when the current status differs. Adding re-reads the list so
/// the new entry comes back with the API's details; removing filters the
/// previous list locally. In `check_mode` nothing is posted and the
/// reported list is the current one, minus the movie when removing.
pub async fn ensure_favorite(
    client: &Client,
    account_id: &str,
    movie_id: MovieID,
    state: FavoriteState,
    check_mode: bool,
) -> Result<FavoriteOutcome, FavoritesError> {
    let mut favorites = fetch_favorites(client, account_id).await?;
    let favorited = is_favorite(movie_id, &favorites);

    match (state, favorited) {
        (FavoriteState::Present, true) | (FavoriteState::Absent, false) => Ok(FavoriteOutcome {
            changed: false,
            favorites,
        }),
        (FavoriteState::Present, false) => {
            if check_mode {
                return Ok(FavoriteOutcome {
                    changed: true,
                    favorites,
                });
            }
            mark_favorite(client, account_id, movie_id, true).await?;
            tracing::info!("Added movie {} to favorites of account {}", movie_id, account_id);
            let favorites = fetch_favorites(client, account_id).await?;
            Ok(FavoriteOutcome {
                changed: true,
                favorites,
            })
        }
        (FavoriteState::Absent, true) => {
            if !check_mode {
                mark_favorite(client, account_id, movie_id, false).await?;
                tracing::info!(
                    "Removed movie {} from favorites of account {}",
                    movie_id,
                    account_id
                );
            }
            favorites.retain(|m| m.id != movie_id);
            Ok(FavoriteOutcome {
                changed: true,
                favorites,
            })
        }
    }
}
