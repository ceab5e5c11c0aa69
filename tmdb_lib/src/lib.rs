//! Caller layer for the TMDB client: settings, validation, and favorite-movie management.
//!
//! Resolves connection settings from explicit values and the environment,
//! validates user input, and implements idempotent add/remove of favorite
//! movies on top of the `tmdb_api` session client.

pub mod config;
pub mod error;
pub mod favorites;
pub mod session;
pub mod validation;

pub use tmdb_api;
pub use tmdb_api::types;
pub use tmdb_api::{Client, Params};

pub use config::Settings;
pub use error::FavoritesError;
pub use favorites::{ensure_favorite, fetch_favorites, is_favorite, FavoriteOutcome};
pub use session::connect;
pub use validation::FavoriteState;
