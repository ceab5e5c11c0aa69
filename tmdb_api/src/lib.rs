//! Session-aware client for The Movie Database (TMDB) v3 API.
//!
//! The client validates its base URL at construction, exchanges a
//! username/password for a session id in [`Client::login`], and then injects
//! the session into every request it sends. Verb helpers (`get`, `post`,
//! `put`, `patch`, `delete`) enforce a per-verb set of accepted status codes.

mod auth;
mod client;
mod config;
mod errors;
mod query;
mod response;
pub mod types;
mod user_agent;
pub use self::client::{Client, Payload};
pub use self::config::{ClientConfig, TMDB_BASE_URL};
pub use self::errors::Error;
pub use self::query::Params;
pub use self::response::ApiResponse;
pub use reqwest::header::HeaderMap;
pub use reqwest::Method;
