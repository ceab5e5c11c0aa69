//! CLI subcommand implementations.

pub mod api;
pub mod favorite;
pub mod favorites;
