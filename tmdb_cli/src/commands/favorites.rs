//! The `favorites` subcommand: list the account's favorite movies.

use anyhow::Result;
use clap::Args;
use tmdb_lib::{connect, fetch_favorites, validation, FavoriteOutcome, Settings};

use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct FavoritesArgs {}

pub async fn run(_args: &FavoritesArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let account_id = validation::validate_account_id(settings.require_account_id()?)?;

    let client = connect(settings).await?;
    let favorites = fetch_favorites(&client, &account_id).await?;

    print_outcome(
        &FavoriteOutcome {
            changed: false,
            favorites,
        },
        format,
    );
    Ok(())
}
