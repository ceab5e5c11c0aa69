//! The `favorite` subcommand: make sure a movie is, or is not, a favorite.

use anyhow::Result;
use clap::Args;
use tmdb_lib::{connect, ensure_favorite, validation, FavoriteState, Settings};

use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct FavoriteArgs {
    /// Movie ID (found in the URL of the movie page)
    #[arg(long)]
    pub movie_id: String,

    /// Desired state: present or absent
    #[arg(long, default_value = "present")]
    pub state: String,

    /// Report whether anything would change, without changing it
    #[arg(long)]
    pub check: bool,
}

pub async fn run(args: &FavoriteArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    // Validate everything before any network traffic.
    let movie_id = validation::validate_movie_id(&args.movie_id)?;
    let state: FavoriteState = args.state.parse()?;
    let account_id = validation::validate_account_id(settings.require_account_id()?)?;

    let client = connect(settings).await?;
    let outcome = ensure_favorite(&client, &account_id, movie_id, state, args.check).await?;

    print_outcome(&outcome, format);
    Ok(())
}
