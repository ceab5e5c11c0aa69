mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tmdb_lib::Settings;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tmdb")]
#[command(about = "Manage favorite movies on The Movie Database")]
struct Cli {
    /// Output format: json, table or markdown
    #[arg(long, default_value = "json", global = true)]
    output: String,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Connection settings. Each falls back to its environment variable.
#[derive(Args)]
struct ConnectionArgs {
    /// Base URL of the API, e.g. https://api.themoviedb.org/3 [env: TMDB_API]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// API key [env: TMDB_API_KEY]
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Account username [env: TMDB_USERNAME]
    #[arg(long, global = true)]
    username: Option<String>,

    /// Account password [env: TMDB_PASSWORD]
    #[arg(long, global = true)]
    password: Option<String>,

    /// Account ID owning the favorites [env: TMDB_ACCOUNT_ID]
    #[arg(long, global = true)]
    account_id: Option<String>,
}

impl ConnectionArgs {
    fn settings(&self) -> Settings {
        Settings {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            account_id: self.account_id.clone(),
        }
        .with_env_fallback()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the account's favorite movies
    Favorites(commands::favorites::FavoritesArgs),
    /// Add a movie to, or remove it from, the account's favorites
    Favorite(commands::favorite::FavoriteArgs),
    /// Send an authenticated request to any API path
    Api(commands::api::ApiArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tmdb=info,tmdb_lib=info,tmdb_api=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(&cli.output);

    match run(&cli, &format).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_failure(&e.to_string(), &format);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, format: &OutputFormat) -> Result<()> {
    let settings = cli.connection.settings();
    tracing::debug!("Resolved settings: {:?}", settings);

    match &cli.command {
        Commands::Favorites(args) => commands::favorites::run(args, &settings, format).await?,
        Commands::Favorite(args) => commands::favorite::run(args, &settings, format).await?,
        Commands::Api(args) => commands::api::run(args, &settings, format).await?,
    }

    Ok(())
}
