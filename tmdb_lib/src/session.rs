//! Building an authenticated client from settings.

use tmdb_api::Client;

use crate::config::Settings;
use crate::error::FavoritesError;

/// Builds a client for the configured API URL and logs in.
pub async fn connect(settings: &Settings) -> Result<Client, FavoritesError> {
    let client = Client::new(settings.to_client_config())?;
    authenticate(client).await
}

/// Logs an existing client in and hands it back.
pub async fn authenticate(mut client: Client) -> Result<Client, FavoritesError> {
    client.login().await?;
    Ok(client)
}
