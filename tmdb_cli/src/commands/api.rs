//! The `api` subcommand: one authenticated request to an arbitrary path.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use tmdb_lib::tmdb_api::{ApiResponse, HeaderMap, Method, Payload};
use tmdb_lib::{connect, Params, Settings};

use crate::output::{body_value, print_json, ApiCallResult, OutputFormat};

#[derive(Args)]
pub struct ApiArgs {
    /// HTTP method: GET, POST, PUT, PATCH or DELETE
    pub method: String,

    /// Path below the API URL, e.g. /account/12345/lists
    pub path: String,

    /// Query parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// JSON request body
    #[arg(long, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// File sent verbatim as the request body
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Content type sent with --data-file
    #[arg(long, default_value = "application/octet-stream")]
    pub content_type: String,
}

pub async fn run(args: &ApiArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let method: Method = args.method.to_uppercase().parse()?;
    let params = parse_params(&args.params)?;
    let json = args
        .data
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()?;
    let bytes = args.data_file.as_ref().map(std::fs::read).transpose()?;
    let payload = Payload::from_parts(json, bytes);

    let client = connect(settings).await?;
    let resp: ApiResponse = match (method.as_str(), payload) {
        ("GET", Payload::Empty) => client.get(&args.path, &params).await?,
        ("DELETE", Payload::Empty) => client.delete(&args.path, &params).await?,
        ("POST", Payload::Json(data)) => client.post(&args.path, &data, &params).await?,
        ("PUT", Payload::Json(data)) => client.put(&args.path, &data, &params).await?,
        ("PATCH", Payload::Json(data)) => client.patch(&args.path, &data, &params).await?,
        (_, Payload::Bytes(raw)) => {
            let mut headers = HeaderMap::new();
            headers.insert("content-type", args.content_type.parse()?);
            client
                .request(method.clone(), &args.path, &params, Payload::Bytes(raw), Some(headers))
                .await?
        }
        ("GET", _) | ("DELETE", _) => bail!("{} does not take a request body", method),
        ("POST", _) | ("PUT", _) | ("PATCH", _) => {
            bail!("{} requires --data or --data-file", method)
        }
        (other, _) => bail!("unsupported method '{}'", other),
    };

    match format {
        OutputFormat::Json => print_json(&ApiCallResult {
            status: resp.status(),
            body: body_value(resp.body()),
        }),
        _ => {
            eprintln!("status: {}", resp.status());
            println!("{}", resp.text());
        }
    }
    Ok(())
}

/// Parses repeated `KEY=VALUE` flags into query parameters.
fn parse_params(raw: &[String]) -> Result<Params> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| anyhow!("invalid --param '{}', expected KEY=VALUE", pair))
        })
        .collect::<Result<Vec<_>>>()
        .map(|pairs| pairs.into_iter().collect())
}
