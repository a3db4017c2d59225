//! CLI tool to manage gifs from the terminal.
//!
//! Usage:
//!   gifs list
//!   gifs create --alt-text "dancing cat" --url https://media.example/cat.gif
//!   gifs update --id <id> --alt-text "..." --url https://...
//!   gifs delete --id <id>
//!
//! The backend is read from `--config <aws-exports.json>`, or else from
//! `GIFS_ENDPOINT`, `GIFS_API_KEY` / `GIFS_AUTH_TOKEN`, `GIFS_REGION` and
//! `GIFS_PAGE_SIZE` (a `.env` file is loaded first). Log verbosity follows
//! `GIFS_LOG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use gif_gallery::{AuthMode, BackendConfig, Gif, GifApi, GifId, GifUpdate, HttpGifApi, NewGif};

#[derive(Parser)]
#[command(name = "gifs", version, about = "Manage gifs stored in the GraphQL backend")]
struct Cli {
    /// Generated aws-exports.json describing the backend.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print records as JSON instead of one line each.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every gif.
    List,
    /// Add a gif.
    Create {
        #[arg(long)]
        alt_text: String,
        #[arg(long)]
        url: String,
    },
    /// Replace a gif's alt text and URL.
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        alt_text: String,
        #[arg(long)]
        url: String,
    },
    /// Remove a gif.
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Deserialize)]
struct EnvConfig {
    endpoint: Option<String>,
    region: Option<String>,
    api_key: Option<String>,
    auth_token: Option<String>,
    page_size: Option<u32>,
}

/// Resolve the backend from `--config` or the `GIFS_*` variables in `vars`.
///
/// Blank credentials count as unset.
fn load_config(
    path: Option<&Path>,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<BackendConfig> {
    let env: EnvConfig = envy::prefixed("GIFS_")
        .from_iter(vars)
        .context("reading GIFS_* environment")?;
    let api_key = env.api_key.filter(|k| !k.is_empty());
    let auth_token = env.auth_token.filter(|t| !t.is_empty());

    if let Some(path) = path {
        return BackendConfig::from_file(path, auth_token)
            .with_context(|| format!("loading {}", path.display()));
    }

    let Some(endpoint) = env.endpoint.filter(|e| !e.is_empty()) else {
        bail!("GIFS_ENDPOINT must be set when --config is not given");
    };
    let auth = match (api_key, auth_token) {
        (Some(key), _) => AuthMode::ApiKey(key),
        (None, Some(token)) => AuthMode::Bearer(token),
        (None, None) => bail!("set GIFS_API_KEY or GIFS_AUTH_TOKEN"),
    };
    let region = env.region.filter(|r| !r.is_empty());
    let config = BackendConfig::new(endpoint, region, auth)?;
    Ok(match env.page_size {
        Some(size) => config.with_page_size(size),
        None => config,
    })
}

fn print_gifs(gifs: &[Gif], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(gifs)?);
    } else {
        for gif in gifs {
            println!("{}\t{}\t{}", gif.id, gif.alt_text, gif.url);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GIFS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), std::env::vars())?;
    let api = HttpGifApi::with_client(reqwest::Client::new(), config);
    tracing::debug!(
        endpoint = %api.config().endpoint,
        region = api.config().region.as_deref().unwrap_or("-"),
        "using backend"
    );

    match cli.command {
        Command::List => {
            let gifs = api.list().await.context("listing gifs")?;
            print_gifs(&gifs, cli.json)?;
            eprintln!("{} gifs", gifs.len());
        }
        Command::Create { alt_text, url } => {
            let gif = api
                .create(NewGif { alt_text, url })
                .await
                .context("creating gif")?;
            print_gifs(std::slice::from_ref(&gif), cli.json)?;
        }
        Command::Update { id, alt_text, url } => {
            let gif = api
                .update(GifUpdate {
                    id: GifId::new(id),
                    alt_text,
                    url,
                })
                .await
                .context("updating gif")?;
            print_gifs(std::slice::from_ref(&gif), cli.json)?;
        }
        Command::Delete { id } => {
            let gif = api.delete(GifId::new(id)).await.context("deleting gif")?;
            print_gifs(std::slice::from_ref(&gif), cli.json)?;
        }
    }

    Ok(())
}
