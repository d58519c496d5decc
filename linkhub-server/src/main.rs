//! Linkhub REST API server.
//!
//! Serves the link collection over HTTP:
//! - public reads (private links hidden without credentials)
//! - authenticated create/update/delete/drag-reorder
//! - backup export/import
//!
//! Usage:
//!   linkhub-server --port 4000 --links-file data/links.json
//!
//! The admin bearer token comes from `--admin-token` or the
//! `LINKHUB_ADMIN_TOKEN` environment variable; without one the API is
//! read-only.

use anyhow::{Context, Result};
use clap::Parser;
use linkhub_server::{AppState, Authenticator, StaticToken, build_router};
use linkhub_store::FileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "linkhub-server")]
#[command(about = "Linkhub REST API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Path to the links JSON file
    #[arg(short, long, env = "LINKS_FILE", default_value = "data/links.json")]
    links_file: PathBuf,

    /// Admin bearer token; mutating endpoints stay disabled when unset
    #[arg(long, env = "LINKHUB_ADMIN_TOKEN", hide_env_values = true)]
    admin_token: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Linkhub server starting...");

    let auth: Option<Box<dyn Authenticator>> = match args.admin_token {
        Some(token) => Some(Box::new(StaticToken::new(token))),
        None => {
            warn!("no admin token configured; the API is read-only and private links stay hidden");
            None
        }
    };

    let store = FileStore::new(&args.links_file);
    let state = Arc::new(AppState::new(store, auth));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("failed to bind port {}", args.port))?;
    info!(
        "listening on http://0.0.0.0:{} (links file: {})",
        args.port,
        args.links_file.display()
    );
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
