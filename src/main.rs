use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use coffeeshop::cli::{self, Cli};
use coffeeshop::{PermissionEditor, UserDirectory};
use coffeeshop_config::{ApiConfig, normalize_base_url};
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    coffeeshop_observability::init_logging();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.api_server_url = normalize_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let token = std::env::var("API_TOKEN").context("API_TOKEN must be set")?;
    let auth = Arc::new(cli::token_authorizer(&token)?);
    let directory = UserDirectory::new(&config, auth)?;

    let (mut editor, loaded) = PermissionEditor::open(directory).await;
    let loaded = loaded.context("failed to load users")?;

    let stdout = std::io::stdout();
    cli::run(&mut editor, loaded, &cli.command, &mut stdout.lock()).await
}
