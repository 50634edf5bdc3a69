use anyhow::Context;
use tokio::io::{BufReader, stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kb_console::{
    config::ClientConfig, console, services::api_client::ApiClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout belongs to the console, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env().context("loading client configuration")?;
    let client = ApiClient::new(config.api_base);
    info!(api_base = %client.base_url(), "kb-console ready");

    let state = AppState::shared(client);
    println!("{}", console::HELP);

    console::run_loop(&state, BufReader::new(stdin()), stdout())
        .await
        .context("console I/O failed")?;
    Ok(())
}
