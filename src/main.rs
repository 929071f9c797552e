use anyhow::Context;
use bukugo_lib::bootstrap::{self, config::default_config_path};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env values never override variables already set in the environment
    let dotenv = dotenvy::dotenv();

    bootstrap::tracing::init_tracing_subscriber().context("Failed to initialize tracing")?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            error!(error = %e, "Failed to load .env file");
        }
    }

    let config_path = default_config_path();
    let config = bootstrap::load_config(config_path.as_deref())
        .context("Failed to load configuration")?;

    let session = bootstrap::build_session(&config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());

    bootstrap::run_app(session, stdin, std::io::stdout()).await
}
