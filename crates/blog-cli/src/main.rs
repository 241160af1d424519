mod cli;
mod commands;

use anyhow::Result;
use blog_config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Serve {
            host,
            port,
            database,
            init_schema,
        } => {
            let config = commands::serve::apply_overrides(config, host, port, database);
            commands::serve::handle(&config, init_schema).await
        }
        cli::Commands::InitDb { database } => {
            let url = database.unwrap_or(config.database.url);
            commands::init_db::handle(&url).await
        }
    }
}
