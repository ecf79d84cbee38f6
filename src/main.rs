use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

mod api;
mod cli;
mod config;
mod core;
mod error;
mod services;
mod utils;

use cli::core::{providers, search};
use cli::management::config as config_cmd;
use cli::operations::serve;
use config::Config;
use error::{ConfigError, KaraokeError, Result};
use services::ServiceFactory;

#[derive(Parser)]
#[command(name = "karaoke")]
#[command(about = "Search the TJ Media and Kumyoung (KY) karaoke song catalogs")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one karaoke provider by keyword
    Search(search::SearchArgs),

    /// List supported karaoke providers
    Providers(providers::ProvidersArgs),

    /// Serve the search API over HTTP
    Serve(serve::ServeArgs),

    /// Show or initialize configuration
    Config(config_cmd::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose).map_err(KaraokeError::Internal)?;

    // `config init` must work before the file it creates exists
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(KaraokeError::Config(ConfigError::FileNotFound { .. }))
            if matches!(cli.command, Commands::Config(_)) =>
        {
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let services = ServiceFactory::new(Arc::new(config));

    match cli.command {
        Commands::Search(args) => search::execute(args, &services).await,
        Commands::Providers(args) => providers::execute(args, &services).await,
        Commands::Serve(args) => serve::execute(args, &services).await,
        Commands::Config(args) => {
            config_cmd::execute(args, &services.config(), cli.config.as_deref()).await
        }
    }
}
