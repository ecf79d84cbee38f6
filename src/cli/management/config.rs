use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config as AppConfig, EnvParser, EnvVars};
use crate::error::{KaraokeError, Result};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List all available configuration keys
    Keys,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("🔧 Current configuration:");
            println!("  🎤 tj_base_url: {}", config.tj_base_url);
            println!("  🎤 ky_base_url: {}", config.ky_base_url);
            println!("  ⏱️  request_timeout_seconds: {}", config.request_timeout_seconds);
            println!("  🏷️  user_agent: {}", config.user_agent);
            println!("  🌐 bind_address: {}", config.bind_address);

            // Show environment overrides if present
            let env_vars = EnvParser::get_all_karaoke_vars();
            if !env_vars.is_empty() {
                println!("\n🌍 Environment overrides:");
                for (key, value) in env_vars {
                    println!("  {} = {}", key, value);
                }
            }
        }

        ConfigCommands::Path => {
            println!("{}", resolve_path(config_path)?.display());
        }

        ConfigCommands::Init { force } => {
            let path = resolve_path(config_path)?;
            if path.exists() && !force {
                return Err(KaraokeError::Validation(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            AppConfig::default().save(&path)?;
            println!("✅ Wrote default configuration to {}", path.display());
        }

        ConfigCommands::Keys => {
            println!("🔑 Configuration keys:");
            for key in ["tj_base_url", "ky_base_url", "request_timeout_seconds", "user_agent", "bind_address"] {
                println!("  {}", key);
            }
            println!("\n🌍 Environment variables:");
            for var in EnvVars::all() {
                println!("  {}", var);
            }
        }
    }

    Ok(())
}

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => AppConfig::default_config_path(),
    }
}
