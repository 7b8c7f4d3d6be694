use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use rbw_launcher::clipboard::SystemClipboard;
use rbw_launcher::config::Config;
use rbw_launcher::plugin::{Plugin, Request};
use rbw_launcher::vault::{RbwClient, VaultClient};
use rbw_launcher::{loader, search};

#[derive(Parser)]
#[command(name = "rbw-launcher")]
#[command(about = "Launcher plugin for searching rbw vault entries and copying passwords")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.config/rbw-launcher/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one vault listing and print entry names (diagnostic; no secrets)
    Check {
        /// Only print entries matching this query
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is the protocol channel
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Check { query }) => check(&config, query.as_deref()).await,
        None => serve(&config).await,
    }
}

/// One listing attempt, printed to stdout. Names and users only.
async fn check(config: &Config, query: Option<&str>) -> Result<()> {
    let vault = RbwClient::from_config(config);
    let entries = vault
        .list_entries()
        .await
        .context("vault listing failed; is the vault unlocked?")?;

    let matches = search::search(&entries, query.unwrap_or(""), config.max_results);
    println!("{} of {} entries", matches.len(), entries.len());
    for entry in matches {
        println!("{}\t{}", entry.name, entry.user);
    }

    Ok(())
}

/// Load the vault entries, then answer host requests until exit or EOF.
async fn serve(config: &Config) -> Result<()> {
    let vault = RbwClient::from_config(config);
    let entries = loader::load_entries(&vault, &config.retry_policy()).await?;

    let clipboard = SystemClipboard::new()?;
    let mut plugin = Plugin::new(entries, vault, clipboard, config.max_results);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed request line");
                continue;
            }
        };

        let Some(response) = plugin.handle(request).await else {
            break;
        };

        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        stdout.write_all(&payload).await?;
        stdout.flush().await?;
    }

    Ok(())
}
