use clap::{Parser, Subcommand};
use colored::*;

mod commands;
mod config;
mod dashboard;
mod proxy_client;
mod render;
mod types;
mod utils;

use commands::*;

#[derive(Parser)]
#[command(name = "pepy-stats")]
#[command(about = "pepy-stats - PyPI download statistics in your terminal", long_about = "
Looks up PyPI download statistics through a pepy-proxy instance.
• Total downloads and published versions
• Daily downloads broken down per version
")]
#[command(version)]
struct Cli {
    /// Base URL of the pepy-proxy service (overrides the config file)
    #[arg(long, global = true, env = "PEPY_PROXY_URL")]
    proxy_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show download statistics for a package
    Show {
        /// PyPI package name
        #[arg(default_value = dashboard::DEFAULT_PACKAGE)]
        package: String,
    },

    /// Interactive dashboard: look up packages one after another
    Browse,

    /// Inspect or change CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Set the pepy-proxy base URL
    SetProxy {
        /// e.g. http://localhost:8080
        url: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { package } => match resolve_proxy_url(cli.proxy_url) {
            Ok(url) => show::handle_show(&url, package).await,
            Err(e) => Err(e),
        },
        Commands::Browse => match resolve_proxy_url(cli.proxy_url) {
            Ok(url) => browse::handle_browse(&url).await,
            Err(e) => Err(e),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => settings::handle_show().await,
            ConfigAction::SetProxy { url } => settings::handle_set_proxy(url).await,
        },
    };

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("\n{} {}", "✗".red().bold(), e.to_string().red());
            std::process::exit(1);
        }
    }
}

fn resolve_proxy_url(flag: Option<String>) -> types::Result<String> {
    match flag {
        Some(url) => Ok(url),
        None => Ok(crate::config::Config::load()?.proxy_url),
    }
}
