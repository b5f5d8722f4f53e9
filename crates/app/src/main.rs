mod browser;
mod cli;
mod commands;
mod config;
mod output;
mod repo_context;
mod resolve;
mod wiring;

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::browser::SystemBrowser;
use crate::cli::{Cli, Command};
use crate::commands::Session;
use crate::config::ConfigError;
use crate::output::RenderError;
use crate::repo_context::GitRemoteRepo;
use crate::wiring::WiringError;
use discussion_infra::github::ForgeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Forge(#[from] ForgeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),
    #[error("failed to open browser: {0}")]
    Browser(std::io::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    config::load_dotenv()?;
    let config = config::AppConfig::from_env()?;

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let token = if cli.command.calls_forge() {
        wiring::resolve_token(&config).await
    } else {
        None
    };
    let client = wiring::build_client(&config, token, cancel)?;
    let mut session = Session {
        client: &client,
        current: &GitRemoteRepo,
        browser: &SystemBrowser,
        host: &config.host,
        out: std::io::stdout(),
        now: Utc::now(),
    };

    match &cli.command {
        Command::List(args) => commands::list::run(&mut session, args).await,
        Command::View(args) => commands::view::run(&mut session, args).await,
        Command::Create(args) => commands::create::run(&mut session, args),
        Command::Search(args) => commands::search::run(&mut session, args).await,
    }
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            debug!("interrupt received; cancelling in-flight requests");
            cancel.cancel();
        }
        Err(err) => error!(error = %err, "failed to install ctrl-c handler"),
    }
}
