use std::process::ExitCode;

use clap::Parser;
use comments_app::{render, AppConfig, AppModules, Cli, ScreenState};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the rendered screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("comments_app=info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    let config = AppConfig::from_cli(Cli::parse())?;
    tracing::info!(base_url = %config.base_url, "starting");

    let modules = AppModules::new(&config, Handle::current());
    println!("{}", render(&modules.view_model.state()));

    let state = modules.view_model.load().await;
    println!("{}", render(&state));

    Ok(match state {
        ScreenState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
