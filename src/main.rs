use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::sync::Arc;

mod api;
mod app;
mod cli;
mod config;
mod events;
mod logging;
mod models;
mod state;
mod ui;

use api::CalculateClient;
use app::App;
use cli::Cli;
use config::{endpoint_from_env, load_config, resolve_endpoint, ConfigOrigin};
use state::{AppState, NotificationLevel};
use ui::Router;

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre for better error messages
    color_eyre::install().ok(); // Ignore error if already installed

    let cli = Cli::parse();
    let dirs = ProjectDirs::from("com", "calcterm", "calcterm");

    let config_path = match (&cli.config, &dirs) {
        (Some(path), _) => path.clone(),
        (None, Some(dirs)) => dirs.config_dir().join("config.toml"),
        (None, None) => std::env::current_dir()?.join("calcterm.toml"),
    };
    let (config, origin) = load_config(&config_path)?;

    let log_dir = match &dirs {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => std::env::current_dir()?,
    };
    let _log_guard = logging::init(&log_dir, &config.settings.log_level, cli.verbose)?;
    tracing::info!(config = %config_path.display(), "starting calcterm");
    if origin == ConfigOrigin::Created {
        tracing::info!(config = %config_path.display(), "wrote default config");
    }

    // Fail before the terminal is taken over if there is nowhere to send requests
    let env_base = endpoint_from_env();
    let (endpoint, source) = resolve_endpoint(
        cli.api_base.as_deref(),
        env_base.as_deref(),
        config.api.base_url.as_deref(),
    )
    .with_context(|| format!("Config file: {}", config_path.display()))?;
    tracing::info!(%endpoint, ?source, "resolved backend");

    let client = CalculateClient::new(endpoint, &config.api)?;

    let router = Router::new();
    let mut state = AppState::new(
        &config.settings,
        client.endpoint().to_string(),
        router.initial_screen(),
    );
    state.add_notification(
        format!("Using backend {}", client.endpoint()),
        NotificationLevel::Info,
    );

    let mut app = App::new(state, Arc::new(client));

    // Initialize terminal
    let terminal = ratatui::init();

    let result = app.run(terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
