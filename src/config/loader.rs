use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::schema::CalcConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Existing,
    Created,
}

/// Load configuration from a TOML file, writing a default one on first run
pub fn load_config(path: &Path) -> Result<(CalcConfig, ConfigOrigin)> {
    if !path.exists() {
        let config = CalcConfig::default();
        save_config(path, &config)?;
        return Ok((config, ConfigOrigin::Created));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: CalcConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    // A zero timeout would make reqwest fail every request immediately.
    if config.api.timeout_seconds == 0 {
        anyhow::bail!(
            "api.timeout_seconds must be at least 1 in config file: {}",
            path.display()
        );
    }

    Ok((config, ConfigOrigin::Existing))
}

/// Save configuration to a TOML file
pub fn save_config(path: &Path, config: &CalcConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}
