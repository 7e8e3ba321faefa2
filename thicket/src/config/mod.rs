//! `thicket` general configuration

mod checks;
mod default;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use thicket_core::rules::WindowRule;
use xdg::BaseDirectories;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Desktop names, the first one starts active.
    pub desktops: Vec<String>,
    pub border_width: u32,
    pub window_gap: u32,
    /// Share kept by the window already in place when a leaf is split.
    pub split_ratio: f32,
    pub window_rules: Vec<WindowRule>,
}

/// Loads the user configuration, falling back to the defaults when it cannot be used.
#[must_use]
pub fn load() -> Config {
    let config = load_or_create()
        .map_err(|err| tracing::error!("Unable to load the configuration: {:?}", err))
        .unwrap_or_default();
    if let Err(err) = config.check() {
        tracing::warn!("Invalid configuration ({}). Falling back to default config.", err);
        return Config::default();
    }
    config
}

/// Path of `config.toml` inside the `thicket` XDG configuration directory.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be determined or the directory cannot be created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("thicket")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Reads the configuration at the XDG location, writing the defaults there on first run.
///
/// # Errors
///
/// Errors if the file cannot be placed, read, parsed or (on first run) written.
pub fn load_or_create() -> Result<Config> {
    let config_filename = get_default_path()?;
    if config_filename.exists() {
        tracing::debug!("Config file '{}' found.", config_filename.display());
        load_from_file(&config_filename)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&config_filename, &config)?;
        Ok(config)
    }
}

/// Parses a `toml` configuration file.
///
/// # Errors
///
/// Errors if the file cannot be read or is not a valid configuration.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// # Errors
///
/// Errors if the configuration cannot be serialized or the file cannot be written.
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string(config)?;
    let mut file = File::create(path)?;
    file.write_all(toml.as_bytes())?;
    Ok(())
}

impl thicket_core::Config for Config {
    fn desktop_names(&self) -> Vec<String> {
        self.desktops.clone()
    }

    fn border_width(&self) -> u32 {
        self.border_width
    }

    fn window_gap(&self) -> u32 {
        self.window_gap
    }

    fn split_ratio(&self) -> f32 {
        self.split_ratio
    }

    fn window_rules(&self) -> Vec<WindowRule> {
        self.window_rules.clone()
    }
}
