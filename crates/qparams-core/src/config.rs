use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/qparams/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QparamsConfig {
    /// Output format used when `--format` is not given.
    pub output_format: OutputFormat,
    /// Print parameters sorted by name (otherwise in map order).
    pub sort_keys: bool,
    /// Default log filter when `RUST_LOG` is unset (e.g. "info,qparams=debug").
    pub log_level: Option<String>,
}

impl Default for QparamsConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Lines,
            sort_keys: true,
            log_level: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qparams")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Configuration plus the path of a default file written on first run.
///
/// The caller logs `created` once its subscriber is installed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: QparamsConfig,
    pub created: Option<PathBuf>,
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LoadedConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        let default_cfg = QparamsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        return Ok(LoadedConfig {
            config: default_cfg,
            created: Some(path.to_path_buf()),
        });
    }

    Ok(LoadedConfig {
        config: load_from(path)?,
        created: None,
    })
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<QparamsConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QparamsConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
