use crate::id::IdSpec;
use crate::url_check::UrlStrategy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Identifier defaults (optional `[id]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdConfig {
    /// Number of 4-character hex groups per identifier.
    pub groups: usize,
    /// Join groups with a dash separator.
    pub separated: bool,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            groups: 5,
            separated: true,
        }
    }
}

impl IdConfig {
    pub fn to_spec(&self) -> IdSpec {
        IdSpec {
            groups: self.groups,
            separated: self.separated,
        }
    }
}

/// Global configuration loaded from `~/.config/webutil/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebutilConfig {
    /// Identifier defaults; built-in defaults apply when the section is missing.
    #[serde(default)]
    pub id: IdConfig,
    /// URL validation strategy: "strict" (default) or "loose".
    #[serde(default)]
    pub url_strategy: UrlStrategy,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webutil")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if
/// none exists.
pub fn load_or_init() -> Result<WebutilConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<WebutilConfig> {
    if !path.exists() {
        let default_cfg = WebutilConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: WebutilConfig = toml::from_str(&data)?;
    Ok(cfg)
}
