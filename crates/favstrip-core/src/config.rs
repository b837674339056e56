use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the original one-off script was hard-wired to.
pub const DEFAULT_DOCS_DIR: &str = "/home/ubuntu/go/src/securaa-external-documents/docs";

/// File-name glob matched (non-recursively) inside `docs_dir`.
pub const DEFAULT_PATTERN: &str = "*.html";

/// Lines containing this substring are dropped.
pub const DEFAULT_MARKER: &str = "favicon.ico";

/// Global configuration loaded from `~/.config/favstrip/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Directory whose files are rewritten.
    pub docs_dir: PathBuf,
    /// Glob applied to file names inside `docs_dir`.
    pub pattern: String,
    /// Literal substring that marks a line for removal.
    pub marker: String,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("favstrip")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StripConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StripConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from_path(path: &Path) -> Result<StripConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: StripConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
