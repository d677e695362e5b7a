use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::refactor::RenameOptions;
use crate::utils::io;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "rescheme.json";

/// Settings that can be overridden via rescheme.json
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenameConfig {
    /// Directory to scan, relative to the working directory unless absolute.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory names pruned from the walk. Empty by default: every
    /// nested directory is scanned.
    #[serde(default)]
    pub skip_dirs: Vec<String>,

    #[serde(default)]
    pub atomic_writes: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            skip_dirs: Vec::new(),
            atomic_writes: false,
        }
    }
}

impl RenameConfig {
    /// Resolve `root` against `base` (normally the working directory).
    pub fn resolve_root(&self, base: &Path) -> PathBuf {
        base.join(&self.root)
    }

    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            skip_dirs: self.skip_dirs.clone(),
            atomic_writes: self.atomic_writes,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load config from `path`, falling back to built-in defaults when the file
/// does not exist. A file that exists but does not parse is an error.
pub fn load_config(path: &Path) -> Result<RenameConfig> {
    if !path.exists() {
        return Ok(RenameConfig::default());
    }

    let content = io::read_file(path)?;
    let config: RenameConfig =
        serde_json::from_str(&content).map_err(|e| Error::config_invalid_json(path, e))?;

    crate::log_status!("config", "Loaded {}", path.display());
    Ok(config)
}

/// Default config location inside `base`.
pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE_NAME)
}
