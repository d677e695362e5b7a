use clap::Args;
use std::path::{Path, PathBuf};

use rescheme::config::{self, RenameConfig};
use rescheme::Error;

pub type CmdResult<T> = rescheme::Result<(T, i32)>;

/// Flags accepted by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Config file (default: ./rescheme.json if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to scan (overrides "root" from the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl GlobalArgs {
    /// Load the config file and apply flag overrides, relative to `cwd`.
    pub fn resolve(&self, cwd: &Path) -> rescheme::Result<(RenameConfig, PathBuf)> {
        let path = match &self.config {
            Some(path) => cwd.join(path),
            None => config::config_path(cwd),
        };
        let config = config::load_config(&path)?;

        let root = match &self.root {
            Some(root) => cwd.join(root),
            None => config.resolve_root(cwd),
        };

        Ok((config, root))
    }
}

pub(crate) fn current_dir() -> rescheme::Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })
}

pub mod rename;
pub mod rules;
