//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bakery_store::FileStore;

use crate::config::{BakeryConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: BakeryConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (BakeryConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (BakeryConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Open the store holding the shopper's lists.
    pub fn open_store(&self) -> Result<FileStore> {
        let dir = self.resolve_path(&self.config.store.data_dir);
        FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

/// Find the nearest config file in `start` or its ancestors.
///
/// A file that exists but fails to parse is an error rather than skipped.
pub fn find_config(start: &Path) -> Result<Option<(PathBuf, BakeryConfig)>> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let config_path = dir.join(name);
            if config_path.is_file() {
                let config = BakeryConfig::load(&config_path)?;
                return Ok(Some((config_path, config)));
            }
        }
    }

    Ok(None)
}
