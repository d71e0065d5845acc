//! Launch configuration, fixed by convention.
//!
//! Nothing here is read from flags or files: the environment directory and
//! the entry point are always [`ENV_DIR`] and [`ENTRY_POINT`], resolved
//! against the working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::consts::{ENTRY_POINT, ENV_DIR, REQUIREMENTS_FILE};

/// Where to look for the environment and the entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub work_dir: PathBuf,
    pub env_dir: PathBuf,
    pub entry_point: PathBuf,
}

impl LaunchConfig {
    /// Conventional layout rooted at `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            env_dir: PathBuf::from(ENV_DIR),
            entry_point: PathBuf::from(ENTRY_POINT),
        }
    }

    /// Conventional layout rooted at the process's working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read working directory")?;
        Ok(Self::new(cwd))
    }

    /// Absolute path of the environment root.
    pub fn env_path(&self) -> PathBuf {
        self.resolve(&self.env_dir)
    }

    /// Absolute path of the entry script.
    pub fn entry_path(&self) -> PathBuf {
        self.resolve(&self.entry_point)
    }

    /// Dependency manifest, if the project has one.
    pub fn requirements_path(&self) -> Option<PathBuf> {
        let path = self.work_dir.join(REQUIREMENTS_FILE);
        path.is_file().then_some(path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        }
    }
}
