//! Scoped environment activation for the delegated interpreter.
//!
//! Instead of mutating the launcher's own environment the way a shell
//! `activate` script does, an [`Activation`] is an explicit variable mapping
//! applied to a single child [`Command`]. The launcher's environment is
//! never touched, so there is nothing to deactivate and nothing can leak
//! into a later run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// Interpreter names tried inside the binary directory, in order.
const INTERPRETERS: &[&str] = &["python", "python3", "python.exe"];

/// Variables an activated environment must not inherit.
const REMOVED_VARS: &[&str] = &["PYTHONHOME"];

/// Interpreter looked up on the activated `PATH` when the environment has none.
const FALLBACK_INTERPRETER: &str = "python";

/// An environment prepared for one child process.
#[derive(Debug, Clone)]
pub struct Activation {
    interpreter: PathBuf,
    vars: Vec<(String, OsString)>,
}

impl Activation {
    /// Activate `root` on top of the launcher's inherited `PATH`.
    pub fn acquire(root: &Path) -> Result<Self> {
        Self::acquire_with_path(root, std::env::var_os("PATH"))
    }

    /// Activate `root` on top of an explicit inherited `PATH`.
    pub fn acquire_with_path(root: &Path, inherited_path: Option<OsString>) -> Result<Self> {
        let bin_dir = bin_dir(root);
        let interpreter = resolve_interpreter(&bin_dir);

        // An empty entry would put the working directory on the search path.
        let inherited = inherited_path.unwrap_or_default();
        let path = std::env::join_paths(
            std::iter::once(bin_dir.clone()).chain(
                std::env::split_paths(&inherited).filter(|p| !p.as_os_str().is_empty()),
            ),
        )
        .with_context(|| format!("cannot put {} on PATH", bin_dir.display()))?;

        let vars = vec![
            ("VIRTUAL_ENV".to_string(), root.as_os_str().to_os_string()),
            ("VIRTUAL_ENV_PROMPT".to_string(), OsString::from(prompt(root))),
            ("PATH".to_string(), path),
        ];

        debug!(
            root = %root.display(),
            interpreter = %interpreter.display(),
            "environment activated"
        );

        Ok(Self { interpreter, vars })
    }

    /// Interpreter to run the entry point with.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Apply this activation to `cmd`. Affects only that child.
    pub fn apply(&self, cmd: &mut Command) {
        for key in REMOVED_VARS {
            cmd.env_remove(key);
        }
        cmd.envs(self.vars.iter().map(|(k, v)| (k, v)));
    }
}

/// `bin` on POSIX layouts, `Scripts` on Windows layouts.
fn bin_dir(root: &Path) -> PathBuf {
    let bin = root.join("bin");
    let scripts = root.join("Scripts");
    if bin.is_dir() {
        bin
    } else if scripts.is_dir() || cfg!(windows) {
        scripts
    } else {
        bin
    }
}

fn resolve_interpreter(bin_dir: &Path) -> PathBuf {
    INTERPRETERS
        .iter()
        .map(|name| bin_dir.join(name))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| {
            warn!(
                bin_dir = %bin_dir.display(),
                "no interpreter in environment, falling back to {FALLBACK_INTERPRETER} on PATH"
            );
            PathBuf::from(FALLBACK_INTERPRETER)
        })
}

/// Prompt name: `prompt` from `pyvenv.cfg` if set, else the directory name.
fn prompt(root: &Path) -> String {
    std::fs::read_to_string(root.join("pyvenv.cfg"))
        .ok()
        .and_then(|cfg| {
            cfg.lines().find_map(|line| {
                let (key, value) = line.split_once('=')?;
                (key.trim() == "prompt")
                    .then(|| value.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
            })
        })
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}
