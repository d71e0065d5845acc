//! Launch failures the operator has to act on.

use std::path::PathBuf;

use thiserror::Error;

use crate::consts::{BOOTSTRAP_PYTHON, EXIT_PRECONDITION, EXIT_SPAWN_FAILED};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(
        "virtual environment {} not found.\n{}",
        path.display(),
        setup_hint(path, requirements.as_deref())
    )]
    MissingEnvironment {
        path: PathBuf,
        requirements: Option<PathBuf>,
    },

    #[error(
        "{} not found in {}.\nRun this from the project root.",
        entry.display(),
        work_dir.display()
    )]
    MissingEntryPoint { entry: PathBuf, work_dir: PathBuf },

    #[error("failed to start {}", interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingEnvironment { .. } | Self::MissingEntryPoint { .. } => EXIT_PRECONDITION,
            Self::Spawn { .. } => EXIT_SPAWN_FAILED,
        }
    }
}

/// Commands that create the environment and install dependencies into it.
fn setup_hint(env: &std::path::Path, requirements: Option<&std::path::Path>) -> String {
    let name = env
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| env.display().to_string());
    let pip = if cfg!(windows) {
        format!("{name}\\Scripts\\pip")
    } else {
        format!("{name}/bin/pip")
    };
    let install = match requirements.and_then(|r| r.file_name()) {
        Some(file) => format!("{pip} install -r {}", file.to_string_lossy()),
        None => format!("{pip} install <dependencies>"),
    };
    format!("Create it with:\n  {BOOTSTRAP_PYTHON} -m venv {name}\n  {install}")
}
