//! The launch pipeline: check, activate, run, release.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::debug;

use crate::activation::Activation;
use crate::config::LaunchConfig;
use crate::consts::{EXIT_FAILURE, SIGNAL_EXIT_BASE};
use crate::error::LaunchError;
use crate::preflight;

/// Runs the entry point inside the project's environment.
pub struct Launcher {
    config: LaunchConfig,
}

impl Launcher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Run once and return the exit code the launcher should report.
    ///
    /// Precondition failures surface as [`LaunchError`] before anything is
    /// spawned. A child that fails is not an error: its status is mirrored.
    pub async fn run(&self) -> Result<u8> {
        preflight::check(&self.config)?;

        let activation = Activation::acquire(&self.config.env_path())?;
        let status = self.delegate(&activation).await?;
        debug!(%status, "entry point exited");

        Ok(exit_code(status))
    }

    async fn delegate(&self, activation: &Activation) -> Result<ExitStatus> {
        let mut cmd = Command::new(activation.interpreter());
        cmd.arg(&self.config.entry_point)
            .current_dir(&self.config.work_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        activation.apply(&mut cmd);

        let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            interpreter: activation.interpreter().to_path_buf(),
            source,
        })?;
        debug!(
            pid = child.id(),
            entry = %self.config.entry_point.display(),
            "entry point started"
        );

        // Ctrl+C reaches the child through the process group. Keep waiting
        // so its status, not ours, decides how this run ends.
        loop {
            tokio::select! {
                status = child.wait() => {
                    return status.context("failed to wait for entry point");
                }
                interrupt = tokio::signal::ctrl_c() => {
                    if interrupt.is_err() {
                        return child.wait().await.context("failed to wait for entry point");
                    }
                    debug!("interrupt received, waiting for entry point to exit");
                }
            }
        }
    }
}

/// Map a child's status to the launcher's exit code.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(EXIT_FAILURE);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(SIGNAL_EXIT_BASE + signal).unwrap_or(EXIT_FAILURE);
        }
    }
    EXIT_FAILURE
}
