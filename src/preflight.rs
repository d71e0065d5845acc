//! Precondition checks, run before anything else happens.

use tracing::debug;

use crate::config::LaunchConfig;
use crate::error::LaunchError;

/// Verify the environment directory, then the entry point. First failure wins.
pub fn check(config: &LaunchConfig) -> Result<(), LaunchError> {
    let env_path = config.env_path();
    if !env_path.is_dir() {
        return Err(LaunchError::MissingEnvironment {
            path: env_path,
            requirements: config.requirements_path(),
        });
    }
    debug!(env = %env_path.display(), "environment present");

    let entry_path = config.entry_path();
    if !entry_path.is_file() {
        return Err(LaunchError::MissingEntryPoint {
            entry: config.entry_point.clone(),
            work_dir: config.work_dir.clone(),
        });
    }
    debug!(entry = %entry_path.display(), "entry point present");

    Ok(())
}
