//! Project-wide constants.

/// Virtual environment directory, relative to the project root.
pub const ENV_DIR: &str = ".venv";

/// Script that does the project's actual work.
pub const ENTRY_POINT: &str = "run.py";

/// Named in the setup hint when present next to the entry point.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Interpreter used to create the environment in the setup hint.
pub const BOOTSTRAP_PYTHON: &str = "python3";

/// Exit code for a failed precondition.
pub const EXIT_PRECONDITION: u8 = 1;

/// Exit code for a child status with no usable code, and for internal errors.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code when the interpreter could not be started (shell convention).
pub const EXIT_SPAWN_FAILED: u8 = 127;

/// Offset added to a terminating signal number (shell convention).
pub const SIGNAL_EXIT_BASE: i32 = 128;

