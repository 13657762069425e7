//! Re-sourcing the startup file after a write

use std::path::Path;
use std::process::{Command, Stdio};

/// Result of a reload attempt. Informational only: the alias write has
/// already completed by the time this is produced, so callers display the
/// outcome but never branch exit status on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    Sourced,
    Failed(String),
}

impl ReloadOutcome {
    pub fn is_sourced(&self) -> bool {
        matches!(self, ReloadOutcome::Sourced)
    }
}

/// Source the startup file in a subprocess running the user's shell.
///
/// Both failure modes (spawn error, non-zero exit) collapse into
/// `Failed` with a reason; neither is fatal to the program.
pub fn source_startup_file(shell_path: &str, config_path: &Path) -> ReloadOutcome {
    let result = Command::new(shell_path)
        .arg("-c")
        .arg(format!("source {}", config_path.display()))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => ReloadOutcome::Sourced,
        Ok(status) => ReloadOutcome::Failed(format!("{} exited with {}", shell_path, status)),
        Err(err) => ReloadOutcome::Failed(format!("failed to launch {}: {}", shell_path, err)),
    }
}
