//! Command execution context

use anyhow::{Context as _, Result};
use std::env;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::model::{Alias, AliasSet, ShellKind};
use crate::reload::{self, ReloadOutcome};
use crate::session::Session;
use crate::writer;

/// Common context for flow execution: which shell we are editing for and
/// where its startup file lives.
pub struct Context {
    pub shell_path: String,
    pub shell_kind: ShellKind,
    pub startup_file: PathBuf,
}

impl Context {
    pub fn new(shell_path: impl Into<String>, startup_file: PathBuf) -> Self {
        let shell_path = shell_path.into();
        let shell_kind = ShellKind::from_shell_path(&shell_path);
        Self {
            shell_path,
            shell_kind,
            startup_file,
        }
    }

    /// Resolve the context from `$SHELL` and the home directory.
    ///
    /// An unset `$SHELL` falls back to `/bin/bash`, which also selects the
    /// Bash startup file.
    pub fn from_env() -> Self {
        let shell_path = env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string());
        let shell_kind = ShellKind::from_shell_path(&shell_path);
        let startup_file = shell_kind.startup_file_path();
        Self {
            shell_path,
            shell_kind,
            startup_file,
        }
    }

    /// Read and parse the startup file. Unreadable files are fatal here;
    /// only the modify flow needs pre-existing content.
    pub fn parse_startup_file(&self) -> Result<AliasSet> {
        let content = std::fs::read_to_string(&self.startup_file)
            .with_context(|| format!("Failed to read {}", self.startup_file.display()))?;
        Ok(crate::parser::parse_aliases(&content))
    }

    /// The shared persistence path every flow delegates to: append the
    /// declaration, then attempt a reload. The reload outcome is displayed
    /// but never affects the result; a failed append propagates and skips
    /// the reload entirely.
    pub fn save_alias<R: BufRead, W: Write>(
        &self,
        session: &mut Session<R, W>,
        alias: &Alias,
    ) -> Result<()> {
        writer::append_alias(&self.startup_file, alias)?;
        session.say_success(&format!(
            "Alias '{}' saved to {}",
            alias.name,
            self.startup_file.display()
        ))?;

        session.say_bullet("Sourcing configuration...")?;
        match reload::source_startup_file(&self.shell_path, &self.startup_file) {
            ReloadOutcome::Sourced => session.say_success(
                "Configuration sourced successfully. New alias is ready to use.",
            )?,
            ReloadOutcome::Failed(reason) => {
                session.say_error(&format!("Error sourcing configuration: {}", reason))?;
                session.say_bullet(&format!(
                    "Please run 'source {}' manually to use the new alias.",
                    self.startup_file.display()
                ))?;
            }
        }
        Ok(())
    }
}
