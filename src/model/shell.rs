//! Shell dialect detection and startup file paths

use std::path::PathBuf;

/// Supported shell dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
}

impl ShellKind {
    /// Detect the dialect from a shell program path such as `/usr/bin/zsh`.
    ///
    /// Anything without the `zsh` marker falls back to Bash.
    pub fn from_shell_path(shell_path: &str) -> Self {
        if shell_path.contains("zsh") {
            ShellKind::Zsh
        } else {
            ShellKind::Bash
        }
    }

    /// Startup file name for this dialect
    pub fn startup_file_name(&self) -> &'static str {
        match self {
            ShellKind::Bash => ".bashrc",
            ShellKind::Zsh => ".zshrc",
        }
    }

    /// Absolute path to the startup file in the user's home directory.
    ///
    /// Always produces a path; the file itself may not exist yet.
    pub fn startup_file_path(&self) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(self.startup_file_name())
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
        }
    }
}

impl std::fmt::Display for ShellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
