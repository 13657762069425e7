//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aliasman")]
#[command(about = "Interactive shell alias wizard")]
#[command(version)]
pub struct Cli {
    /// With no command, the interactive menu is entered.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new alias without entering the menu
    Create {
        /// Alias name
        name: String,
        /// Command the alias expands to
        command: String,
    },
}
