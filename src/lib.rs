//! aliasman - Interactive shell alias wizard
//!
//! Creates, lists, and modifies shell aliases persisted in the user's
//! startup file (`.bashrc` or `.zshrc`).
//!
//! # Features
//!
//! - Menu-driven interactive mode and a one-shot `create` command
//! - Append-only writes: existing startup file content is never altered
//! - Explicit alias-declaration parser that survives escaped quotes
//! - Best-effort reload of the startup file after every write

pub mod cli;
pub mod model;
pub mod parser;
pub mod reload;
pub mod session;
pub mod theme;
pub mod writer;

pub use model::{Alias, AliasSet, ShellKind};
pub use parser::parse_aliases;
pub use reload::ReloadOutcome;
pub use session::Session;
