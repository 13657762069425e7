//! Data model: aliases, shell dialects, and the example catalog

pub mod alias;
pub mod catalog;
pub mod shell;

pub use alias::{Alias, AliasSet};
pub use catalog::{CatalogEntry, EXAMPLE_ALIASES};
pub use shell::ShellKind;
