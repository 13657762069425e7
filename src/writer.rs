//! Appending alias declarations to the startup file

use anyhow::{Context as _, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::model::Alias;

/// Append an alias declaration to the startup file.
///
/// The declaration is written in a single call, framed by blank lines, with
/// the file opened in append mode so existing content is never touched. The
/// file is created if it does not exist yet. Any I/O failure propagates as a
/// fatal error; the caller must skip the reload step in that case.
pub fn append_alias(path: &Path, alias: &Alias) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for appending", path.display()))?;

    file.write_all(format!("\n{}\n", alias.declaration_line()).as_bytes())
        .with_context(|| format!("Failed to write alias to {}", path.display()))?;

    Ok(())
}
