//! Modify-alias flow

use anyhow::Result;
use std::io::{BufRead, Write};

use super::parse_choice;
use crate::cli::context::Context;
use crate::model::Alias;
use crate::session::Session;
use crate::theme;

/// List the aliases currently declared in the startup file and take a
/// replacement command for the selected name.
///
/// The "modification" is persisted as an appended redefinition, not an
/// in-place edit: the startup file stays append-only and a sourcing shell
/// applies the last declaration of a name.
pub fn execute<R: BufRead, W: Write>(ctx: &Context, session: &mut Session<R, W>) -> Result<()> {
    let aliases = ctx.parse_startup_file()?;

    session.divider()?;
    session.say(&format!(
        "{} Existing aliases in {}:",
        theme::DISK,
        ctx.startup_file.display()
    ))?;
    for (index, alias) in aliases.iter().enumerate() {
        session.say_bullet(&format!("{}. {}", index + 1, alias))?;
    }
    session.divider()?;

    let Some(choice) = session.prompt("Enter the number of the alias to modify:")? else {
        return Ok(());
    };
    let Some(existing) = parse_choice(&choice, aliases.len()).and_then(|i| aliases.get(i)) else {
        session.say_error("Invalid choice.")?;
        return Ok(());
    };

    let prompt = format!("Enter new command for '{}':", existing.name);
    let Some(new_command) = session.prompt(&prompt)? else {
        return Ok(());
    };

    session.say(&format!("{} Modify alias:", theme::CIRCUIT))?;
    session.say(&format!("{} Name: {}", theme::KEY, existing.name))?;
    session.say(&format!("{} New Command: {}", theme::TERMINAL, new_command))?;

    if session.confirm("Confirm? (y/n):")? {
        ctx.save_alias(session, &Alias::new(existing.name.clone(), new_command))?;
    } else {
        session.say_error("Alias modification cancelled.")?;
    }
    Ok(())
}
