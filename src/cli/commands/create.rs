//! Create-alias flow

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::context::Context;
use crate::model::Alias;
use crate::session::Session;
use crate::theme;

/// Prompt for any missing part of the alias, echo both parts back, and
/// persist on an affirmative confirmation. Both values arrive pre-filled in
/// one-shot mode; the confirmation is still presented.
pub fn execute<R: BufRead, W: Write>(
    ctx: &Context,
    session: &mut Session<R, W>,
    name: Option<String>,
    command: Option<String>,
) -> Result<()> {
    session.say(&format!(
        "{} Editing configuration file: {}",
        theme::DISK,
        ctx.startup_file.display()
    ))?;

    let name = match name {
        Some(name) => name,
        None => {
            session.divider()?;
            match session.prompt("Enter alias name:")? {
                Some(name) => name,
                None => return Ok(()),
            }
        }
    };
    let command = match command {
        Some(command) => command,
        None => match session.prompt("Enter command:")? {
            Some(command) => command,
            None => return Ok(()),
        },
    };

    session.divider()?;
    session.say(&format!("{} Confirm new alias:", theme::CIRCUIT))?;
    session.say(&format!("{} Name: {}", theme::KEY, name))?;
    session.say(&format!("{} Command: {}", theme::TERMINAL, command))?;

    if session.confirm("Is this correct? (y/n):")? {
        ctx.save_alias(session, &Alias::new(name, command))?;
    } else {
        session.say_error("Alias creation cancelled.")?;
    }
    Ok(())
}
