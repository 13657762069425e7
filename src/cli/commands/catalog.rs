//! Example-catalog flow

use anyhow::Result;
use std::io::{BufRead, Write};

use super::parse_choice;
use crate::cli::context::Context;
use crate::model::{Alias, EXAMPLE_ALIASES};
use crate::session::Session;
use crate::theme;

/// List the bundled example aliases and persist the selected one after
/// confirmation. Out-of-range and non-numeric choices leave the startup
/// file untouched.
pub fn execute<R: BufRead, W: Write>(ctx: &Context, session: &mut Session<R, W>) -> Result<()> {
    session.divider()?;
    session.say(&format!("{} Choose an example alias:", theme::STAR))?;
    for (index, entry) in EXAMPLE_ALIASES.iter().enumerate() {
        session.say_bullet(&format!(
            "{}. {}: {}",
            index + 1,
            entry.name,
            entry.description
        ))?;
    }
    session.divider()?;

    let Some(choice) = session.prompt("Enter the number of your choice:")? else {
        return Ok(());
    };
    let Some(index) = parse_choice(&choice, EXAMPLE_ALIASES.len()) else {
        session.say_error("Invalid choice.")?;
        return Ok(());
    };

    let entry = &EXAMPLE_ALIASES[index];
    session.say(&format!("{} Use this alias?", theme::CIRCUIT))?;
    session.say(&format!("{} Name: {}", theme::KEY, entry.name))?;
    session.say(&format!("{} Command: {}", theme::TERMINAL, entry.command))?;

    if session.confirm("Confirm? (y/n):")? {
        ctx.save_alias(session, &Alias::new(entry.name, entry.command))?;
    } else {
        session.say_error("Alias creation cancelled.")?;
    }
    Ok(())
}
