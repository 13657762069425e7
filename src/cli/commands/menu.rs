//! Root menu loop

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{catalog, create, modify};
use crate::cli::context::Context;
use crate::session::Session;
use crate::theme;

/// Run the interactive menu until the user exits.
///
/// Each iteration blocks on one choice, dispatches to a sub-flow, and
/// returns here. End-of-input terminates the loop as cleanly as the
/// explicit exit choice does.
pub fn run<R: BufRead, W: Write>(ctx: &Context, session: &mut Session<R, W>) -> Result<()> {
    session.say(&format!(
        "\n{} Welcome to the Alias Wizard! {}",
        theme::PREFIX,
        theme::PREFIX
    ))?;
    session.say(&format!(
        "{} Editing configuration file: {}",
        theme::DISK,
        ctx.startup_file.display()
    ))?;

    loop {
        session.divider()?;
        session.say(&format!("{} What would you like to do?", theme::STAR))?;
        session.say_bullet("1. Create a new alias")?;
        session.say_bullet("2. Use an example alias")?;
        session.say_bullet("3. Modify an existing alias")?;
        session.say_bullet("4. Exit")?;
        session.divider()?;

        let Some(choice) = session.prompt("Enter your choice (1-4):")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => create::execute(ctx, session, None, None)?,
            "2" => catalog::execute(ctx, session)?,
            "3" => modify::execute(ctx, session)?,
            "4" => {
                session.say(&format!("{} Goodbye! {}", theme::ROCKET, theme::ROCKET))?;
                return Ok(());
            }
            _ => session.say_error("Invalid choice. Please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_with(input: &str, rc: std::path::PathBuf) -> String {
        let ctx = Context::new("/bin/bash", rc);
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(&ctx, &mut session).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_exit_choice_terminates() {
        let dir = tempdir().unwrap();
        let rc = dir.path().join(".bashrc");
        let output = run_with("4\n", rc.clone());

        assert!(output.contains("Goodbye!"));
        assert!(!rc.exists());
    }

    #[test]
    fn test_eof_terminates() {
        let dir = tempdir().unwrap();
        let output = run_with("", dir.path().join(".bashrc"));
        assert!(output.contains("What would you like to do?"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let dir = tempdir().unwrap();
        let output = run_with("9\n4\n", dir.path().join(".bashrc"));
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_create_then_modify_round_trip() {
        let dir = tempdir().unwrap();
        let rc = dir.path().join(".bashrc");
        fs::write(&rc, "").unwrap();

        // Create ll via the menu, then enter the modify flow and back out
        let output = run_with("1\nll\nls -la\ny\n3\n\n4\n", rc.clone());

        assert!(output.contains("1. ll: ls -la"));
        let content = fs::read_to_string(&rc).unwrap();
        assert!(content.contains("alias ll='ls -la'"));
    }
}
