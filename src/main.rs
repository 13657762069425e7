//! aliasman - Interactive shell alias wizard

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use aliasman::cli::{commands, Cli, Commands, Context};
use aliasman::session::stdio_session;
use aliasman::theme;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(_) => {
            print_usage();
            std::process::exit(1);
        }
    };

    let ctx = Context::from_env();
    let mut session = stdio_session();

    match cli.command {
        Some(Commands::Create { name, command }) => {
            commands::create::execute(&ctx, &mut session, Some(name), Some(command))
        }
        None => commands::menu::run(&ctx, &mut session),
    }
}

fn print_usage() {
    println!(
        "\n{prefix} Alias Wizard Usage {prefix}\n\n\
         Interactive mode:\n  aliasman\n\n\
         Create new alias:\n  aliasman create <alias_name> <command>\n\n\
         Example:\n  aliasman create gp \"git push\"",
        prefix = theme::PREFIX
    );
}
