pub mod commands;
pub mod console;
pub mod session;

use std::io;

use crate::cli::commands::Cli;
use crate::cli::console::Console;
use crate::cli::session::{Session, SessionOptions};
use crate::io::{config_io, store_io};

/// Resolve config, load the task file, and run the interactive session on
/// stdin/stdout.
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = cli.apply(config_io::load_config(cli.config.as_deref(), &cwd)?);
    let store = store_io::load_tasks(&config.storage.file);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, store, SessionOptions::from_config(&config));
    session.run()?;
    Ok(())
}
