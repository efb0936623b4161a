use std::path::PathBuf;

use clap::Parser;

use crate::model::config::{Config, RenderStyle};

#[derive(Parser, Debug, Default)]
#[command(
    name = "tasklist",
    about = concat!("tasklist v", env!("CARGO_PKG_VERSION"), " - an interactive task list"),
    version
)]
pub struct Cli {
    /// Task file to load at start and save on `end` [default: tasklist.json]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file [default: tasklist.toml in the current directory, if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print tasks as numbered lines instead of a table
    #[arg(long)]
    pub plain: bool,

    /// Show priority and due tag as letters instead of colored cells
    #[arg(long)]
    pub no_color: bool,

    /// Give up on a prompt after this many invalid answers (0 = never)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,
}

impl Cli {
    /// Layer the command-line flags over a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(file) = &self.file {
            config.storage.file = file.clone();
        }
        if self.plain {
            config.display.style = RenderStyle::Plain;
        }
        if self.no_color {
            config.display.color = false;
        }
        if let Some(n) = self.max_attempts {
            config.input.max_attempts = n;
        }
        config
    }
}
