pub mod list;
pub mod menu;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use roster_common::config::{Config, DEFAULT_DATA_FILE};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keeps track of students, teachers and course enrollments.")]
pub struct CommandLine {
    /// JSON file the registry is loaded from and saved to
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Hide the banner and section headers
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show more log output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// Print one collection and exit
    #[command(alias = "l")]
    List { kind: ListKind },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Students,
    Teachers,
    Courses,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            data_file: self.file.clone(),
            quiet: self.quiet,
            verbosity: self.verbose,
        }
    }

    /// The command to run; the menu when none was given.
    pub fn action(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }
}
