//! Command-line shell for hrnet.
//!
//! Each screen of the application is a subcommand: `create` is the creation
//! form at `/`, `list` is the employee table at `/employee-list`.

mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ColumnArg, ConfigCommand, CreateCommand, DepartmentArg, ListCommand, OutputFormat,
};
pub use render::{render_plain, render_table};

/// hrnet - Create and browse employee records
#[derive(Debug, Parser)]
#[command(name = "hrnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an employee record
    Create(CreateCommand),

    /// List current employees
    List(ListCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Application screens and their paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The creation form.
    Create,
    /// The employee table.
    EmployeeList,
}

impl Route {
    /// Path of the screen.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Create => "/",
            Self::EmployeeList => "/employee-list",
        }
    }

    /// The screen this one links to.
    #[must_use]
    pub fn linked(self) -> Self {
        match self {
            Self::Create => Self::EmployeeList,
            Self::EmployeeList => Self::Create,
        }
    }

    /// Command that opens this screen.
    #[must_use]
    pub fn command_hint(self) -> &'static str {
        match self {
            Self::Create => "hrnet create",
            Self::EmployeeList => "hrnet list",
        }
    }
}

impl Command {
    /// The screen this command shows, if it is one.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Create(_) => Some(Route::Create),
            Self::List(_) => Some(Route::EmployeeList),
            Self::Config(_) => None,
        }
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
