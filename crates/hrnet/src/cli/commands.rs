//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::employee::{calendar_date, Department};
use crate::listing::{Column, EntriesPerPage};

/// Arguments for the creation screen.
#[derive(Debug, Default, Args)]
pub struct CreateCommand {
    /// First name
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Date of birth (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub date_of_birth: Option<NaiveDate>,

    /// Start date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Street
    #[arg(long, default_value = "")]
    pub street: String,

    /// City
    #[arg(long, default_value = "")]
    pub city: String,

    /// State abbreviation or name (e.g. "NY" or "New York")
    #[arg(long)]
    pub state: Option<String>,

    /// Zip code (digits only)
    #[arg(long)]
    pub zip_code: Option<String>,

    /// Department
    #[arg(short, long, value_enum)]
    pub department: Option<DepartmentArg>,

    /// Print the saved record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the listing screen.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show rows containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum)]
    pub sort_by: Option<ColumnArg>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort_by")]
    pub desc: bool,

    /// Entries per page: 10, 20 or 50
    #[arg(short, long, value_parser = parse_entries)]
    pub entries: Option<EntriesPerPage>,

    /// Page to show
    #[arg(short, long, default_value = "1", conflicts_with = "last")]
    pub page: usize,

    /// Show the last page
    #[arg(long)]
    pub last: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Department argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepartmentArg {
    /// Sales
    Sales,
    /// Marketing
    Marketing,
    /// Engineering
    Engineering,
    /// Human Resources
    HumanResources,
    /// Legal
    Legal,
}

impl From<DepartmentArg> for Department {
    fn from(arg: DepartmentArg) -> Self {
        match arg {
            DepartmentArg::Sales => Self::Sales,
            DepartmentArg::Marketing => Self::Marketing,
            DepartmentArg::Engineering => Self::Engineering,
            DepartmentArg::HumanResources => Self::HumanResources,
            DepartmentArg::Legal => Self::Legal,
        }
    }
}

/// Sortable column argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    /// First Name
    FirstName,
    /// Last Name
    LastName,
    /// Start Date
    StartDate,
    /// Department
    Department,
    /// Date of Birth
    DateOfBirth,
    /// Street
    Street,
    /// City
    City,
    /// State
    State,
    /// Zip Code
    ZipCode,
}

impl From<ColumnArg> for Column {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::FirstName => Self::FirstName,
            ColumnArg::LastName => Self::LastName,
            ColumnArg::StartDate => Self::StartDate,
            ColumnArg::Department => Self::Department,
            ColumnArg::DateOfBirth => Self::DateOfBirth,
            ColumnArg::Street => Self::Street,
            ColumnArg::City => Self::City,
            ColumnArg::State => Self::State,
            ColumnArg::ZipCode => Self::ZipCode,
        }
    }
}

/// Output format for the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with headers, footer and page controls
    #[default]
    Table,
    /// Tab-separated rows
    Plain,
    /// JSON render model
    Json,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    calendar_date::parse(raw).ok_or_else(|| format!("'{raw}' is not a YYYY-MM-DD date"))
}

fn parse_entries(raw: &str) -> Result<EntriesPerPage, String> {
    let value: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    EntriesPerPage::try_from(value).map_err(|_| "must be 10, 20 or 50".to_string())
}
