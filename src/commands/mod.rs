//! Command-line interface for worklog.
//!
//! Each subcommand lives in its own module with a `clap` argument struct and
//! a `cmd` function. [`Cli::menu`] parses arguments, loads the configuration
//! once and hands it to the selected command.
//!
//! ## Commands
//!
//! - **`add`**: log hours, merging into an identical existing entry
//! - **`get`**: query entries as a table, CSV or JSON
//! - **`export`**: write entries as CSV to stdout or a file
//! - **`report`**: monthly report with breakdowns
//! - **`config`**: show, set or clear saved defaults
//! - **`list`**: list known consultants, customers or projects
//! - **`migrations`**: schema version info (debug builds only)

pub mod add;
pub mod config;
pub mod export;
pub mod get;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod report;

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log hours against a project", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Query time entries")]
    Get(get::GetArgs),
    #[command(about = "Export time entries as CSV")]
    Export(export::ExportArgs),
    #[command(about = "Monthly report with per-consultant, per-project and per-customer totals")]
    Report(report::ReportArgs),
    #[command(about = "Show or change saved defaults")]
    Config(config::ConfigArgs),
    #[command(about = "List consultants, customers or projects", arg_required_else_help = true)]
    List(list::ListArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migration management (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(name = "worklog", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::load()?;
        msg_debug!(format!("effective configuration: {:?}", config));

        match cli.command {
            Commands::Add(args) => add::cmd(args, &config),
            Commands::Get(args) => get::cmd(args, &config),
            Commands::Export(args) => export::cmd(args, &config),
            Commands::Report(args) => report::cmd(args, &config),
            Commands::Config(args) => config::cmd(args, &config),
            Commands::List(args) => list::cmd(args, &config),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args, &config),
        }
    }
}

/// Opens the ledger database named by `config`.
pub(crate) fn open_db(config: &Config) -> Result<Db> {
    let path = config.database_path()?;
    Ok(Db::open(&path)?)
}
