//! # worklog
//!
//! A command-line ledger for consultant hours. Entries are logged against a
//! project owned by a customer, at an hourly rate; logging again with the
//! same date, consultant, project, description and rate adds to the existing
//! entry instead of duplicating it.
//!
//! ## Features
//!
//! - **Logging**: `add` with defaults from the saved configuration
//! - **Querying**: `get` by week, day, month, year or date range, and by consultant/project/customer
//! - **Export**: CSV, JSON and table output with per-entry cost and totals
//! - **Reporting**: monthly report with per-consultant, per-project and per-customer breakdowns
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
