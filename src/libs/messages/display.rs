//! Display implementation for worklog application messages.
//!
//! All user-facing text lives here, so commands, the store and the renderers
//! only ever deal in [`Message`] values. Parameters are interpolated at display
//! time, which keeps the call sites free of formatting concerns.
//!
//! ## Message Categories
//!
//! - **Entry Messages**: Result of `add` and the receipt labels
//! - **Query Messages**: Empty results, totals and file output notices
//! - **Report Messages**: Monthly report headings
//! - **Configuration Messages**: `config` show/set/clear output
//! - **Validation Messages**: Input errors surfaced verbatim to the user
//! - **Store Messages**: Context attached to database failures
//! - **Output Messages**: Context attached to rendering failures
//! - **Migration Messages**: Schema version bookkeeping
//!
//! ```rust
//! use worklog::libs::messages::Message;
//!
//! assert_eq!(Message::WeekOutOfRange(54).to_string(), "Week must be between 1 and 53, got 54");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryAdded => "Time entry added".to_string(),
            Message::EntryMerged => "Hours added to an existing entry with the same date, project, description and rate".to_string(),
            Message::ReceiptDate => "Date".to_string(),
            Message::ReceiptConsultant => "Consultant".to_string(),
            Message::ReceiptHours => "Hours".to_string(),
            Message::ReceiptRate => "Rate".to_string(),
            Message::ReceiptCost => "Cost".to_string(),
            Message::ReceiptProject => "Project".to_string(),
            Message::ReceiptCustomer => "Customer".to_string(),
            Message::ReceiptDescription => "Description".to_string(),

            // === QUERY MESSAGES ===
            Message::NoEntriesFound => "No time entries found for the given filters".to_string(),
            Message::NoEntriesForMonth(month) => format!("No time entries found for {}", month),
            Message::EntriesWritten(count, path) => format!("Wrote {} time entries to {}", count, path),
            Message::TotalHours(hours) => format!("Total hours: {}", hours),
            Message::TotalCost(cost) => format!("Total cost: {}", cost),

            // === REPORT MESSAGES ===
            Message::ReportTitle(month) => format!("Time report - {}", month),
            Message::ReportSummaryHeader => "Summary".to_string(),
            Message::ReportPerConsultant => "Per consultant".to_string(),
            Message::ReportPerProject => "Per project".to_string(),
            Message::ReportPerCustomer => "Per customer".to_string(),

            // === ENTITY LIST MESSAGES ===
            Message::NoConsultantsFound => "No consultants recorded yet".to_string(),
            Message::NoCustomersFound => "No customers recorded yet".to_string(),
            Message::NoProjectsFound => "No projects recorded yet".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigHeader => "Current configuration:".to_string(),
            Message::ConfigNoDefaults => "No default values are set.".to_string(),
            Message::ConfigSetInstruction => "Use 'worklog config set' to store defaults for consultant, client, project and rate.".to_string(),
            Message::ConfigDefaultConsultant(value) => format!("  Consultant: {}", value),
            Message::ConfigDefaultClient(value) => format!("  Client:     {}", value),
            Message::ConfigDefaultProject(value) => format!("  Project:    {}", value),
            Message::ConfigDefaultRate(value) => format!("  Rate:       {}", value),
            Message::ConfigLanguage(value) => format!("  Language:   {}", value),
            Message::ConfigDatabaseHeader => "Database:".to_string(),
            Message::ConfigDatabasePath(path) => format!("  Path:       {}", path),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigCleared => "Saved defaults cleared".to_string(),
            Message::ConfigValueRequired => "Specify at least one value to set (see 'worklog config set --help')".to_string(),
            Message::UnsupportedLanguage(language, supported) => {
                format!("Language '{}' is not available, supported: {}", language, supported)
            }
            Message::ConfigReadFailed(path) => format!("Failed to read configuration from {}", path),
            Message::ConfigSaveFailed(path) => format!("Failed to save configuration to {}", path),

            // === VALIDATION MESSAGES ===
            Message::ConsultantRequired => "A consultant is required: pass --consultant or set a default with 'worklog config set --consultant'".to_string(),
            Message::CustomerRequired => "A client is required: pass --client or set a default with 'worklog config set --client'".to_string(),
            Message::ProjectRequired => "A project is required: pass --project or set a default with 'worklog config set --project'".to_string(),
            Message::DescriptionRequired => "A description is required".to_string(),
            Message::RateMustBePositive => "Hourly rate must be greater than zero: pass --rate or set a default with 'worklog config set --rate'".to_string(),
            Message::HoursMustBePositive => "Hours must be greater than zero".to_string(),
            Message::InvalidDateFormat(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),
            Message::InvalidMonthFormat(input) => format!("Invalid month '{}', expected a number 1-12 or YYYY-MM", input),
            Message::WeekOutOfRange(week) => format!("Week must be between 1 and 53, got {}", week),
            Message::MonthOutOfRange(month) => format!("Month must be between 1 and 12, got {}", month),
            Message::YearOutOfRange(year) => format!("Year {} is out of the supported range", year),
            Message::UsageHint => "Run 'worklog help <command>' for the accepted flags and formats".to_string(),

            // === STORE MESSAGES ===
            Message::DbOpenFailed(path) => format!("Failed to open database at {}", path),
            Message::DbDirectoryFailed(dir) => format!("Failed to create database directory {}", dir),
            Message::DbMigrationFailed => "Database migration failed".to_string(),
            Message::GetCreateConsultantFailed(name) => format!("Failed to get or create consultant '{}'", name),
            Message::GetCreateCustomerFailed(name) => format!("Failed to get or create customer '{}'", name),
            Message::GetCreateProjectFailed(name) => format!("Failed to get or create project '{}'", name),
            Message::ReconcileEntryFailed => "Failed to save time entry".to_string(),
            Message::FetchEntriesFailed => "Failed to fetch time entries".to_string(),
            Message::ListEntitiesFailed => "Failed to list records".to_string(),
            Message::TransactionFailed => "Database transaction failed".to_string(),

            // === OUTPUT MESSAGES ===
            Message::CreateOutputFileFailed(path) => format!("Failed to create output file {}", path),
            Message::WriteTableFailed => "Failed to write table output".to_string(),
            Message::WriteCsvFailed => "Failed to write CSV output".to_string(),
            Message::WriteJsonFailed => "Failed to write JSON output".to_string(),
            Message::WriteReportFailed => "Failed to write report".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(current, latest) => format!("Schema version: {} (latest {})", current, latest),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::PendingMigration(version, name) => format!("  pending v{}: {}", version, name),
            Message::NoMigrationsApplied => "No migrations have been applied to this database".to_string(),
        };

        write!(f, "{}", text)
    }
}
