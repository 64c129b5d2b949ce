//! SQLite persistence for the ledger.
//!
//! [`db::Db`] owns the connection and applies [`migrations`] on open. Each
//! table has a small repository that borrows the connection (or a
//! transaction), so the same code runs standalone and inside
//! [`crate::libs::ledger::Ledger::add`]'s transaction.
//!
//! ## Schema
//!
//! - `consultants(name UNIQUE)`
//! - `customers(name UNIQUE)`
//! - `projects(name, customer_id)`, unique per customer
//! - `time_entries`, unique on `(date, consultant_id, project_id, description, hourly_rate)`

/// Connection setup: foreign keys, busy timeout, migrations.
pub mod db;

/// Versioned, additive schema migrations.
pub mod migrations;

pub mod consultants;
pub mod customers;
pub mod projects;

/// Time entries, reconciliation and filtered fetch.
pub mod time_entries;
