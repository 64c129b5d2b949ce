//! Versioned schema migrations for the ledger database.
//!
//! Each migration is a numbered, named function that runs inside a
//! transaction. Applied versions are recorded in the `migrations` table, and
//! every pending migration is applied in one `IMMEDIATE` transaction when the
//! database is opened, so processes opening a new database at the same time
//! apply each migration exactly once. Migrations are additive only.
//!
//! Progress is reported through `msg_debug!`, never on stdout, so that
//! commands streaming CSV or JSON are not disturbed by a first-run migration.
//!
//! ```rust
//! use worklog::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? >= 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::libs::error::{LedgerError, LedgerResult, StoreResultExt};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: entity tables and the time entry ledger
        self.add_migration(1, "create_ledger_tables", |tx| {
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS consultants (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    active BOOLEAN NOT NULL DEFAULT TRUE,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                CREATE TABLE IF NOT EXISTS customers (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    active BOOLEAN NOT NULL DEFAULT TRUE,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    customer_id INTEGER NOT NULL REFERENCES customers(id),
                    active BOOLEAN NOT NULL DEFAULT TRUE,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    UNIQUE (name, customer_id)
                );
                CREATE TABLE IF NOT EXISTS time_entries (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    hours REAL NOT NULL CHECK (hours > 0),
                    description TEXT NOT NULL,
                    hourly_rate REAL NOT NULL CHECK (hourly_rate > 0),
                    project_id INTEGER NOT NULL REFERENCES projects(id),
                    consultant_id INTEGER NOT NULL REFERENCES consultants(id),
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                CREATE UNIQUE INDEX IF NOT EXISTS idx_time_entries_merge_key
                    ON time_entries(date, consultant_id, project_id, description, hourly_rate);",
            )
        });

        // Version 2: lookup indices for the filtered query path
        self.add_migration(2, "add_time_entry_indices", |tx| {
            tx.execute_batch(
                "CREATE INDEX IF NOT EXISTS idx_time_entries_date ON time_entries(date);
                CREATE INDEX IF NOT EXISTS idx_time_entries_consultant ON time_entries(consultant_id);
                CREATE INDEX IF NOT EXISTS idx_time_entries_project ON time_entries(project_id);
                CREATE INDEX IF NOT EXISTS idx_projects_customer ON projects(customer_id);",
            )
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> LedgerResult<()> {
        if self.get_current_version(conn)? >= self.latest_version() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        // The write lock is taken before the version is read, so a second
        // process opening the same database waits here and then finds
        // nothing left to do
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .store_op(|| Message::DbMigrationFailed)?;
        tx.execute(MIGRATIONS_TABLE, []).store_op(|| Message::DbMigrationFailed)?;

        let current_version = self.get_current_version(&tx)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return tx.commit().store_op(|| Message::DbMigrationFailed);
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_debug!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(LedgerError::Store {
                    operation: Message::DbMigrationFailed,
                    source: e,
                });
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )
            .store_op(|| Message::DbMigrationFailed)?;
            msg_debug!(Message::MigrationCompleted(migration.version));
        }

        tx.commit().store_op(|| Message::DbMigrationFailed)?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Version and name of every migration newer than `current_version`.
    pub fn pending_migrations(&self, current_version: u32) -> Vec<(u32, &'static str)> {
        self.migrations
            .iter()
            .filter(|m| m.version > current_version)
            .map(|m| (m.version, m.name))
            .collect()
    }

    fn get_current_version(&self, conn: &Connection) -> LedgerResult<u32> {
        // A database that predates the migrations table reports version 0
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .optional()
            .unwrap_or(None)
            .flatten();

        Ok(version.unwrap_or(0))
    }

    pub fn get_migration_history(&self, conn: &Connection) -> LedgerResult<Vec<(u32, String, String)>> {
        let mut stmt = conn
            .prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")
            .store_op(|| Message::DbMigrationFailed)?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))
            .store_op(|| Message::DbMigrationFailed)?
            .collect::<Result<Vec<_>, _>>()
            .store_op(|| Message::DbMigrationFailed)?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> LedgerResult<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> LedgerResult<u32> {
    MigrationManager::new().get_current_version(conn)
}
