use crate::db::migrations::init_with_migrations;
use crate::libs::error::{LedgerError, LedgerResult, StoreResultExt};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits on a lock held by another process.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the ledger at `path` and brings its schema up to date.
    pub fn open(path: &Path) -> LedgerResult<Db> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| LedgerError::Filesystem {
                    context: Message::DbDirectoryFailed(parent.display().to_string()),
                    source,
                })?;
            }
        }

        msg_debug!(format!("opening database at {}", path.display()));
        let conn = Connection::open(path).store_op(|| Message::DbOpenFailed(path.display().to_string()))?;
        Self::prepare(conn)
    }

    /// Opens the database without touching its schema, for inspecting migration state.
    pub fn open_without_migrations(path: &Path) -> LedgerResult<Db> {
        let conn = Connection::open(path).store_op(|| Message::DbOpenFailed(path.display().to_string()))?;
        Ok(Db { conn })
    }

    fn prepare(mut conn: Connection) -> LedgerResult<Db> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .store_op(|| Message::DbMigrationFailed)?;
        conn.busy_timeout(BUSY_TIMEOUT).store_op(|| Message::DbMigrationFailed)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
