//! Consultants: people who log hours.
//!
//! A consultant is created the first time an entry names them and is looked
//! up by exact, case-sensitive name afterwards.

use crate::libs::error::{LedgerResult, StoreResultExt};
use crate::libs::messages::Message;
use rusqlite::{params, Connection, Row};

const INSERT_CONSULTANT: &str = "INSERT INTO consultants (name) VALUES (?1) ON CONFLICT(name) DO NOTHING";
const SELECT_CONSULTANT_BY_NAME: &str = "SELECT id, name, active FROM consultants WHERE name = ?1";
const SELECT_ALL_CONSULTANTS: &str = "SELECT id, name, active FROM consultants ORDER BY name";

#[derive(Debug, Clone, PartialEq)]
pub struct Consultant {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

impl Consultant {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Consultant {
            id: row.get(0)?,
            name: row.get(1)?,
            active: row.get(2)?,
        })
    }
}

pub struct Consultants<'a> {
    conn: &'a Connection,
}

impl<'a> Consultants<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the consultant called `name`, inserting it if absent.
    ///
    /// The insert is a no-op on conflict, so two writers racing on the same
    /// name both end up with the single stored row.
    pub fn get_or_create(&self, name: &str) -> LedgerResult<Consultant> {
        let op = || Message::GetCreateConsultantFailed(name.to_string());

        self.conn.execute(INSERT_CONSULTANT, params![name]).store_op(op)?;
        self.conn
            .query_row(SELECT_CONSULTANT_BY_NAME, params![name], Consultant::from_row)
            .store_op(op)
    }

    pub fn list(&self) -> LedgerResult<Vec<Consultant>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CONSULTANTS).store_op(|| Message::ListEntitiesFailed)?;
        let consultants = stmt
            .query_map([], Consultant::from_row)
            .store_op(|| Message::ListEntitiesFailed)?
            .collect::<Result<Vec<_>, _>>()
            .store_op(|| Message::ListEntitiesFailed)?;

        Ok(consultants)
    }
}
