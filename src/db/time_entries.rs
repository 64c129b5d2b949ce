//! Time entries and the merge-or-insert reconciliation.
//!
//! At most one row exists per merge key `(date, consultant_id, project_id,
//! description, hourly_rate)`, enforced by a unique index. Logging hours for
//! an existing key adds to that row instead of creating a second one.
//!
//! [`TimeEntries::reconcile`] performs the write as a single upsert. Callers
//! that need the whole add operation to be atomic (entity creation plus the
//! entry) run it inside an `IMMEDIATE` transaction, as
//! [`crate::libs::ledger::Ledger::add`] does.

use crate::libs::error::{LedgerResult, StoreResultExt};
use crate::libs::filter::EntryFilter;
use crate::libs::messages::Message;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use tracing::debug;

const SELECT_MATCHING_ENTRY: &str = "
    SELECT id, date, hours, description, hourly_rate, project_id, consultant_id
    FROM time_entries
    WHERE date = ?1 AND consultant_id = ?2 AND project_id = ?3 AND description = ?4 AND hourly_rate = ?5
";
const UPSERT_ENTRY: &str = "
    INSERT INTO time_entries (date, hours, description, hourly_rate, project_id, consultant_id)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(date, consultant_id, project_id, description, hourly_rate)
    DO UPDATE SET hours = hours + excluded.hours, updated_at = CURRENT_TIMESTAMP
    RETURNING id, date, hours, description, hourly_rate, project_id, consultant_id
";
const SELECT_ENTRY_RECORDS: &str = "
    SELECT e.id, e.date, e.hours, e.description, e.hourly_rate, c.name, p.name, cu.name
    FROM time_entries e
    JOIN consultants c ON c.id = e.consultant_id
    JOIN projects p ON p.id = e.project_id
    JOIN customers cu ON cu.id = p.customer_id
";

/// A stored time entry, as identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub hourly_rate: f64,
    pub project_id: i64,
    pub consultant_id: i64,
}

impl TimeEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(TimeEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            hours: row.get(2)?,
            description: row.get(3)?,
            hourly_rate: row.get(4)?,
            project_id: row.get(5)?,
            consultant_id: row.get(6)?,
        })
    }

    pub fn cost(&self) -> f64 {
        self.hours * self.hourly_rate
    }
}

/// Candidate entry handed to [`TimeEntries::reconcile`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub hourly_rate: f64,
    pub project_id: i64,
    pub consultant_id: i64,
}

/// Outcome of a reconcile: the stored row and whether it already existed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub entry: TimeEntry,
    pub merged: bool,
}

/// A time entry with consultant, project and customer names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub hourly_rate: f64,
    pub consultant: String,
    pub project: String,
    pub customer: String,
}

impl EntryRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(EntryRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            hours: row.get(2)?,
            description: row.get(3)?,
            hourly_rate: row.get(4)?,
            consultant: row.get(5)?,
            project: row.get(6)?,
            customer: row.get(7)?,
        })
    }

    pub fn cost(&self) -> f64 {
        self.hours * self.hourly_rate
    }
}

pub struct TimeEntries<'a> {
    conn: &'a Connection,
}

impl<'a> TimeEntries<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Entry with exactly the candidate's merge key, if any.
    ///
    /// Matching is exact: no trimming, case folding or float tolerance.
    pub fn find_matching(&self, candidate: &NewTimeEntry) -> LedgerResult<Option<TimeEntry>> {
        self.conn
            .query_row(
                SELECT_MATCHING_ENTRY,
                params![
                    candidate.date,
                    candidate.consultant_id,
                    candidate.project_id,
                    candidate.description,
                    candidate.hourly_rate
                ],
                TimeEntry::from_row,
            )
            .optional()
            .store_op(|| Message::ReconcileEntryFailed)
    }

    /// Adds the candidate's hours to the row with the same merge key, or
    /// inserts it as a new row.
    pub fn reconcile(&self, candidate: &NewTimeEntry) -> LedgerResult<Reconciled> {
        let merged = self.find_matching(candidate)?.is_some();

        let entry = self
            .conn
            .query_row(
                UPSERT_ENTRY,
                params![
                    candidate.date,
                    candidate.hours,
                    candidate.description,
                    candidate.hourly_rate,
                    candidate.project_id,
                    candidate.consultant_id
                ],
                TimeEntry::from_row,
            )
            .store_op(|| Message::ReconcileEntryFailed)?;

        debug!(id = entry.id, hours = entry.hours, merged, "reconciled time entry");
        Ok(Reconciled { entry, merged })
    }

    /// Entries matching `filter`, ordered by date then insertion.
    pub fn fetch(&self, filter: &EntryFilter) -> LedgerResult<Vec<EntryRecord>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(start) = filter.range.start {
            clauses.push("e.date >= ?");
            values.push(Box::new(start));
        }
        if let Some(end) = filter.range.end {
            clauses.push("e.date < ?");
            values.push(Box::new(end));
        }
        if let Some(consultant) = &filter.consultant {
            clauses.push("c.name = ?");
            values.push(Box::new(consultant.clone()));
        }
        if let Some(project) = &filter.project {
            clauses.push("p.name = ?");
            values.push(Box::new(project.clone()));
        }
        if let Some(customer) = &filter.customer {
            clauses.push("cu.name = ?");
            values.push(Box::new(customer.clone()));
        }

        let mut sql = SELECT_ENTRY_RECORDS.to_string();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY e.date, e.id");

        debug!(%sql, "fetching time entries");

        let mut stmt = self.conn.prepare(&sql).store_op(|| Message::FetchEntriesFailed)?;
        let records = stmt
            .query_map(params_from_iter(values.iter()), EntryRecord::from_row)
            .store_op(|| Message::FetchEntriesFailed)?
            .collect::<Result<Vec<_>, _>>()
            .store_op(|| Message::FetchEntriesFailed)?;

        Ok(records)
    }
}
