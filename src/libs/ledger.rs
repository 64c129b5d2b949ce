//! Write and read paths over the ledger database.
//!
//! [`Ledger::add`] resolves consultant, customer and project (creating any
//! that are missing) and reconciles the entry, all inside one `IMMEDIATE`
//! transaction. SQLite takes the write lock when that transaction begins,
//! so concurrent `add` invocations are serialized and never produce
//! duplicate entities or lost hour updates.
//!
//! [`Ledger::query`] fetches filtered entries and summarizes them.

use crate::db::consultants::Consultants;
use crate::db::customers::Customers;
use crate::db::db::Db;
use crate::db::projects::Projects;
use crate::db::time_entries::{NewTimeEntry, Reconciled, TimeEntries};
use crate::libs::entry::EntryDraft;
use crate::libs::error::{LedgerResult, StoreResultExt};
use crate::libs::filter::EntryFilter;
use crate::libs::messages::Message;
use crate::libs::summary::{QueryOutcome, SummaryCalculator};
use rusqlite::TransactionBehavior;
use tracing::{debug, instrument};

pub struct Ledger<'a> {
    db: &'a mut Db,
}

impl<'a> Ledger<'a> {
    pub fn new(db: &'a mut Db) -> Self {
        Self { db }
    }

    /// Records `draft`, merging into an existing entry with the same merge key.
    ///
    /// Nothing is visible to other connections until the transaction commits;
    /// any failure rolls the whole operation back.
    #[instrument(skip_all, fields(date = %draft.date, consultant = %draft.consultant, project = %draft.project))]
    pub fn add(&mut self, draft: &EntryDraft) -> LedgerResult<Reconciled> {
        let tx = self
            .db
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .store_op(|| Message::TransactionFailed)?;

        let consultant = Consultants::new(&tx).get_or_create(&draft.consultant)?;
        let customer = Customers::new(&tx).get_or_create(&draft.customer)?;
        let project = Projects::new(&tx).get_or_create(&draft.project, customer.id)?;

        let reconciled = TimeEntries::new(&tx).reconcile(&NewTimeEntry {
            date: draft.date,
            hours: draft.hours,
            description: draft.description.clone(),
            hourly_rate: draft.hourly_rate,
            project_id: project.id,
            consultant_id: consultant.id,
        })?;

        tx.commit().store_op(|| Message::TransactionFailed)?;
        debug!(entry_id = reconciled.entry.id, merged = reconciled.merged, "time entry committed");

        Ok(reconciled)
    }

    pub fn query(&self, filter: &EntryFilter) -> LedgerResult<QueryOutcome> {
        let records = TimeEntries::new(&self.db.conn).fetch(filter)?;
        debug!(count = records.len(), "fetched time entries");

        Ok(QueryOutcome::from(records.summarize()))
    }
}
