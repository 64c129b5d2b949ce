//! Terminal tables.
//!
//! The entries table layout is defined once here and used by `get`,
//! `report` and the `add` receipt.

use crate::db::consultants::Consultant;
use crate::db::customers::Customer;
use crate::db::projects::ProjectListing;
use crate::db::time_entries::Reconciled;
use crate::libs::entry::EntryDraft;
use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::filter::DATE_FORMAT;
use crate::libs::formatter::{format_amount, truncate};
use crate::libs::messages::Message;
use crate::libs::summary::{EntryLine, LedgerSummary, Totals};
use prettytable::{format, row, Table};
use std::collections::BTreeMap;
use std::io::Write;

pub const DESCRIPTION_WIDTH: usize = 40;

pub struct View {}

impl View {
    pub fn entries_table(lines: &[EntryLine]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["DATE", "CONSULTANT", "PROJECT", "CUSTOMER", "DESCRIPTION", "HOURS", "RATE", "COST"]);
        for line in lines {
            let entry = &line.entry;
            table.add_row(row![
                entry.date.format(DATE_FORMAT),
                entry.consultant,
                entry.project,
                entry.customer,
                truncate(&entry.description, DESCRIPTION_WIDTH),
                r->format_amount(entry.hours),
                r->format_amount(entry.hourly_rate),
                r->format_amount(line.cost)
            ]);
        }

        table
    }

    /// Per-name hours and cost, one row per key in name order.
    pub fn breakdown_table(heading: &str, totals: &BTreeMap<String, Totals>) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row![heading.to_uppercase(), "HOURS", "COST"]);
        for (name, t) in totals {
            table.add_row(row![name, r->format_amount(t.hours), r->format_amount(t.cost)]);
        }

        table
    }

    /// Entries table followed by the grand totals.
    pub fn entries(summary: &LedgerSummary, out: &mut dyn Write) -> LedgerResult<()> {
        Self::print(&Self::entries_table(&summary.lines), out)?;
        Self::totals(&summary.total, out)
    }

    pub fn totals(total: &Totals, out: &mut dyn Write) -> LedgerResult<()> {
        writeln!(out, "{}", Message::TotalHours(format_amount(total.hours)))
            .and_then(|_| writeln!(out, "{}", Message::TotalCost(format_amount(total.cost))))
            .map_err(|e| LedgerError::render(Message::WriteTableFailed, e))
    }

    /// Two-column summary of an entry just written by `add`.
    pub fn receipt(draft: &EntryDraft, reconciled: &Reconciled, out: &mut dyn Write) -> LedgerResult<()> {
        let entry = &reconciled.entry;
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row![Message::ReceiptDate, entry.date.format(DATE_FORMAT)]);
        table.add_row(row![Message::ReceiptConsultant, draft.consultant]);
        table.add_row(row![Message::ReceiptHours, format_amount(entry.hours)]);
        table.add_row(row![Message::ReceiptRate, format_amount(entry.hourly_rate)]);
        table.add_row(row![Message::ReceiptCost, format_amount(entry.cost())]);
        table.add_row(row![Message::ReceiptProject, draft.project]);
        table.add_row(row![Message::ReceiptCustomer, draft.customer]);
        table.add_row(row![Message::ReceiptDescription, entry.description]);

        Self::print(&table, out)
    }

    pub fn consultants(consultants: &[Consultant], out: &mut dyn Write) -> LedgerResult<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "CONSULTANT", "ACTIVE"]);
        for c in consultants {
            table.add_row(row![c.id, c.name, c.active]);
        }
        Self::print(&table, out)
    }

    pub fn customers(customers: &[Customer], out: &mut dyn Write) -> LedgerResult<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "CUSTOMER", "ACTIVE"]);
        for c in customers {
            table.add_row(row![c.id, c.name, c.active]);
        }
        Self::print(&table, out)
    }

    pub fn projects(projects: &[ProjectListing], out: &mut dyn Write) -> LedgerResult<()> {
        let mut table = Table::new();
        table.set_titles(row!["ID", "PROJECT", "CUSTOMER", "ACTIVE"]);
        for listing in projects {
            table.add_row(row![listing.project.id, listing.project.name, listing.customer, listing.project.active]);
        }
        Self::print(&table, out)
    }

    /// Applied migrations as recorded in the `migrations` table.
    pub fn migrations(history: &[(u32, String, String)], out: &mut dyn Write) -> LedgerResult<()> {
        let mut table = Table::new();
        table.set_titles(row!["VERSION", "MIGRATION", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![r->version, name, applied_at]);
        }
        Self::print(&table, out)
    }

    fn print(table: &Table, out: &mut dyn Write) -> LedgerResult<()> {
        let mut writer = out;
        table
            .print(&mut writer)
            .map(|_| ())
            .map_err(|e| LedgerError::render(Message::WriteTableFailed, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::time_entries::EntryRecord;
    use crate::libs::summary::SummaryCalculator;
    use chrono::NaiveDate;

    #[test]
    fn entries_output_shows_cost_and_totals() {
        let summary = vec![EntryRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            hours: 3.5,
            description: "Architecture workshop".into(),
            hourly_rate: 500.0,
            consultant: "Alice".into(),
            project: "Apollo".into(),
            customer: "Acme".into(),
        }]
        .summarize();

        let mut out = Vec::new();
        View::entries(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("2024-03-04"));
        assert!(text.contains("1750.00"));
        assert!(text.contains("Total hours: 3.50"));
        assert!(text.contains("Total cost: 1750.00"));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let long = "x".repeat(80);
        let summary = vec![EntryRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            hours: 1.0,
            description: long.clone(),
            hourly_rate: 10.0,
            consultant: "Alice".into(),
            project: "Apollo".into(),
            customer: "Acme".into(),
        }]
        .summarize();

        let text = View::entries_table(&summary.lines).to_string();
        assert!(!text.contains(&long));
        assert!(text.contains("..."));
    }
}
