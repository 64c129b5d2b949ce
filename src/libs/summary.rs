//! Cost and aggregate calculation for fetched entries.
//!
//! Cost is always `hours * hourly_rate`, computed per entry and summed.
//! Breakdowns are keyed by name in a `BTreeMap` so every renderer lists
//! them in the same, deterministic order.

use crate::db::time_entries::EntryRecord;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub hours: f64,
    pub cost: f64,
}

impl Totals {
    fn add(&mut self, hours: f64, cost: f64) {
        self.hours += hours;
        self.cost += cost;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryLine {
    pub entry: EntryRecord,
    pub cost: f64,
}

/// Everything a renderer needs: the entries in order, their costs, grand
/// totals and per-consultant/project/customer breakdowns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSummary {
    pub lines: Vec<EntryLine>,
    pub total: Totals,
    pub by_consultant: BTreeMap<String, Totals>,
    pub by_project: BTreeMap<String, Totals>,
    pub by_customer: BTreeMap<String, Totals>,
}

impl LedgerSummary {
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of a query: no entries is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Empty,
    Found(LedgerSummary),
}

pub trait SummaryCalculator {
    fn summarize(self) -> LedgerSummary;
}

impl SummaryCalculator for Vec<EntryRecord> {
    fn summarize(self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();

        for entry in self {
            let cost = entry.cost();

            summary.total.add(entry.hours, cost);
            summary.by_consultant.entry(entry.consultant.clone()).or_default().add(entry.hours, cost);
            summary.by_project.entry(entry.project.clone()).or_default().add(entry.hours, cost);
            summary.by_customer.entry(entry.customer.clone()).or_default().add(entry.hours, cost);

            summary.lines.push(EntryLine { entry, cost });
        }

        summary
    }
}

impl From<LedgerSummary> for QueryOutcome {
    fn from(summary: LedgerSummary) -> Self {
        if summary.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Found(summary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64, consultant: &str, project: &str, customer: &str, hours: f64, rate: f64) -> EntryRecord {
        EntryRecord {
            id,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hours,
            description: "work".into(),
            hourly_rate: rate,
            consultant: consultant.into(),
            project: project.into(),
            customer: customer.into(),
        }
    }

    #[test]
    fn totals_and_breakdowns_add_up() {
        let summary = vec![
            record(1, "Alice", "Apollo", "Acme", 3.5, 500.0),
            record(2, "Bob", "Apollo", "Acme", 2.0, 100.0),
            record(3, "Alice", "Hermes", "Globex", 1.0, 50.0),
        ]
        .summarize();

        assert_eq!(summary.count(), 3);
        assert_eq!(summary.lines[0].cost, 1750.0);
        assert_eq!(summary.total, Totals { hours: 6.5, cost: 2000.0 });
        assert_eq!(summary.by_consultant["Alice"], Totals { hours: 4.5, cost: 1800.0 });
        assert_eq!(summary.by_project["Apollo"], Totals { hours: 5.5, cost: 1950.0 });
        assert_eq!(summary.by_customer.keys().collect::<Vec<_>>(), vec!["Acme", "Globex"]);
    }

    #[test]
    fn empty_input_is_an_empty_outcome() {
        let outcome = QueryOutcome::from(Vec::<EntryRecord>::new().summarize());
        assert_eq!(outcome, QueryOutcome::Empty);
    }
}
