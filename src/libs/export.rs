//! Output formats for query results.
//!
//! Every format implements [`Render`], taking a [`LedgerSummary`] and writing
//! to any `io::Write`: stdout, a file, or a buffer in tests.
//!
//! ## Formats
//!
//! - **Table**: prettytable layout from [`View`] plus totals
//! - **CSV**: `DATE,CONSULTANT,PROJECT,CUSTOMER,DESCRIPTION,HOURS,RATE,COST`,
//!   numbers with two decimals, closed by a `TOTAL` row
//! - **JSON**: `{entries, total_hours, total_cost, count}`, numbers rounded
//!   to two decimals
//!
//! ```rust
//! use worklog::libs::export::OutputFormat;
//! use worklog::libs::summary::LedgerSummary;
//!
//! let mut out = Vec::new();
//! OutputFormat::Csv.renderer().render(&LedgerSummary::default(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("DATE,CONSULTANT"));
//! ```

use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::filter::DATE_FORMAT;
use crate::libs::formatter::{format_amount, round2};
use crate::libs::messages::Message;
use crate::libs::summary::LedgerSummary;
use crate::libs::view::View;
use serde::Serialize;
use std::io::Write;

pub const HEADERS: [&str; 8] = ["DATE", "CONSULTANT", "PROJECT", "CUSTOMER", "DESCRIPTION", "HOURS", "RATE", "COST"];
pub const TOTAL_LABEL: &str = "TOTAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Comma-separated values with a TOTAL row
    Csv,
    /// JSON document with entries and totals
    Json,
}

/// Format accepted by `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Csv => OutputFormat::Csv,
        }
    }
}

pub trait Render {
    fn render(&self, summary: &LedgerSummary, out: &mut dyn Write) -> LedgerResult<()>;
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            OutputFormat::Table => Box::new(TableRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

pub struct TableRenderer;

impl Render for TableRenderer {
    fn render(&self, summary: &LedgerSummary, out: &mut dyn Write) -> LedgerResult<()> {
        View::entries(summary, out)
    }
}

pub struct CsvRenderer;

impl Render for CsvRenderer {
    fn render(&self, summary: &LedgerSummary, out: &mut dyn Write) -> LedgerResult<()> {
        let csv_err = |e: csv::Error| LedgerError::render(Message::WriteCsvFailed, e);
        let mut writer = csv::Writer::from_writer(out);

        writer.write_record(HEADERS).map_err(csv_err)?;
        for line in &summary.lines {
            let entry = &line.entry;
            writer
                .write_record([
                    entry.date.format(DATE_FORMAT).to_string(),
                    entry.consultant.clone(),
                    entry.project.clone(),
                    entry.customer.clone(),
                    entry.description.clone(),
                    format_amount(entry.hours),
                    format_amount(entry.hourly_rate),
                    format_amount(line.cost),
                ])
                .map_err(csv_err)?;
        }

        let total_hours = format_amount(summary.total.hours);
        let total_cost = format_amount(summary.total.cost);
        writer
            .write_record(["", "", "", "", TOTAL_LABEL, total_hours.as_str(), "", total_cost.as_str()])
            .map_err(csv_err)?;

        writer
            .flush()
            .map_err(|e| LedgerError::render(Message::WriteCsvFailed, e))
    }
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    date: String,
    consultant: &'a str,
    project: &'a str,
    customer: &'a str,
    description: &'a str,
    hours: f64,
    hourly_rate: f64,
    cost: f64,
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    entries: Vec<JsonEntry<'a>>,
    total_hours: f64,
    total_cost: f64,
    count: usize,
}

pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, summary: &LedgerSummary, out: &mut dyn Write) -> LedgerResult<()> {
        let document = JsonDocument {
            entries: summary
                .lines
                .iter()
                .map(|line| JsonEntry {
                    date: line.entry.date.format(DATE_FORMAT).to_string(),
                    consultant: &line.entry.consultant,
                    project: &line.entry.project,
                    customer: &line.entry.customer,
                    description: &line.entry.description,
                    hours: round2(line.entry.hours),
                    hourly_rate: round2(line.entry.hourly_rate),
                    cost: round2(line.cost),
                })
                .collect(),
            total_hours: round2(summary.total.hours),
            total_cost: round2(summary.total.cost),
            count: summary.count(),
        };

        let mut writer = out;
        serde_json::to_writer_pretty(&mut writer, &document).map_err(|e| LedgerError::render(Message::WriteJsonFailed, e))?;
        writeln!(writer).map_err(|e| LedgerError::render(Message::WriteJsonFailed, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::time_entries::EntryRecord;
    use crate::libs::summary::SummaryCalculator;
    use chrono::NaiveDate;

    fn summary() -> LedgerSummary {
        vec![EntryRecord {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            hours: 3.5,
            description: "Workshop, day one".into(),
            hourly_rate: 500.0,
            consultant: "Alice".into(),
            project: "Apollo".into(),
            customer: "Acme".into(),
        }]
        .summarize()
    }

    fn render(format: OutputFormat, summary: &LedgerSummary) -> String {
        let mut out = Vec::new();
        format.renderer().render(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn csv_has_exact_header_rows_and_total() {
        let text = render(OutputFormat::Csv, &summary());

        assert_eq!(
            text,
            "DATE,CONSULTANT,PROJECT,CUSTOMER,DESCRIPTION,HOURS,RATE,COST\n\
             2024-03-04,Alice,Apollo,Acme,\"Workshop, day one\",3.50,500.00,1750.00\n\
             ,,,,TOTAL,3.50,,1750.00\n"
        );
    }

    #[test]
    fn json_document_carries_totals_and_count() {
        let text = render(OutputFormat::Json, &summary());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["total_cost"], 1750.0);
        assert_eq!(value["total_hours"], 3.5);
        assert_eq!(value["entries"][0]["date"], "2024-03-04");
        assert_eq!(value["entries"][0]["hourly_rate"], 500.0);
        assert_eq!(value["entries"][0]["cost"], 1750.0);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn json_for_no_entries_is_an_empty_list() {
        let text = render(OutputFormat::Json, &LedgerSummary::default());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["entries"].as_array().unwrap().len(), 0);
        assert_eq!(value["count"], 0);
    }

    #[test]
    fn table_shows_the_same_cost() {
        assert!(render(OutputFormat::Table, &summary()).contains("1750.00"));
    }
}
