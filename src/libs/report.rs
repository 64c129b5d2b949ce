//! Monthly report: every entry of the month followed by a summary with
//! totals and per-consultant, per-project and per-customer breakdowns.

use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::export::Render;
use crate::libs::messages::Message;
use crate::libs::summary::LedgerSummary;
use crate::libs::view::View;
use chrono::NaiveDate;
use std::io::Write;

pub struct MonthlyReport {
    month: NaiveDate,
}

impl MonthlyReport {
    /// `month` is any day within the reported month.
    pub fn new(month: NaiveDate) -> Self {
        Self { month }
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }
}

impl Render for MonthlyReport {
    fn render(&self, summary: &LedgerSummary, out: &mut dyn Write) -> LedgerResult<()> {
        let io_err = |e: std::io::Error| LedgerError::render(Message::WriteReportFailed, e);

        writeln!(out, "{}\n", Message::ReportTitle(self.label())).map_err(io_err)?;
        View::entries(summary, out)?;

        writeln!(out, "\n{}", Message::ReportSummaryHeader).map_err(io_err)?;
        View::totals(&summary.total, out)?;

        let sections = [
            (Message::ReportPerConsultant, "Consultant", &summary.by_consultant),
            (Message::ReportPerProject, "Project", &summary.by_project),
            (Message::ReportPerCustomer, "Customer", &summary.by_customer),
        ];
        for (title, column, totals) in sections {
            writeln!(out, "\n{}", title).map_err(io_err)?;
            let table = View::breakdown_table(column, totals);
            let mut writer = &mut *out;
            table.print(&mut writer).map_err(io_err)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::time_entries::EntryRecord;
    use crate::libs::summary::SummaryCalculator;

    fn entry(consultant: &str, project: &str, customer: &str, hours: f64, rate: f64) -> EntryRecord {
        EntryRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            hours,
            description: "Work".into(),
            hourly_rate: rate,
            consultant: consultant.into(),
            project: project.into(),
            customer: customer.into(),
        }
    }

    #[test]
    fn report_lists_title_and_every_breakdown() {
        let summary = vec![
            entry("Alice", "Apollo", "Acme", 3.5, 500.0),
            entry("Bob", "Hermes", "Globex", 2.0, 100.0),
        ]
        .summarize();

        let mut out = Vec::new();
        MonthlyReport::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .render(&summary, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Time report - March 2024"));
        assert!(text.contains("Total cost: 1950.00"));
        assert!(text.contains("Per consultant"));
        assert!(text.contains("Per project"));
        assert!(text.contains("Per customer"));
        assert!(text.contains("Globex"));
        assert!(text.contains("1750.00"));
    }
}
