use super::open_db;
use crate::{
    libs::{
        config::Config,
        export::Render,
        filter::{self, DateRange, EntryFilter},
        ledger::Ledger,
        messages::Message,
        report::MonthlyReport,
        summary::QueryOutcome,
    },
    msg_info,
};
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;
use std::io;

/// Monthly report: every entry of the month, then totals per consultant,
/// project and customer.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Month to report (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

pub fn cmd(args: ReportArgs, config: &Config) -> Result<()> {
    let month = filter::resolve_month(args.month.as_deref(), Local::now().date_naive())?;
    let filter = EntryFilter::for_range(DateRange::month(month.year(), month.month())?);
    let report = MonthlyReport::new(month);

    let mut db = open_db(config)?;
    match Ledger::new(&mut db).query(&filter)? {
        QueryOutcome::Empty => msg_info!(Message::NoEntriesForMonth(report.label())),
        QueryOutcome::Found(summary) => report.render(&summary, &mut io::stdout().lock())?,
    }

    Ok(())
}
