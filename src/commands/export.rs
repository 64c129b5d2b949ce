use super::open_db;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, OutputFormat, Render},
        filter::{self, DefaultRange, FilterArgs},
        ledger::Ledger,
        messages::Message,
        summary::{LedgerSummary, QueryOutcome},
    },
    msg_success,
};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export time entries as CSV.
///
/// Takes the same filters as `get`, but without a date filter every entry is
/// exported. An empty selection still produces the header and a zero TOTAL
/// row, so the output is always a valid CSV document.
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
}

pub fn cmd(args: ExportArgs, config: &Config) -> Result<()> {
    let filter = filter::build(&args.filter, Local::now().date_naive(), DefaultRange::Unbounded)?;

    let mut db = open_db(config)?;
    let summary = match Ledger::new(&mut db).query(&filter)? {
        QueryOutcome::Empty => LedgerSummary::default(),
        QueryOutcome::Found(summary) => summary,
    };

    let renderer = OutputFormat::from(args.format).renderer();
    match args.output {
        Some(path) => {
            write_file(renderer.as_ref(), &summary, &path)?;
            msg_success!(Message::EntriesWritten(summary.count(), path.display().to_string()));
        }
        None => renderer.render(&summary, &mut io::stdout().lock())?,
    }

    Ok(())
}

fn write_file(renderer: &dyn Render, summary: &LedgerSummary, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| Message::CreateOutputFileFailed(path.display().to_string()))?;
    let mut writer = BufWriter::new(file);
    renderer.render(summary, &mut writer)?;
    writer
        .flush()
        .with_context(|| Message::CreateOutputFileFailed(path.display().to_string()))
}
