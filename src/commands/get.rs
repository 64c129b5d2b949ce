use super::open_db;
use crate::{
    libs::{
        config::Config,
        export::{OutputFormat, Render},
        filter::{self, DefaultRange, FilterArgs},
        ledger::Ledger,
        messages::Message,
        summary::QueryOutcome,
    },
    msg_info, msg_success,
};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Query logged time.
///
/// Without a date filter, entries of the current month are shown. Date
/// filters are applied in this order, first match wins: --week, --date or
/// --today, --month, --year, --from/--to.
#[derive(Debug, Args)]
pub struct GetArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(long)]
    output_file: Option<PathBuf>,
}

pub fn cmd(args: GetArgs, config: &Config) -> Result<()> {
    let filter = filter::build(&args.filter, Local::now().date_naive(), DefaultRange::CurrentMonth)?;

    let mut db = open_db(config)?;
    let summary = match Ledger::new(&mut db).query(&filter)? {
        QueryOutcome::Empty => {
            msg_info!(Message::NoEntriesFound);
            return Ok(());
        }
        QueryOutcome::Found(summary) => summary,
    };

    let renderer = args.output.renderer();
    match args.output_file {
        Some(path) => {
            let file = File::create(&path).with_context(|| Message::CreateOutputFileFailed(path.display().to_string()))?;
            let mut writer = BufWriter::new(file);
            renderer.render(&summary, &mut writer)?;
            writer
                .flush()
                .with_context(|| Message::CreateOutputFileFailed(path.display().to_string()))?;
            msg_success!(Message::EntriesWritten(summary.count(), path.display().to_string()));
        }
        None => renderer.render(&summary, &mut io::stdout().lock())?,
    }

    Ok(())
}
