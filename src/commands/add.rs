use super::open_db;
use crate::{
    libs::{config::Config, entry::AddRequest, ledger::Ledger, messages::Message, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::io;

/// Log hours for a consultant on a project.
///
/// Consultant, client, project and rate fall back to the values saved with
/// `worklog config set`. The date defaults to today. If an entry already
/// exists for the same date, consultant, project, description and rate, the
/// hours are added to it instead of creating a second entry.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Hours worked (must be greater than zero)
    #[arg(short = 't', long)]
    hours: f64,

    /// What the time was spent on
    #[arg(short, long)]
    description: String,

    /// Project name
    #[arg(short, long)]
    project: Option<String>,

    /// Client (customer) that owns the project
    #[arg(short, long)]
    client: Option<String>,

    /// Consultant who did the work
    #[arg(short = 'n', long)]
    consultant: Option<String>,

    /// Hourly rate
    #[arg(short, long)]
    rate: Option<f64>,

    /// Date worked (YYYY-MM-DD), defaults to today
    #[arg(short = 'D', long)]
    date: Option<String>,
}

pub fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let request = AddRequest {
        hours: args.hours,
        description: args.description,
        project: args.project,
        client: args.client,
        consultant: args.consultant,
        rate: args.rate,
        date: args.date,
    };

    // Validation happens before the database is opened
    let draft = request.resolve(config, Local::now().date_naive())?;

    let mut db = open_db(config)?;
    let reconciled = Ledger::new(&mut db).add(&draft)?;

    if reconciled.merged {
        msg_info!(Message::EntryMerged);
    } else {
        msg_success!(Message::EntryAdded);
    }
    View::receipt(&draft, &reconciled, &mut io::stdout().lock())?;

    Ok(())
}
