use super::open_db;
use crate::{
    db::{consultants::Consultants, customers::Customers, projects::Projects},
    libs::{config::Config, messages::Message, view::View},
    msg_info,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    command: ListCommand,
}

#[derive(Debug, Subcommand)]
enum ListCommand {
    /// Consultants that have logged time
    Consultants,
    /// Customers known to the ledger
    Customers,
    /// Projects with their customer
    Projects,
}

pub fn cmd(args: ListArgs, config: &Config) -> Result<()> {
    let db = open_db(config)?;
    let mut out = io::stdout().lock();

    match args.command {
        ListCommand::Consultants => {
            let consultants = Consultants::new(&db.conn).list()?;
            if consultants.is_empty() {
                msg_info!(Message::NoConsultantsFound);
                return Ok(());
            }
            View::consultants(&consultants, &mut out)?;
        }
        ListCommand::Customers => {
            let customers = Customers::new(&db.conn).list()?;
            if customers.is_empty() {
                msg_info!(Message::NoCustomersFound);
                return Ok(());
            }
            View::customers(&customers, &mut out)?;
        }
        ListCommand::Projects => {
            let projects = Projects::new(&db.conn).list()?;
            if projects.is_empty() {
                msg_info!(Message::NoProjectsFound);
                return Ok(());
            }
            View::projects(&projects, &mut out)?;
        }
    }

    Ok(())
}
