use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, MigrationManager},
    },
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io;

/// Inspect the ledger schema without changing it.
#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Schema version and the migrations not yet applied
    Status,
    /// Migrations applied to this database, oldest first
    History,
}

pub fn cmd(args: MigrationsArgs, config: &Config) -> Result<()> {
    let path = config.database_path()?;
    let db = Db::open_without_migrations(&path)?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&db.conn)?;
            msg_print!(Message::DatabaseVersion(version, manager.latest_version()));
            msg_print!(Message::ConfigDatabasePath(path.display().to_string()));

            let pending = manager.pending_migrations(version);
            if pending.is_empty() {
                msg_info!(Message::DatabaseUpToDate);
            } else {
                msg_info!(Message::DatabaseNeedsUpdate);
                for (version, name) in pending {
                    msg_print!(Message::PendingMigration(version, name.to_string()));
                }
            }
        }
        MigrationsCommand::History => {
            // A database never opened by `worklog` has no migrations table yet
            if get_db_version(&db.conn)? == 0 {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }
            let history = manager.get_migration_history(&db.conn)?;
            View::migrations(&history, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
