use crate::{
    libs::{
        config::{Config, ConfigUpdate},
        formatter::format_amount,
        messages::Message,
    },
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Show or change the saved defaults used by `add`.
///
/// Without a subcommand the effective configuration is shown, including
/// values overridden by WORKLOG_* environment variables.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Show the current configuration
    Show,
    /// Save default values
    Set {
        /// Default consultant
        #[arg(short = 'n', long)]
        consultant: Option<String>,
        /// Default client
        #[arg(short, long)]
        client: Option<String>,
        /// Default project
        #[arg(short, long)]
        project: Option<String>,
        /// Default hourly rate
        #[arg(short, long)]
        rate: Option<f64>,
        /// Message language (only "en" is available)
        #[arg(short, long)]
        language: Option<String>,
        /// SQLite database file
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
    /// Remove saved defaults and the database location
    Clear,
}

pub fn cmd(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.command {
        None | Some(ConfigCommand::Show) => show(config),
        Some(ConfigCommand::Set {
            consultant,
            client,
            project,
            rate,
            language,
            db_path,
        }) => set(ConfigUpdate {
            consultant,
            client,
            project,
            rate,
            language,
            db_path,
        }),
        Some(ConfigCommand::Clear) => clear(),
    }
}

fn show(config: &Config) -> Result<()> {
    msg_print!(Message::ConfigHeader);

    if !config.has_defaults() {
        msg_print!(Message::ConfigNoDefaults);
        msg_print!(Message::ConfigSetInstruction);
    } else {
        print_defaults(config);
    }
    if let Some(language) = &config.language {
        msg_print!(Message::ConfigLanguage(language.clone()));
    }

    msg_print!(Message::ConfigDatabaseHeader);
    msg_print!(Message::ConfigDatabasePath(config.database_path()?.display().to_string()));

    Ok(())
}

fn print_defaults(config: &Config) {
    if let Some(consultant) = &config.default_consultant {
        msg_print!(Message::ConfigDefaultConsultant(consultant.clone()));
    }
    if let Some(client) = &config.default_client {
        msg_print!(Message::ConfigDefaultClient(client.clone()));
    }
    if let Some(project) = &config.default_project {
        msg_print!(Message::ConfigDefaultProject(project.clone()));
    }
    if let Some(rate) = config.default_rate {
        msg_print!(Message::ConfigDefaultRate(format_amount(rate)));
    }
}

fn set(update: ConfigUpdate) -> Result<()> {
    if update.is_empty() {
        msg_bail_anyhow!(Message::ConfigValueRequired);
    }
    update.validate()?;

    // Edit the file as stored; environment overrides are never persisted
    let mut config = Config::read()?;
    config.apply(update);
    config.save()?;

    msg_success!(Message::ConfigSaved);
    print_defaults(&config);
    Ok(())
}

fn clear() -> Result<()> {
    let mut config = Config::read()?;
    config.clear();
    config.save()?;

    msg_success!(Message::ConfigCleared);
    Ok(())
}
