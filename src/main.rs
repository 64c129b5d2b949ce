use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use worklog::commands::Cli;
use worklog::libs::error::LedgerError;
use worklog::libs::messages::Message;
use worklog::libs::messages::macros::is_debug_mode;
use worklog::msg_error;

fn init_tracing() {
    // RUST_LOG wins; WORKLOG_DEBUG alone enables debug output for this crate
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("worklog=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        init_tracing();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            // Bad input gets a pointer to the usage text; store and I/O failures do not
            if e.downcast_ref::<LedgerError>().is_some_and(LedgerError::is_user_error) {
                eprintln!("{}", Message::UsageHint);
            }
            ExitCode::FAILURE
        }
    }
}
