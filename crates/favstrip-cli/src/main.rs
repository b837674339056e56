use favstrip_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state file; stdout is reserved for the report.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("favstrip error: {:#}", err);
        std::process::exit(1);
    }
}
