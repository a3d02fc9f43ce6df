//! Graded CLI binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use graded::cli::args::GradedArgs;
use graded::cli::commands::execute_command;

/// Environment variable with `env_logger` directives that refine the
/// level chosen by `-v`/`-q`, e.g. `GRADED_LOG=graded::vocabulary=debug`.
const LOG_ENV: &str = "GRADED_LOG";

/// Log level for the effective verbosity: quiet shows errors only, the
/// default shows warnings such as vocabulary overrides.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(args: &GradedArgs) {
    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .parse_env(LOG_ENV)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> ExitCode {
    let args = GradedArgs::parse();
    init_logging(&args);

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_verbosity() {
        assert_eq!(log_level(0), LevelFilter::Error);
        assert_eq!(log_level(1), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Info);
        assert_eq!(log_level(3), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Debug);
    }
}
