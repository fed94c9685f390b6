use std::io::{self, BufWriter};
use std::process::ExitCode;

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::Invocation;
use crate::core::config::Config;
use crate::generators::PasswordBuilder;

fn main() -> ExitCode {
    let config = Config::load();

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("{}", e);
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    let options = match cli::parse_from(std::env::args_os()) {
        Ok(Invocation::Generate(options)) => options,
        Ok(Invocation::Info(message)) => {
            if let Err(e) = message.print() {
                log::debug!("Write failed: {:?}", e);
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::debug!("Invalid arguments: {:?}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Generating {} password(s) of length {}", options.count, options.length);

    let mut builder = PasswordBuilder::new(cli::handlers::random_source(&config));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli::handlers::handle_generate(&options, &config, &mut builder, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away, e.g. piped into head
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Write failed: {:?}", e);
            eprintln!("Error: Writing passwords to standard output: {}", e);
            ExitCode::FAILURE
        }
    }
}
