use std::{
    io::{self, ErrorKind},
    process::ExitCode,
};

use clap::Parser as _;
use tracing::{debug, error, trace};

use crate::{
    cli::Cli,
    config::{read_config, ConfigError},
    generator::{GenerateError, Generator},
    random::RandomSource,
    setup_tracing::setup_tracing,
};

/// Parses the command line, prints the requested tokens and reports the
/// outcome as the process exit status.
#[must_use]
pub fn boot() -> ExitCode {
    let cli = Cli::parse();

    let settings = match read_config(&cli) {
        Ok(settings) => settings,
        Err(e) => return fail(&e),
    };

    setup_tracing(&settings.tracing.log_level);
    trace!("Configuration loaded: {:?}", settings);

    // Resolved before anything is written, so a bad separator prints nothing.
    let config = match settings.resolve() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match Generator::new(config, RandomSource::os()).run(&mut out) {
        Ok(count) => {
            debug!("Wrote {} tokens", count);
            ExitCode::SUCCESS
        }
        Err(GenerateError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Generation aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn fail(e: &ConfigError) -> ExitCode {
    eprintln!("{e}");
    ExitCode::FAILURE
}
