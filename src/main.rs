use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use xml_single_line::cli::Cli;
use xml_single_line::config::Config;
use xml_single_line::constants::{DEFAULT_LOG_FILTER, USAGE_EXIT_CODE};
use xml_single_line::{output, pipeline};

fn main() -> Result<ExitCode> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let argv0 = std::env::args_os()
        .next()
        .map(|a| a.to_string_lossy().into_owned());
    let config = Config::from_cli(Cli::parse(), argv0.as_deref());

    // No file: report usage before touching the filesystem.
    let Some(path) = config.file.as_deref() else {
        println!("{}", config.usage());
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    };

    let line = pipeline::collapse_file(path, config.join)?;
    output::write_line(&mut std::io::stdout().lock(), &line)?;
    Ok(ExitCode::SUCCESS)
}
