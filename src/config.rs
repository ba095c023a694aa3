use crate::cli::Cli;
use crate::constants::PROGRAM_NAME;
use crate::joiner::JoinStrategy;
use std::path::{Path, PathBuf};

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Name shown in the usage line, taken from argv[0].
    pub program: String,
    pub file: Option<PathBuf>,
    pub join: JoinStrategy,
}

impl Config {
    pub fn from_cli(
        cli: Cli,
        argv0: Option<&str>,
    ) -> Self {
        Config {
            program: program_name(argv0),
            file: cli.file,
            join: cli.join,
        }
    }

    pub fn usage(&self) -> String {
        format!("Usage: {} <xml file>", self.program)
    }
}

fn program_name(argv0: Option<&str>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| PROGRAM_NAME.to_string())
}
