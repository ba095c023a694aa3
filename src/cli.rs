use crate::joiner::JoinStrategy;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xml-single-line", version)]
#[command(about = "Collapse a multi-line XML file into a single line on stdout.")]
pub struct Cli {
    /// XML file to collapse. Without it, usage is printed and the exit code is 1.
    /// Put `--` first when the path starts with `-`.
    pub file: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored, whatever their encoding.
    #[arg(hide = true)]
    pub rest: Vec<OsString>,

    /// How adjacent lines are joined.
    #[arg(long = "join", value_enum, default_value_t = JoinStrategy::Markup)]
    pub join: JoinStrategy,
}
