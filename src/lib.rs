pub mod cli;
pub mod config;
pub mod constants;
pub mod input;
pub mod joiner;
pub mod output;
pub mod pipeline;

pub use joiner::{JoinStrategy, join_lines, join_lines_with};
pub use pipeline::collapse_file;
