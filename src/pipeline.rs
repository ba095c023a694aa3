use crate::input;
use crate::joiner::{self, JoinStrategy};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Pipeline for reading a file and collapsing it into one line.
#[derive(Default)]
pub struct Pipeline {
    input_lines: Vec<String>,
    kept_lines: Vec<String>,
    output: Option<String>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the source file into memory.
    pub fn read_input(
        &mut self,
        path: &Path,
    ) -> Result<()> {
        self.input_lines = input::read_lines(path)?;
        debug!(path = %path.display(), lines = self.input_lines.len(), "read input");
        Ok(())
    }

    pub fn set_input_lines(
        &mut self,
        lines: Vec<String>,
    ) {
        self.input_lines = lines;
    }

    /// Trim lines and drop the empty ones.
    pub fn keep_lines(&mut self) {
        self.kept_lines = joiner::kept_lines(&self.input_lines)
            .into_iter()
            .map(str::to_owned)
            .collect();
        debug!(
            kept = self.kept_lines.len(),
            dropped = self.input_lines.len() - self.kept_lines.len(),
            "normalized lines"
        );
    }

    /// Join the kept lines into the final output line.
    pub fn join(
        &mut self,
        strategy: JoinStrategy,
    ) {
        // re-trimming kept lines is a no-op
        let line = joiner::join_lines_with(&self.kept_lines, strategy);
        debug!(?strategy, bytes = line.len(), "joined lines");
        self.output = Some(line);
    }

    pub fn input_lines(&self) -> &[String] {
        &self.input_lines
    }

    pub fn kept_lines(&self) -> &[String] {
        &self.kept_lines
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

/// Runs every stage for `path` and returns the joined line.
pub fn collapse_file(
    path: &Path,
    strategy: JoinStrategy,
) -> Result<String> {
    let mut pipeline = Pipeline::new();
    pipeline.read_input(path)?;
    pipeline.keep_lines();
    pipeline.join(strategy);
    Ok(pipeline.output.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_track_counts() {
        let mut p = Pipeline::new();
        p.set_input_lines(vec!["<a>".into(), "  ".into(), "x".into(), "</a>".into()]);
        p.keep_lines();
        assert_eq!(p.input_lines().len(), 4);
        assert_eq!(p.kept_lines(), ["<a>", "x", "</a>"]);
        assert!(p.output().is_none());
        p.join(JoinStrategy::Markup);
        assert_eq!(p.output(), Some("<a> x </a>"));
    }
}
