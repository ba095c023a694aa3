use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Reads the whole file and splits it into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The terminators are dropped.
/// The file must be valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8 text", path.display()))?;
    Ok(split_lines(&text))
}

/// Splits text on any line terminator. A trailing terminator does not yield
/// an extra line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest.to_string());
                rest = "";
            }
        }
    }
    lines
}
