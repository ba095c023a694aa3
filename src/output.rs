use anyhow::Result;
use std::io::Write;

/// Writes the joined line followed by a single newline.
pub fn write_line<W: Write>(
    out: &mut W,
    line: &str,
) -> Result<()> {
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
