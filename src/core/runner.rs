use crate::core::{Result, Script};
use std::io::Write;

/// Prints the script's status line to `out` and flushes it.
pub fn run<S: Script, W: Write>(script: &S, mut out: W) -> Result<()> {
    match serde_json::to_string(script) {
        Ok(args) => tracing::debug!(script = script.name(), %args, "Parsed arguments"),
        Err(e) => tracing::warn!(script = script.name(), "Could not serialize arguments: {}", e),
    }

    let line = script.status_line();
    writeln!(out, "{}", line)?;
    out.flush()?;

    tracing::debug!(script = script.name(), "Status line written");
    Ok(())
}
