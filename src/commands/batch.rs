use crate::analyzers::{load_units, AstProvider};
use crate::cli::BatchArgs;
use anyhow::{Context, Result};
use std::io::Write;

/// Loads the directory once, runs one query, and prints its report lines.
pub fn run_batch(args: &BatchArgs, provider: &dyn AstProvider, out: &mut dyn Write) -> Result<()> {
    let units = load_units(provider, &args.dir);
    log::info!(
        "Running query {} over {} compilation units (threshold {})",
        args.query,
        units.len(),
        args.threshold
    );

    for line in args.query.run(&units, args.threshold) {
        writeln!(out, "{line}").context("Failed to write report")?;
    }
    out.flush().context("Failed to write report")?;
    Ok(())
}
