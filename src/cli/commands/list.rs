//! `pwvault list` — display stored identifiers in a table.

use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::load(cli)?;
    let store = ctx.open_store()?;

    let entries = store.entries()?;
    output::info(&format!("{}: {} password(s)", ctx.path.display(), entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}
