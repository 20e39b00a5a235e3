//! `pwvault delete` — remove a stored password.

use crate::cli::output;
use crate::cli::{confirm, Cli, Context};
use crate::errors::Result;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, identifier: &str, force: bool) -> Result<()> {
    let ctx = Context::load(cli)?;

    // Open first and make sure the entry exists, so a confirmed delete
    // can only fail on the write.
    let mut store = ctx.open_store()?;
    store.get_secret(identifier)?;

    if !force && !confirm(&format!("Delete password '{identifier}'?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    store.delete_password(identifier)?;
    store.save()?;

    output::success(&format!("Deleted '{identifier}'"));

    Ok(())
}
