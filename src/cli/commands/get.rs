//! `pwvault get` — print a single stored password.

use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, identifier: &str) -> Result<()> {
    let ctx = Context::load(cli)?;
    let store = ctx.open_store()?;

    // Plain stdout so the value can be piped.
    output::secret(store.get_secret(identifier)?);

    Ok(())
}
