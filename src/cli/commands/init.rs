//! `pwvault init` — create a new, empty vault.

use crate::cli::output;
use crate::cli::{prompt_new_password, Cli, Context};
use crate::errors::{Result, VaultError};

/// Execute the `init` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let ctx = Context::load(cli)?;

    // Creating over an existing file destroys it.
    if ctx.path.exists() && !force {
        output::tip("Pass --force to replace it (every stored password will be lost).");
        return Err(VaultError::VaultAlreadyExists(ctx.path));
    }

    let password = prompt_new_password()?;
    let mut store = ctx.store()?;
    store.create(&password)?;

    output::success(&format!("Vault created at {}", ctx.path.display()));
    output::tip("Run `pwvault add <IDENTIFIER>` to store a password.");
    output::tip("Run `pwvault generate <IDENTIFIER>` to store a random one.");

    Ok(())
}
