//! `pwvault add` — store a password chosen by the user.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::{Result, VaultError};

/// Execute the `add` command.
pub fn execute(cli: &Cli, identifier: &str, secret: Option<&str>) -> Result<()> {
    let ctx = Context::load(cli)?;

    // Determine the secret from one of three sources.
    let secret = if let Some(s) = secret {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        Zeroizing::new(s.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end().to_string())
    } else {
        // Source 3: Interactive secure prompt (default).
        let pw = dialoguer::Password::new()
            .with_prompt(format!("Password for {identifier}"))
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))?;
        Zeroizing::new(pw)
    };

    let mut store = ctx.open_store()?;
    store.create_password(identifier, &secret)?;
    store.save()?;

    output::success(&format!("Stored '{identifier}' ({} total)", store.len()?));

    Ok(())
}
