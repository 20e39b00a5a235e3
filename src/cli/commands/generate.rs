//! `pwvault generate` — store a freshly generated random password.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::Result;

/// Execute the `generate` command.
pub fn execute(cli: &Cli, identifier: &str, length: Option<usize>, show: bool) -> Result<()> {
    let ctx = Context::load(cli)?;
    let length = length.unwrap_or(ctx.settings.random_password_length);

    let mut store = ctx.open_store()?;
    let secret = Zeroizing::new(store.create_random_password(identifier, length)?);
    store.save()?;

    output::success(&format!(
        "Stored a {length}-character random password under '{identifier}'"
    ));
    if show {
        output::secret(&secret);
    } else {
        output::tip(&format!("Run `pwvault get {identifier}` to reveal it."));
    }

    Ok(())
}
