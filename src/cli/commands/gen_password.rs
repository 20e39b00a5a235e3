//! `pwvault gen-password` — print a random password, no vault involved.

use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::crypto::OsRandom;
use crate::errors::Result;
use crate::generator;

/// Execute the `gen-password` command.
pub fn execute(cli: &Cli, length: Option<usize>) -> Result<()> {
    let ctx = Context::load(cli)?;
    let length = length.unwrap_or(ctx.settings.random_password_length);

    output::secret(&generator::generate(&mut OsRandom, length)?);

    Ok(())
}
