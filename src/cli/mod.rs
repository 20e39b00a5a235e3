//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::vault::VaultStore;

/// Minimum master password length to prevent trivially weak passwords.
const MIN_MASTER_PASSWORD_LEN: usize = 8;

/// Environment variable consulted before prompting for the master password.
pub const PASSWORD_ENV: &str = "PWVAULT_PASSWORD";

/// pwvault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "pwvault", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: `vault_file` from .pwvault.toml, or passwords.vault)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty vault
    Init {
        /// Overwrite an existing vault file
        #[arg(long)]
        force: bool,
    },

    /// List stored password identifiers
    List,

    /// Print the password stored under an identifier
    Get {
        /// Password identifier
        identifier: String,
    },

    /// Store a password you choose
    Add {
        /// Password identifier (e.g. youtube)
        identifier: String,
        /// Password to store (omit for interactive prompt)
        secret: Option<String>,
    },

    /// Generate and store a random password
    Generate {
        /// Password identifier
        identifier: String,
        /// Number of characters (8-80)
        #[arg(short, long)]
        length: Option<usize>,
        /// Print the generated password
        #[arg(long)]
        show: bool,
    },

    /// Delete a stored password
    Delete {
        /// Password identifier
        identifier: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print a random password without touching any vault
    GenPassword {
        /// Number of characters (8-80)
        #[arg(short, long)]
        length: Option<usize>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Settings and vault path resolved for the current directory.
pub struct Context {
    pub settings: Settings,
    pub path: PathBuf,
}

impl Context {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;
        let path = settings.vault_path(&cwd, cli.vault.as_deref());
        Ok(Self { settings, path })
    }

    /// An unopened store configured from settings.
    pub fn store(&self) -> Result<VaultStore> {
        Ok(VaultStore::new(self.path.clone()).with_kdf(self.settings.kdf_params()?))
    }

    /// Prompt for the master password and open the vault.
    pub fn open_store(&self) -> Result<VaultStore> {
        let mut store = self.store()?;
        let password = prompt_password()?;
        store.open(&password)?;
        Ok(store)
    }
}

/// Get the master password, trying in order:
/// 1. `PWVAULT_PASSWORD` env var (scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used by `init`).
///
/// Also respects `PWVAULT_PASSWORD` for scripted usage.
/// Enforces a minimum password length.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        if pw.chars().count() < MIN_MASTER_PASSWORD_LEN {
            return Err(VaultError::CommandFailed(format!(
                "master password must be at least {MIN_MASTER_PASSWORD_LEN} characters"
            )));
        }
        return Ok(pw);
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.chars().count() < MIN_MASTER_PASSWORD_LEN {
            output::warning(&format!(
                "Master password must be at least {MIN_MASTER_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_with_length() {
        let cli = Cli::try_parse_from(["pwvault", "generate", "github", "--length", "32"]).unwrap();
        match cli.command {
            Commands::Generate {
                identifier, length, ..
            } => {
                assert_eq!(identifier, "github");
                assert_eq!(length, Some(32));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn global_vault_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["pwvault", "list", "--vault", "/tmp/x.vault"]).unwrap();
        assert_eq!(cli.vault, Some(PathBuf::from("/tmp/x.vault")));
    }
}
