use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in pwvault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Lifecycle errors ---
    #[error("The vault was not loaded correctly (no password collection)")]
    NotValid,

    #[error("The vault was not loaded correctly (no derived key)")]
    MissingKey,

    // --- Input validation errors ---
    #[error("Invalid identifier — must be between 1 and 255 characters")]
    InvalidIdentifier,

    #[error("Invalid password — must be between 8 and 80 characters long")]
    InvalidPassword,

    #[error("Identifier '{0}' already exists — choose another or delete it first")]
    IdentifierAlreadyExists(String),

    #[error("No password stored under identifier '{0}'")]
    IdentifierNotExist(String),

    #[error("Password length {0} is out of range (8-80 characters)")]
    InvalidPasswordLength(usize),

    // --- Crypto errors ---
    #[error("Wrong master password or the vault has been tampered with")]
    InvalidMasterPassword,

    #[error("Decryption failed — authentication tag mismatch")]
    DecryptionFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Random number generator unavailable: {0}")]
    RandomUnavailable(String),

    // --- Vault file errors ---
    #[error("No vault found at {0}")]
    NoVault(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Invalid vault location {0} — make sure the directory exists")]
    InvalidVaultPath(PathBuf),

    #[error("Vault file is {0} bytes, too short to hold the salt, nonce and tag")]
    TruncatedFile(usize),

    #[error("Vault contents are corrupt: {0}")]
    CorruptData(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Payload-free reason code for a [`VaultError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    NotValid,
    MissingKey,
    InvalidIdentifier,
    InvalidPassword,
    IdentifierAlreadyExists,
    IdentifierNotExist,
    InvalidMasterPassword,
    InvalidVaultPath,
    NoVault,
    IoError,
    CorruptData,
    Crypto,
    Config,
    Cli,
}

impl VaultError {
    /// Map the error onto the vault's reason taxonomy.
    pub fn reason(&self) -> ErrorReason {
        match self {
            Self::NotValid => ErrorReason::NotValid,
            Self::MissingKey => ErrorReason::MissingKey,
            Self::InvalidIdentifier => ErrorReason::InvalidIdentifier,
            Self::InvalidPassword | Self::InvalidPasswordLength(_) => ErrorReason::InvalidPassword,
            Self::IdentifierAlreadyExists(_) => ErrorReason::IdentifierAlreadyExists,
            Self::IdentifierNotExist(_) => ErrorReason::IdentifierNotExist,
            Self::InvalidMasterPassword => ErrorReason::InvalidMasterPassword,
            Self::InvalidVaultPath(_) | Self::VaultAlreadyExists(_) => {
                ErrorReason::InvalidVaultPath
            }
            Self::NoVault(_) => ErrorReason::NoVault,
            Self::Io(_) => ErrorReason::IoError,
            Self::TruncatedFile(_) | Self::CorruptData(_) => ErrorReason::CorruptData,
            Self::DecryptionFailed
            | Self::EncryptionFailed(_)
            | Self::KeyDerivationFailed(_)
            | Self::RandomUnavailable(_) => ErrorReason::Crypto,
            Self::ConfigError(_) => ErrorReason::Config,
            Self::CommandFailed(_) => ErrorReason::Cli,
        }
    }
}

/// Convenience type alias for pwvault results.
pub type Result<T> = std::result::Result<T, VaultError>;
