pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod generator;
pub mod vault;

pub use errors::{ErrorReason, Result, VaultError};
pub use vault::VaultStore;
