//! Vault module — encrypted password storage.
//!
//! This module provides:
//! - The in-memory `PasswordCollection` and its JSON form (`collection`)
//! - The packed binary file layout and atomic file I/O (`format`)
//! - High-level `VaultStore` for creating, opening, and managing vaults (`store`)

pub mod collection;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use collection::{validate_identifier, validate_secret, PasswordCollection};
pub use format::{pack, unpack, TRAILER_LEN};
pub use store::VaultStore;
