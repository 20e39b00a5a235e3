//! Cryptographic primitives for pwvault.
//!
//! This module provides:
//! - Injectable random byte sources (`random`)
//! - PBKDF2-HMAC-SHA512 password-based key derivation (`kdf`)
//! - AES-256-GCM sealing and opening with a detached tag (`encryption`)

pub mod encryption;
pub mod kdf;
pub mod random;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, DerivedKey, ...};
pub use encryption::{open, seal, SealedPayload, NONCE_LEN, TAG_LEN};
pub use kdf::{derive, generate_salt, DerivedKey, KdfParams, KEY_LEN, SALT_LEN};
pub use random::{OsRandom, RandomSource, SeededRandom};
