//! Password-based key derivation using PBKDF2-HMAC-SHA512.
//!
//! The vault file stores only the salt, never the iteration count, so
//! every open must use the same `KdfParams` that created the vault.
//! The default (200 000 iterations) keeps a single derivation well under
//! a second on commodity hardware while making offline guessing slow.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::random::{random_array, RandomSource};
use crate::errors::{Result, VaultError};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Iteration count used when nothing else is configured.
pub const DEFAULT_ITERATIONS: u32 = 200_000;

/// Lowest iteration count we accept.
pub const MIN_ITERATIONS: u32 = 10_000;

/// Tunable PBKDF2 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of HMAC-SHA512 rounds.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    pub fn new(iterations: u32) -> Result<Self> {
        let params = Self { iterations };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations < MIN_ITERATIONS {
            return Err(VaultError::KeyDerivationFailed(format!(
                "PBKDF2 iterations must be at least {MIN_ITERATIONS} (got {})",
                self.iterations
            )));
        }
        Ok(())
    }
}

/// Derive `output_len` key bytes from a password and salt.
///
/// Pure and deterministic: the same password, salt, length and params
/// always produce the same bytes.
pub fn derive(
    password: &str,
    salt: &[u8; SALT_LEN],
    output_len: usize,
    params: &KdfParams,
) -> Result<Zeroizing<Vec<u8>>> {
    params.validate()?;
    if output_len == 0 {
        return Err(VaultError::KeyDerivationFailed(
            "output length must be at least 1 byte".into(),
        ));
    }

    let mut out = Zeroizing::new(vec![0u8; output_len]);
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, params.iterations, &mut out);
    Ok(out)
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt(rng: &mut dyn RandomSource) -> Result<[u8; SALT_LEN]> {
    random_array(rng)
}

/// A vault key together with the salt it was derived from.
///
/// The key bytes are wiped when the value is dropped.  The salt is not
/// secret but is kept alongside so re-saving never has to re-derive.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    salt: [u8; SALT_LEN],
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Derive a key for a brand-new vault using a freshly drawn salt.
    pub fn generate(
        password: &str,
        rng: &mut dyn RandomSource,
        params: &KdfParams,
    ) -> Result<Self> {
        let salt = generate_salt(rng)?;
        Self::derive(password, salt, params)
    }

    /// Re-derive the key of an existing vault from its stored salt.
    pub fn derive(password: &str, salt: [u8; SALT_LEN], params: &KdfParams) -> Result<Self> {
        let bytes = derive(password, &salt, KEY_LEN, params)?;
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);
        Ok(Self { salt, key })
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("salt", &self.salt)
            .field("key", &"<redacted>")
            .finish()
    }
}
