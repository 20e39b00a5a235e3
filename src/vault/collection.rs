//! The identifier -> secret map held inside a vault.
//!
//! Serialized as `{"Passwords": {"<identifier>": "<secret>", ...}}` in
//! UTF-8 JSON; those bytes are exactly what gets encrypted.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Result, VaultError};
use crate::generator::{MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};

/// Longest identifier accepted, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 255;

/// Plaintext password map.  Only ever lives in memory.
///
/// Never cloned: `wipe` must reach every copy of the secrets.  `Debug`
/// shows identifiers only.
#[derive(Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCollection {
    #[serde(rename = "Passwords", default)]
    passwords: HashMap<String, String>,
}

impl fmt::Debug for PasswordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.passwords.keys().collect();
        ids.sort();
        f.debug_struct("PasswordCollection")
            .field("identifiers", &ids)
            .field("secrets", &"<redacted>")
            .finish()
    }
}

impl PasswordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry; existing identifiers are never overwritten.
    pub fn insert(&mut self, identifier: &str, secret: &str) -> Result<()> {
        if self.passwords.contains_key(identifier) {
            return Err(VaultError::IdentifierAlreadyExists(identifier.to_string()));
        }
        self.passwords.insert(identifier.to_string(), secret.to_string());
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.passwords.get(identifier).map(String::as_str)
    }

    pub fn remove(&mut self, identifier: &str) -> Result<()> {
        match self.passwords.remove(identifier) {
            Some(mut secret) => {
                secret.zeroize();
                Ok(())
            }
            None => Err(VaultError::IdentifierNotExist(identifier.to_string())),
        }
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &String> {
        self.passwords.keys()
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    /// Serialize to the JSON bytes that get encrypted.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        serde_json::to_vec(self)
            .map(Zeroizing::new)
            .map_err(|e| VaultError::CorruptData(format!("cannot serialize passwords: {e}")))
    }

    /// Parse decrypted bytes back into a collection.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| VaultError::CorruptData(format!("cannot parse passwords: {e}")))
    }

    /// Overwrite every secret in memory and empty the map.
    pub fn wipe(&mut self) {
        for secret in self.passwords.values_mut() {
            secret.zeroize();
        }
        self.passwords.clear();
    }
}

/// Check that an identifier is 1..=255 characters and not just whitespace.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() || identifier.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(VaultError::InvalidIdentifier);
    }
    Ok(())
}

/// Check that a stored secret is 8..=80 characters.
pub fn validate_secret(secret: &str) -> Result<()> {
    let len = secret.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(VaultError::InvalidPassword);
    }
    Ok(())
}
