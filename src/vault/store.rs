//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` drives the whole pipeline: password + salt -> key ->
//! AES-GCM over the serialized collection -> packed file bytes.  It owns
//! the derived key and the plaintext collection while open, and every
//! operation other than create/open/dispose refuses to run unless both
//! are present.
//!
//! Mutations only touch memory.  Nothing reaches the disk until `save`.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::crypto::{self, DerivedKey, KdfParams, OsRandom, RandomSource};
use crate::errors::{Result, VaultError};
use crate::generator;

use super::collection::{validate_identifier, validate_secret, PasswordCollection};
use super::format;

/// The main vault handle.
///
/// Build one with `VaultStore::new`, then call `create` or `open`.
/// `VaultStore::create_at` / `VaultStore::open_at` do both in one step.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// PBKDF2 settings; must match the ones the vault was created with.
    kdf: KdfParams,

    /// Source of salts, nonces and generated passwords.
    rng: Box<dyn RandomSource>,

    /// The derived key and its salt (zeroized on drop).
    derived_key: Option<DerivedKey>,

    /// Decrypted identifier -> secret map.
    collection: Option<PasswordCollection>,

    /// Set by `dispose`; a disposed store never becomes valid again.
    disposed: bool,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// An uninitialized store pointing at `path`.  No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kdf: KdfParams::default(),
            rng: Box::new(OsRandom),
            derived_key: None,
            collection: None,
            disposed: false,
        }
    }

    /// Use non-default PBKDF2 parameters.
    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    /// Replace the OS random source, e.g. with a seeded one in tests.
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Create a new vault at `path` and return it open.
    pub fn create_at(path: impl Into<PathBuf>, password: &str) -> Result<Self> {
        let mut store = Self::new(path);
        store.create(password)?;
        Ok(store)
    }

    /// Open an existing vault at `path`.
    pub fn open_at(path: impl Into<PathBuf>, password: &str) -> Result<Self> {
        let mut store = Self::new(path);
        store.open(password)?;
        Ok(store)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Create an empty vault file protected by `password`.
    ///
    /// Draws a fresh salt, derives the key, writes the empty collection
    /// and then re-opens the file from disk so the format is verified
    /// end to end before returning.  An existing file is overwritten.
    pub fn create(&mut self, password: &str) -> Result<()> {
        self.ensure_not_disposed()?;
        self.clear();

        let key = DerivedKey::generate(password, self.rng.as_mut(), &self.kdf)?;
        self.derived_key = Some(key);
        self.collection = Some(PasswordCollection::new());

        if let Err(e) = self.save() {
            self.clear();
            return Err(e);
        }
        debug!(path = %self.path.display(), "vault created");

        self.open(password)
    }

    /// Read, unpack, derive, decrypt and deserialize the vault file.
    ///
    /// All four steps must succeed.  On any failure the store is left
    /// with neither a key nor a collection.
    pub fn open(&mut self, password: &str) -> Result<()> {
        self.ensure_not_disposed()?;
        self.clear();

        match self.load(password) {
            Ok((key, collection)) => {
                debug!(
                    path = %self.path.display(),
                    entries = collection.len(),
                    "vault opened"
                );
                self.derived_key = Some(key);
                self.collection = Some(collection);
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), reason = ?e.reason(), "failed to open vault");
                Err(e)
            }
        }
    }

    fn load(&self, password: &str) -> Result<(DerivedKey, PasswordCollection)> {
        let raw = format::read_packed(&self.path)?;
        let (salt, payload) = format::unpack(&raw)?;

        let key = DerivedKey::derive(password, salt, &self.kdf)?;

        // A tag mismatch is the only wrong-password signal there is.
        let plaintext = crypto::open(key.key(), &payload).map_err(|e| match e {
            VaultError::DecryptionFailed => VaultError::InvalidMasterPassword,
            other => other,
        })?;

        let collection = PasswordCollection::from_bytes(&plaintext)?;
        Ok((key, collection))
    }

    /// Encrypt the collection under the existing key and overwrite the file.
    ///
    /// Every save draws a new nonce (and therefore produces a new tag);
    /// the salt stays the one chosen at creation.
    pub fn save(&mut self) -> Result<()> {
        let collection = self.collection.as_ref().ok_or(VaultError::NotValid)?;
        let key = self.derived_key.as_ref().ok_or(VaultError::MissingKey)?;

        let plaintext = collection.to_bytes()?;
        let sealed = crypto::seal(self.rng.as_mut(), key.key(), &plaintext)?;
        let packed = format::pack(key.salt(), &sealed);
        format::write_packed(&self.path, &packed)?;

        debug!(
            path = %self.path.display(),
            entries = collection.len(),
            bytes = packed.len(),
            "vault saved"
        );
        Ok(())
    }

    /// Wipe the key and collection.  Unsaved changes are lost and the
    /// store rejects every later operation.  Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if !self.disposed {
            debug!(path = %self.path.display(), "vault disposed");
        }
        self.clear();
        self.disposed = true;
    }

    fn clear(&mut self) {
        if let Some(collection) = self.collection.as_mut() {
            collection.wipe();
        }
        self.collection = None;
        self.derived_key = None;
    }

    fn ensure_not_disposed(&self) -> Result<()> {
        if self.disposed {
            return Err(VaultError::NotValid);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Password operations
    // ------------------------------------------------------------------

    /// Identifiers currently stored, sorted.
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.collection()?.identifiers().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// Look up the secret stored under `identifier`.
    pub fn get_secret(&self, identifier: &str) -> Result<&str> {
        let collection = self.collection()?;
        validate_identifier(identifier)?;
        collection
            .get(identifier)
            .ok_or_else(|| VaultError::IdentifierNotExist(identifier.to_string()))
    }

    /// Store `secret` under a new `identifier` (memory only).
    pub fn create_password(&mut self, identifier: &str, secret: &str) -> Result<()> {
        let collection = self.collection_mut()?;
        validate_identifier(identifier)?;
        validate_secret(secret)?;
        collection.insert(identifier, secret)
    }

    /// Generate a `length`-character password and store it under
    /// `identifier`.  Returns the generated secret.
    pub fn create_random_password(&mut self, identifier: &str, length: usize) -> Result<String> {
        self.collection()?;
        validate_identifier(identifier)?;

        let secret = generator::generate(self.rng.as_mut(), length)?;
        self.create_password(identifier, &secret)?;
        Ok(secret)
    }

    /// Remove the entry under `identifier` (memory only).
    pub fn delete_password(&mut self, identifier: &str) -> Result<()> {
        let collection = self.collection_mut()?;
        validate_identifier(identifier)?;
        collection.remove(identifier)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` when both the key and the collection are loaded.
    pub fn is_open(&self) -> bool {
        self.derived_key.is_some() && self.collection.is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize> {
        Ok(self.collection()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.collection()?.is_empty())
    }

    // ------------------------------------------------------------------
    // Validity checks
    // ------------------------------------------------------------------

    fn collection(&self) -> Result<&PasswordCollection> {
        let collection = self.collection.as_ref().ok_or(VaultError::NotValid)?;
        if self.derived_key.is_none() {
            return Err(VaultError::MissingKey);
        }
        Ok(collection)
    }

    fn collection_mut(&mut self) -> Result<&mut PasswordCollection> {
        if self.derived_key.is_none() && self.collection.is_some() {
            return Err(VaultError::MissingKey);
        }
        self.collection.as_mut().ok_or(VaultError::NotValid)
    }
}

impl Drop for VaultStore {
    fn drop(&mut self) {
        self.clear();
    }
}
