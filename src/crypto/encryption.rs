//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! Each call to `seal` draws a fresh random 12-byte nonce from the
//! supplied `RandomSource`.  The ciphertext has exactly the length of the
//! plaintext; the 16-byte tag and the nonce travel beside it in a
//! `SealedPayload` so the packer can lay them out independently.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use zeroize::Zeroizing;

use super::kdf::KEY_LEN;
use super::random::{random_array, RandomSource};
use crate::errors::{Result, VaultError};

/// Size of the AES-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Output of one encryption: ciphertext plus the nonce and tag needed to
/// open it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    pub ciphertext: Vec<u8>,
    pub nonce: [u8; NONCE_LEN],
    pub tag: [u8; TAG_LEN],
}

/// Encrypt `plaintext` under `key` with a freshly drawn nonce.
pub fn seal(
    rng: &mut dyn RandomSource,
    key: &[u8; KEY_LEN],
    plaintext: &[u8],
) -> Result<SealedPayload> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce: [u8; NONCE_LEN] = random_array(rng)?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut buffer)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    Ok(SealedPayload {
        ciphertext: buffer,
        nonce,
        tag: tag_bytes,
    })
}

/// Verify and decrypt a payload produced by `seal`.
///
/// The tag is checked over the whole ciphertext before any keystream is
/// applied, so a wrong key or a single flipped bit yields
/// `DecryptionFailed` and no plaintext at all.
pub fn open(key: &[u8; KEY_LEN], payload: &SealedPayload) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| VaultError::DecryptionFailed)?;

    let mut buffer = Zeroizing::new(payload.ciphertext.clone());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&payload.nonce),
            b"",
            &mut *buffer,
            Tag::from_slice(&payload.tag),
        )
        .map_err(|_| VaultError::DecryptionFailed)?;

    Ok(buffer)
}
