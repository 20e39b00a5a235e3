//! Binary vault file format.
//!
//! A vault file has this layout:
//!
//! ```text
//! [ciphertext: L bytes][salt: 32 bytes][nonce: 12 bytes][tag: 16 bytes]
//! ```
//!
//! There is no magic, version or length prefix.  The fixed 60-byte
//! trailer is located from the end of the buffer, so the file length
//! alone determines `L = len - 60`.  Integrity comes solely from the
//! AES-GCM tag.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::crypto::{SealedPayload, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{Result, VaultError};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Size of the fixed trailer: salt + nonce + tag.
pub const TRAILER_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

// ---------------------------------------------------------------------------
// Packing
// ---------------------------------------------------------------------------

/// Lay out `ciphertext || salt || nonce || tag`.
///
/// Field sizes are fixed by the array types, so the output is always
/// exactly `payload.ciphertext.len() + TRAILER_LEN` bytes.
pub fn pack(salt: &[u8; SALT_LEN], payload: &SealedPayload) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.ciphertext.len() + TRAILER_LEN);

    buf.extend_from_slice(&payload.ciphertext); // L bytes
    buf.extend_from_slice(salt); // 32 bytes
    buf.extend_from_slice(&payload.nonce); // 12 bytes
    buf.extend_from_slice(&payload.tag); // 16 bytes

    buf
}

/// Split a packed buffer back into its salt and sealed payload.
pub fn unpack(data: &[u8]) -> Result<([u8; SALT_LEN], SealedPayload)> {
    let cipher_len = data
        .len()
        .checked_sub(TRAILER_LEN)
        .ok_or(VaultError::TruncatedFile(data.len()))?;

    let (ciphertext, trailer) = data.split_at(cipher_len);
    let (salt, rest) = trailer.split_at(SALT_LEN);
    let (nonce, tag) = rest.split_at(NONCE_LEN);

    let salt: [u8; SALT_LEN] = salt
        .try_into()
        .map_err(|_| VaultError::TruncatedFile(data.len()))?;
    let nonce: [u8; NONCE_LEN] = nonce
        .try_into()
        .map_err(|_| VaultError::TruncatedFile(data.len()))?;
    let tag: [u8; TAG_LEN] = tag
        .try_into()
        .map_err(|_| VaultError::TruncatedFile(data.len()))?;

    Ok((
        salt,
        SealedPayload {
            ciphertext: ciphertext.to_vec(),
            nonce,
            tag,
        },
    ))
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Read the whole vault file.
///
/// A missing file is `NoVault`; a path that names a directory is
/// `InvalidVaultPath`.
pub fn read_packed(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(VaultError::NoVault(path.to_path_buf()));
    }

    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VaultError::NoVault(path.to_path_buf()),
        ErrorKind::IsADirectory => VaultError::InvalidVaultPath(path.to_path_buf()),
        _ => VaultError::Io(e),
    })
}

/// Write a vault file to disk **atomically**.
///
/// The bytes go to a uniquely named temp file in the same directory,
/// are synced, and the temp file is then renamed over the target, so
/// readers never see a half-written vault.  The temp file is removed on
/// every failure path.  A missing parent directory is reported as
/// `InvalidVaultPath`.
pub fn write_packed(path: &Path, data: &[u8]) -> Result<()> {
    if path.file_name().is_none() || path.is_dir() {
        return Err(VaultError::InvalidVaultPath(path.to_path_buf()));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(VaultError::InvalidVaultPath(path.to_path_buf()));
    }

    let to_vault_error = |e: std::io::Error| match e.kind() {
        ErrorKind::NotFound => VaultError::InvalidVaultPath(path.to_path_buf()),
        _ => VaultError::Io(e),
    };

    // Dropping `tmp` on an early return deletes the temp file.
    let mut tmp = NamedTempFile::new_in(parent).map_err(to_vault_error)?;

    // Owner-only access on Unix.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(to_vault_error)?;
    }

    tmp.write_all(data).map_err(to_vault_error)?;
    tmp.as_file().sync_all().map_err(to_vault_error)?;

    tmp.persist(path).map_err(|e| to_vault_error(e.error))?;

    Ok(())
}
