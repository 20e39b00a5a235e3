//! Random password generation.
//!
//! Each output character consumes one 8-byte little-endian draw reduced
//! modulo the alphabet size.  With 94 symbols and a 64-bit draw the
//! modulo bias is below 2^-57 per character.

use crate::crypto::random::RandomSource;
use crate::errors::{Result, VaultError};

/// Shortest password the vault accepts or generates.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Longest password the vault accepts or generates.
pub const MAX_PASSWORD_LEN: usize = 80;

/// Characters a generated password may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$%^&*()-_+=[]{};':<>?,./|\"\\~`";

/// Generate a random password of exactly `length` characters.
pub fn generate(rng: &mut dyn RandomSource, length: usize) -> Result<String> {
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&length) {
        return Err(VaultError::InvalidPasswordLength(length));
    }

    let alphabet_len = ALPHABET.len() as u64;
    let mut password = String::with_capacity(length);
    let mut draw = [0u8; 8];

    for _ in 0..length {
        rng.fill(&mut draw)?;
        let index = u64::from_le_bytes(draw) % alphabet_len;
        password.push(char::from(ALPHABET[index as usize]));
    }

    Ok(password)
}
