//! Authenticated encryption of save data and key-file lifecycle.
//!
//! # Sealed envelope
//!
//! ```text
//! +---------+------------------+------------------------------+
//! | version | nonce            | ciphertext || Poly1305 tag   |
//! | 1 B     | 24 B (random)    | n + 16 B                     |
//! +---------+------------------+------------------------------+
//! ```
//!
//! XChaCha20-Poly1305's 192-bit nonce is large enough to pick at random for
//! every save under one long-lived key. The version byte is bound to the
//! ciphertext as associated data, so it cannot be altered without failing
//! authentication.
//!
//! # Key file
//!
//! 32 raw key bytes followed by the first 8 bytes of their SHA-256 digest.
//! The checksum lets a damaged key file be told apart from a wrong key.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use log::{info, warn};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use super::files::write_atomic;
use crate::error::{PersistResult, PersistenceError};

/// Symmetric key length in bytes.
pub const KEY_LEN: usize = 32;

/// Key-file checksum length in bytes.
pub const CHECKSUM_LEN: usize = 8;

/// Exact size of a well-formed key file.
pub const KEY_FILE_LEN: usize = KEY_LEN + CHECKSUM_LEN;

/// XChaCha20 nonce length in bytes.
pub const NONCE_LEN: usize = 24;

/// Poly1305 tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Current sealed-envelope version.
pub const ENVELOPE_VERSION: u8 = 1;

const ENVELOPE_HEADER_LEN: usize = 1 + NONCE_LEN;

/// A save-encryption key.
#[derive(Clone, PartialEq, Eq)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Generate a fresh key from the OS RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap raw key bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the on-disk key-file format.
    pub fn from_file_bytes(bytes: &[u8]) -> PersistResult<Self> {
        if bytes.len() != KEY_FILE_LEN {
            return Err(PersistenceError::InvalidKey(format!(
                "expected {KEY_FILE_LEN} bytes, found {}",
                bytes.len()
            )));
        }

        let (raw, checksum) = bytes.split_at(KEY_LEN);
        if checksum != &Sha256::digest(raw)[..CHECKSUM_LEN] {
            return Err(PersistenceError::InvalidKey("checksum mismatch".into()));
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(raw);
        Ok(Self(key))
    }

    /// Serialize to the on-disk key-file format.
    #[must_use]
    pub fn to_file_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(KEY_FILE_LEN);
        out.extend_from_slice(&self.0);
        out.extend_from_slice(&Sha256::digest(self.0)[..CHECKSUM_LEN]);
        out
    }

    fn cipher(&self) -> XChaCha20Poly1305 {
        XChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(&self.0))
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(..)")
    }
}

/// Read a key file.
///
/// Fails with `Io` if it cannot be read and `InvalidKey` if it is damaged.
pub fn read_key(path: &Path) -> PersistResult<Key> {
    let bytes = fs::read(path)?;
    Key::from_file_bytes(&bytes)
}

/// Write a key file, creating parent directories.
pub fn write_key(path: &Path, key: &Key) -> PersistResult<()> {
    write_atomic(path, &key.to_file_bytes(), true)?;
    Ok(())
}

/// Load the key at `path`, creating it if absent.
///
/// A damaged key file is replaced by a new key once. Saves sealed with the old
/// key can no longer be opened; that loss is logged, not hidden.
pub fn load_or_create_key(path: &Path) -> PersistResult<Key> {
    match read_key(path) {
        Ok(key) => Ok(key),
        Err(PersistenceError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            info!("No key file at {}, generating a new key", path.display());
            let key = Key::generate();
            write_key(path, &key)?;
            Ok(key)
        }
        Err(PersistenceError::InvalidKey(reason)) => {
            warn!(
                "Key file {} is invalid ({}); generating a new key, existing saves will not open",
                path.display(),
                reason
            );
            let key = Key::generate();
            write_key(path, &key)?;
            Ok(key)
        }
        Err(err) => Err(err),
    }
}

/// Encrypt and authenticate `plaintext`.
pub fn seal(plaintext: &[u8], key: &Key) -> PersistResult<Vec<u8>> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = key
        .cipher()
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &[ENVELOPE_VERSION],
            },
        )
        .map_err(|_| PersistenceError::MalformedData("plaintext too large to seal".into()))?;

    let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + ciphertext.len());
    out.push(ENVELOPE_VERSION);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Verify and decrypt a sealed envelope.
///
/// Wrong keys, tampering (including of the version byte) and truncation all
/// surface as `AuthenticationFailed`. `MalformedData` is left to the codec,
/// for plaintext that authenticated but does not decode.
pub fn open(sealed: &[u8], key: &Key) -> PersistResult<Vec<u8>> {
    if sealed.len() < ENVELOPE_HEADER_LEN + TAG_LEN {
        return Err(PersistenceError::AuthenticationFailed);
    }

    let (version, rest) = sealed.split_at(1);
    if version[0] != ENVELOPE_VERSION {
        return Err(PersistenceError::AuthenticationFailed);
    }

    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);
    key.cipher()
        .decrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: version,
            },
        )
        .map_err(|_| PersistenceError::AuthenticationFailed)
}
