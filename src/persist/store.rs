//! Save/key file pair handling.
//!
//! `save` runs `GameState -> encode -> seal -> save file`; `load` runs the
//! reverse. The key is loaded (or created) from the key file on every call, so
//! the pair on disk is the only state.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use serde::{Deserialize, Serialize};

use super::codec;
use super::crypto;
use super::files::write_atomic;
use super::snapshot::GameState;
use crate::error::{PersistResult, PersistenceError};

/// Default save file name.
pub const DEFAULT_SAVE_FILE: &str = "game_save.dat";

/// Default key file name.
pub const DEFAULT_KEY_FILE: &str = "save.key";

/// The save file and the key file that encrypts it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavePaths {
    pub save_file: PathBuf,
    pub key_file: PathBuf,
}

impl Default for SavePaths {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE, DEFAULT_KEY_FILE)
    }
}

impl SavePaths {
    /// Create a path pair. Empty paths fall back to the default file names.
    pub fn new(save_file: impl Into<PathBuf>, key_file: impl Into<PathBuf>) -> Self {
        Self {
            save_file: or_default(save_file.into(), DEFAULT_SAVE_FILE),
            key_file: or_default(key_file.into(), DEFAULT_KEY_FILE),
        }
    }

    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::default().resolved_against(dir)
    }

    /// Resolve relative paths against `base`. Absolute paths are kept.
    #[must_use]
    pub fn resolved_against(&self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            save_file: base.join(&self.save_file),
            key_file: base.join(&self.key_file),
        }
    }

    /// Whether a save file exists.
    #[must_use]
    pub fn has_save(&self) -> bool {
        self.save_file.is_file()
    }
}

fn or_default(path: PathBuf, default: &str) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(default)
    } else {
        path
    }
}

/// Encrypt and write a snapshot.
pub fn save(paths: &SavePaths, state: &GameState) -> PersistResult<()> {
    let key = crypto::load_or_create_key(&paths.key_file)?;
    let sealed = crypto::seal(&codec::encode(state)?, &key)?;
    write_atomic(&paths.save_file, &sealed, false)?;

    info!(
        "Saved game to {} (key {})",
        paths.save_file.display(),
        paths.key_file.display()
    );
    Ok(())
}

/// Read, decrypt and decode a snapshot.
///
/// A missing save file is `Io` with `NotFound`.
pub fn load(paths: &SavePaths) -> PersistResult<GameState> {
    let sealed = fs::read(&paths.save_file)?;
    let key = crypto::load_or_create_key(&paths.key_file)?;

    let plaintext = crypto::open(&sealed, &key).map_err(|err| {
        if matches!(err, PersistenceError::AuthenticationFailed) {
            error!(
                "Save file {} failed authentication; it is corrupted or was sealed with another key",
                paths.save_file.display()
            );
        }
        err
    })?;

    let state = codec::decode(&plaintext)?;
    info!("Loaded game from {}", paths.save_file.display());
    Ok(state)
}
