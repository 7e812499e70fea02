//! Save/resume: snapshot, binary codec, encryption and the file pair.
//!
//! ## Pipeline
//!
//! ```text
//! Engine -> GameState -> codec::encode -> crypto::seal -> save file
//! Engine <- GameState <- codec::decode <- crypto::open <- save file
//! ```
//!
//! Errors keep the layers apart: `AuthenticationFailed` means the key or the
//! ciphertext is wrong, `MalformedData` means the plaintext did not decode to
//! a valid game.

pub mod snapshot;
pub mod codec;
pub mod crypto;
pub mod store;
mod files;

pub use snapshot::{BoardState, CardsState, GameState, PlayerState, PlayersState};
pub use codec::{decode, encode, FORMAT_VERSION};
pub use crypto::{load_or_create_key, open, seal, Key};
pub use store::{load, save, SavePaths, DEFAULT_KEY_FILE, DEFAULT_SAVE_FILE};
