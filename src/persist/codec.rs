//! Versioned binary encoding of `GameState`.
//!
//! ## Layout
//!
//! ```text
//! +------+---------+--------------------------+
//! | MMSV | version | bincode(GameState)       |
//! | 4 B  | 1 B     | varint, little endian    |
//! +------+---------+--------------------------+
//! ```
//!
//! Decoding never panics on hostile input: the bincode payload is read with a
//! size limit and trailing bytes are rejected.

use bincode::Options;

use super::snapshot::GameState;
use crate::error::{PersistResult, PersistenceError};

/// Leading bytes of every encoded snapshot.
pub const MAGIC: [u8; 4] = *b"MMSV";

/// Current snapshot format version.
pub const FORMAT_VERSION: u8 = 1;

/// Upper bound on an encoded payload. A 6x6 board is a few hundred bytes.
pub const MAX_PAYLOAD_BYTES: u64 = 1 << 20;

const HEADER_LEN: usize = MAGIC.len() + 1;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_PAYLOAD_BYTES)
}

/// Encode a snapshot.
pub fn encode(state: &GameState) -> PersistResult<Vec<u8>> {
    let payload = options().serialize(state)?;
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&MAGIC);
    out.push(FORMAT_VERSION);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode and validate a snapshot.
pub fn decode(bytes: &[u8]) -> PersistResult<GameState> {
    if bytes.len() < HEADER_LEN {
        return Err(PersistenceError::MalformedData(format!(
            "{} bytes is shorter than the header",
            bytes.len()
        )));
    }

    let (header, payload) = bytes.split_at(HEADER_LEN);
    if header[..MAGIC.len()] != MAGIC {
        return Err(PersistenceError::MalformedData("not a save snapshot".into()));
    }

    let version = header[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(PersistenceError::MalformedData(format!(
            "unsupported snapshot version {version}"
        )));
    }

    let state: GameState = options().deserialize(payload)?;
    state.validate()?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::snapshot::tests::sample_state;

    #[test]
    fn test_round_trip() {
        let state = sample_state();
        let bytes = encode(&state).unwrap();
        assert_eq!(&bytes[..4], b"MMSV");
        assert_eq!(bytes[4], FORMAT_VERSION);
        assert_eq!(decode(&bytes).unwrap(), state);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let state = sample_state();
        assert_eq!(encode(&state).unwrap(), encode(&state).unwrap());
    }

    #[test]
    fn test_short_input() {
        assert!(matches!(decode(b"MM"), Err(PersistenceError::MalformedData(_))));
        assert!(matches!(decode(&[]), Err(PersistenceError::MalformedData(_))));
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = encode(&sample_state()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(decode(&bytes), Err(PersistenceError::MalformedData(_))));
    }

    #[test]
    fn test_unknown_version() {
        let mut bytes = encode(&sample_state()).unwrap();
        bytes[4] = FORMAT_VERSION + 1;
        assert!(matches!(decode(&bytes), Err(PersistenceError::MalformedData(_))));
    }

    #[test]
    fn test_truncated_payload() {
        let bytes = encode(&sample_state()).unwrap();
        for cut in HEADER_LEN..bytes.len() {
            assert!(
                matches!(decode(&bytes[..cut]), Err(PersistenceError::MalformedData(_))),
                "truncation at {cut} should be rejected"
            );
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = encode(&sample_state()).unwrap();
        bytes.push(0);
        assert!(matches!(decode(&bytes), Err(PersistenceError::MalformedData(_))));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut state = sample_state();
        state.cards.matched_cards.push(false);
        let bytes = encode(&state).unwrap();
        assert!(matches!(decode(&bytes), Err(PersistenceError::MalformedData(_))));
    }

    #[test]
    fn test_huge_length_prefix_rejected() {
        let mut bytes = MAGIC.to_vec();
        bytes.push(FORMAT_VERSION);
        bytes.extend_from_slice(&[0xFF; 32]);
        assert!(matches!(decode(&bytes), Err(PersistenceError::MalformedData(_))));
    }
}
