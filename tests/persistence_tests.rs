//! Save/resume integration tests.
//!
//! Exercise the whole file pipeline (snapshot, codec, envelope, key file)
//! against real files in a temporary directory.

use std::fs;

use memory_match::persist::{self, crypto};
use memory_match::{
    CellView, EngineBuilder, Key, Phase, PersistenceError, PlayerId, Position, SavePaths,
};

fn matched_pair(engine: &memory_match::Engine) -> (Position, Position) {
    let cards = engine.board().cards();
    let first = &cards[0];
    let twin = cards[1..]
        .iter()
        .find(|c| c.symbol == first.symbol)
        .expect("every symbol has a twin");
    (first.position, twin.position)
}

// =============================================================================
// Save / Load
// =============================================================================

/// A game saved after one match comes back with the same board, scores and turn.
#[test]
fn test_save_and_resume_mid_game() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());

    let mut engine = EngineBuilder::new().seed(11).build(4, 4).unwrap();
    let (a, b) = matched_pair(&engine);
    engine.select(a).unwrap();
    engine.select(b).unwrap();
    engine.save(&paths).unwrap();

    let loaded = EngineBuilder::new().load(&paths).unwrap();

    assert_eq!(loaded.phase(), Phase::AwaitingFirstPick);
    assert_eq!(loaded.current_player(), PlayerId::ONE);
    assert_eq!(loaded.score(PlayerId::ONE), 1);
    assert_eq!(loaded.score(PlayerId::TWO), 0);
    assert_eq!(loaded.board().symbols(), engine.board().symbols());
    assert_eq!(loaded.board().matched_flags(), engine.board().matched_flags());

    let view = loaded.snapshot();
    for (i, cell) in view.cells.iter().enumerate() {
        let card = &loaded.board().cards()[i];
        if card.position == a || card.position == b {
            assert!(matches!(cell, CellView::Matched(_)));
        } else {
            assert_eq!(*cell, CellView::Hidden);
        }
    }
}

/// Saving a pending mismatch stores only matched state; the resumed game starts a fresh turn.
#[test]
fn test_save_during_pending_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());

    let mut engine = EngineBuilder::new().seed(21).build(2, 4).unwrap();
    let cards = engine.board().cards().to_vec();
    let other = cards
        .iter()
        .find(|c| c.symbol != cards[0].symbol)
        .unwrap()
        .position;
    engine.select(cards[0].position).unwrap();
    engine.select(other).unwrap();
    assert_eq!(engine.phase(), Phase::AwaitingNextPlayerAck);

    engine.save(&paths).unwrap();
    let loaded = EngineBuilder::new().load(&paths).unwrap();

    assert_eq!(loaded.phase(), Phase::AwaitingFirstPick);
    assert!(loaded.snapshot().cells.iter().all(|c| *c == CellView::Hidden));
}

/// Loading without a save file reports `NotFound` and `has_save` agrees.
#[test]
fn test_load_without_save() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());

    assert!(!paths.has_save());
    match EngineBuilder::new().load(&paths) {
        Err(PersistenceError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// =============================================================================
// Key File
// =============================================================================

/// The key file is created on first save and reused afterwards.
#[test]
fn test_key_created_once() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());
    let engine = EngineBuilder::new().seed(1).build(2, 2).unwrap();

    engine.save(&paths).unwrap();
    let first = fs::read(&paths.key_file).unwrap();
    assert_eq!(first.len(), crypto::KEY_FILE_LEN);

    engine.save(&paths).unwrap();
    assert_eq!(fs::read(&paths.key_file).unwrap(), first);
}

/// Corrupting the key file replaces the key, after which the old save no longer opens.
#[test]
fn test_corrupt_key_is_regenerated() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());
    let engine = EngineBuilder::new().seed(9).build(4, 2).unwrap();
    engine.save(&paths).unwrap();

    let mut bytes = fs::read(&paths.key_file).unwrap();
    bytes[0] ^= 0xFF;
    fs::write(&paths.key_file, &bytes).unwrap();

    let result = EngineBuilder::new().load(&paths);
    assert!(matches!(result, Err(PersistenceError::AuthenticationFailed)));

    let regenerated = fs::read(&paths.key_file).unwrap();
    assert_eq!(regenerated.len(), crypto::KEY_FILE_LEN);
    assert_ne!(regenerated, bytes);
    assert!(crypto::read_key(&paths.key_file).is_ok());
}

/// A truncated key file is treated the same as a corrupted one.
#[test]
fn test_truncated_key_is_regenerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.key");
    fs::write(&path, [1u8; 10]).unwrap();

    assert!(matches!(
        crypto::read_key(&path),
        Err(PersistenceError::InvalidKey(_))
    ));
    let key = persist::load_or_create_key(&path).unwrap();
    assert_eq!(crypto::read_key(&path).unwrap(), key);
}

// =============================================================================
// Envelope
// =============================================================================

/// Tampering with any byte of a saved file, the version byte included, fails authentication.
#[test]
fn test_tampered_save_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());
    let engine = EngineBuilder::new().seed(2).build(2, 2).unwrap();
    engine.save(&paths).unwrap();

    let original = fs::read(&paths.save_file).unwrap();
    for i in [0, 1, original.len() / 2, original.len() - 1] {
        let mut bytes = original.clone();
        bytes[i] ^= 0x01;
        fs::write(&paths.save_file, &bytes).unwrap();
        assert!(matches!(
            persist::load(&paths),
            Err(PersistenceError::AuthenticationFailed)
        ));
    }
}

/// Sealed data opens with the key that sealed it and nothing else.
#[test]
fn test_seal_open_keys() {
    let key = Key::generate();
    let other = Key::generate();
    let sealed = persist::seal(b"state bytes", &key).unwrap();

    assert_eq!(persist::open(&sealed, &key).unwrap(), b"state bytes");
    assert!(matches!(
        persist::open(&sealed, &other),
        Err(PersistenceError::AuthenticationFailed)
    ));
}

/// Valid ciphertext holding garbage plaintext is malformed, not unauthenticated.
#[test]
fn test_authenticated_garbage_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let paths = SavePaths::in_dir(dir.path());
    let key = persist::load_or_create_key(&paths.key_file).unwrap();
    fs::write(&paths.save_file, persist::seal(b"not a game", &key).unwrap()).unwrap();

    assert!(matches!(
        persist::load(&paths),
        Err(PersistenceError::MalformedData(_))
    ));
}
