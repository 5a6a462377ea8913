use std::fs::OpenOptions;
use std::io::Write;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use sn_core::{apply_action, GameState};

use crate::record::{replay, GameRecordV1, ReplayError, RECORD_SCHEMA_VERSION};
use crate::writer::{read_records, RecordWriter};

fn random_finished_game(seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut s = GameState::new();
    while !s.is_terminal() {
        let legal = s.legal_actions();
        let id = legal[rng.gen_range(0..legal.len())];
        apply_action(&mut s, id);
    }
    s
}

#[test]
fn record_roundtrips_through_ndjson() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.ndjson");

    let records: Vec<GameRecordV1> = (0..3)
        .map(|seed| GameRecordV1::from_state(&random_finished_game(seed)).unwrap())
        .collect();

    let mut w = RecordWriter::open_append(&path).unwrap();
    for r in &records {
        w.append(r).unwrap();
    }
    w.flush().unwrap();

    assert_eq!(read_records(&path).unwrap(), records);
}

#[test]
fn reader_tolerates_trailing_partial_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.ndjson");

    let record = GameRecordV1::from_state(&random_finished_game(7)).unwrap();
    {
        let mut w = RecordWriter::open_append(&path).unwrap();
        w.append(&record).unwrap();
        w.flush().unwrap();
    }

    // Simulate a crash mid-write: a partial JSON line with no newline.
    let mut f = OpenOptions::new().append(true).open(&path).unwrap();
    f.write_all(br#"{"schema_version":1,"actions":["#).unwrap();
    f.flush().unwrap();

    assert_eq!(read_records(&path).unwrap(), vec![record]);
}

#[test]
fn running_game_has_no_record() {
    let s = GameState::new();
    assert!(GameRecordV1::from_state(&s).is_none());
}

#[test]
fn replay_reconstructs_the_recorded_game() {
    let finished = random_finished_game(42);
    let record = GameRecordV1::from_state(&finished).unwrap();
    assert_eq!(record.plies as usize, finished.history().len());

    let replayed = replay(&record).unwrap();
    assert_eq!(replayed, finished);
}

#[test]
fn replay_rejects_bad_records() {
    let record = GameRecordV1::from_state(&random_finished_game(3)).unwrap();

    let mut wrong_schema = record.clone();
    wrong_schema.schema_version = RECORD_SCHEMA_VERSION + 1;
    assert!(matches!(replay(&wrong_schema), Err(ReplayError::Schema(_))));

    let mut bad_text = record.clone();
    bad_text.actions[0] = "garbage".to_string();
    assert!(matches!(replay(&bad_text), Err(ReplayError::Parse { ply: 0, .. })));

    // A well-formed action that is illegal where it appears: repeating the
    // first placement.
    let mut illegal = record.clone();
    illegal.actions[1] = illegal.actions[0].clone();
    assert!(matches!(
        replay(&illegal),
        Err(ReplayError::IllegalAction { ply: 1, .. })
    ));

    let mut truncated = record.clone();
    truncated.actions.pop();
    assert!(matches!(replay(&truncated), Err(ReplayError::NotTerminal)));

    let mut flipped = record;
    flipped.winner = 1 - flipped.winner;
    assert!(matches!(
        replay(&flipped),
        Err(ReplayError::WinnerMismatch { .. })
    ));
}
