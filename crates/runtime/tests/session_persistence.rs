use std::fs;

use game_core::{Face, Phase, SessionState};
use runtime::{FileSnapshotRepository, GameSession, RepositoryError, SnapshotRepository};
use tempfile::TempDir;

fn repo(dir: &TempDir) -> Box<FileSnapshotRepository> {
    Box::new(FileSnapshotRepository::new(dir.path().join("session.json")).unwrap())
}

#[test]
fn snapshot_round_trip_reproduces_the_state() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::with_repository(42, repo(&dir), false);
    session
        .start_game(vec!["ada".into(), "grace".into()], 4)
        .unwrap();
    session.roll(Some(Face::Two), false).unwrap();
    session.roll(Some(Face::Two), false).unwrap();
    session.save().unwrap();

    let mut restored = GameSession::with_repository(0, repo(&dir), false);
    assert!(restored.restore().unwrap());
    assert_eq!(restored.state(), session.state());
}

#[test]
fn missing_snapshot_restores_nothing() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::with_repository(7, repo(&dir), false);

    assert!(!session.restore().unwrap());
    assert_eq!(session.state(), &SessionState::with_seed(7));
}

#[test]
fn corrupt_snapshot_falls_back_to_fresh_setup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, b"{ not json").unwrap();

    let mut session = GameSession::with_repository(
        11,
        Box::new(FileSnapshotRepository::new(&path).unwrap()),
        false,
    );

    assert!(!session.restore().unwrap());
    assert_eq!(session.state().phase, Phase::Setup);
    assert_eq!(session.state(), &SessionState::with_seed(11));
}

#[test]
fn structurally_invalid_snapshot_is_corrupt() {
    let mut session = GameSession::in_memory(3);
    session
        .start_game(vec!["ada".into(), "grace".into()], 4)
        .unwrap();
    let mut bad = session.state().clone();
    bad.turn.roll_budget.truncate(1);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, serde_json::to_vec(&bad).unwrap()).unwrap();

    let repository = FileSnapshotRepository::new(&path).unwrap();
    match repository.load() {
        Err(RepositoryError::CorruptSnapshot(_)) => {}
        other => panic!("expected corrupt snapshot, got {other:?}"),
    }
}

#[test]
fn autosave_persists_after_every_change() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::with_repository(13, repo(&dir), true);

    session
        .start_game(vec!["ada".into(), "grace".into()], 4)
        .unwrap();
    session.roll(None, false).unwrap();

    let on_disk = repo(&dir).load().unwrap().expect("autosaved snapshot");
    assert_eq!(&on_disk, session.state());
}
