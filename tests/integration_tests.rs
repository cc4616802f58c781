//! Integration tests for the rotation and ledger over the file store

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use mic_rotation::store::{ROTATION_KEY, STATISTICS_KEY};
use mic_rotation::{
    JsonFileStore, RotationEngine, RotationState, Session, StatisticsLedger, StatisticsState,
};

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn open_store(dir: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::open(dir.path()).unwrap())
}

fn session(store: Arc<JsonFileStore>, names: &[&str], seed: u64) -> Session<StdRng> {
    let rotation = RotationEngine::with_rng(roster(names), store.clone(), StdRng::seed_from_u64(seed));
    let ledger = StatisticsLedger::load(store);
    Session::new(rotation, ledger)
}

#[test]
fn test_no_consecutive_repeats_across_many_cycles() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let names = ["A", "B", "C", "D"];
    let mut engine = RotationEngine::with_rng(roster(&names), store, StdRng::seed_from_u64(99));

    let mut previous: Option<String> = None;
    for _ in 0..50 {
        let mut cycle = HashSet::new();
        while let Some(pick) = engine.select_presenter() {
            assert!(cycle.insert(pick.clone()), "{pick} picked twice in one cycle");
            assert_ne!(Some(&pick), previous.as_ref());
            previous = Some(pick);
        }
        assert_eq!(cycle.len(), names.len());

        // A reset clears the memory of the previous pick
        engine.reset_rotation();
        previous = None;
    }
}

#[test]
fn test_rotation_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let names = ["Hasan", "Iwan", "Kazim"];

    let expected = {
        let mut engine =
            RotationEngine::with_rng(roster(&names), open_store(&temp_dir), StdRng::seed_from_u64(1));
        engine.select_presenter();
        let waiting = engine.available()[0].clone();
        engine.skip_presenter(&waiting);
        engine.state().clone()
    };

    let raw = fs::read_to_string(temp_dir.path().join(format!("{ROTATION_KEY}.json"))).unwrap();
    let on_disk: RotationState = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, expected);

    let reloaded =
        RotationEngine::with_rng(roster(&names), open_store(&temp_dir), StdRng::seed_from_u64(2));
    assert!(reloaded.restored());
    assert_eq!(reloaded.state(), &expected);
}

#[test]
fn test_corrupt_files_fail_open() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(format!("{ROTATION_KEY}.json")), "{\"available\": [").unwrap();
    fs::write(temp_dir.path().join(format!("{STATISTICS_KEY}.json")), "garbage").unwrap();

    let session = session(open_store(&temp_dir), &["A", "B"], 0);

    let view = session.snapshot();
    assert_eq!(view.available, roster(&["A", "B"]));
    assert!(view.used.is_empty());
    assert_eq!(view.last, None);
    assert_eq!(session.ledger().state(), &StatisticsState::default());

    // Fresh state was written back over the corrupt rotation record
    let raw = fs::read_to_string(temp_dir.path().join(format!("{ROTATION_KEY}.json"))).unwrap();
    assert!(serde_json::from_str::<RotationState>(&raw).is_ok());
}

#[test]
fn test_reads_records_written_by_the_browser_client() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(format!("{ROTATION_KEY}.json")),
        r#"{"available":["Tim","Reald"],"used":["Dimy"]}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join(format!("{STATISTICS_KEY}.json")),
        r#"{
            "presentationCounts": {"Dimy": 1},
            "skippedCounts": {"Tim": 1},
            "recentPresentations": [
                {"id": "1718000000500", "presenter": "Tim", "presented_at": "2024-06-10T06:13:20.500Z",
                 "skipped": true, "accepted": false, "acceptance_reason": "off sick"},
                {"id": "1718000000000", "presenter": "Dimy", "presented_at": "2024-06-10T06:13:20.000Z",
                 "skipped": false, "accepted": true, "acceptance_reason": ""}
            ],
            "totalPresentations": 1,
            "lastPresentation": "2024-06-10T06:13:20.000Z",
            "lastPresenter": "Dimy"
        }"#,
    )
    .unwrap();

    let mut session = session(open_store(&temp_dir), &["Dimy", "Tim", "Reald"], 5);

    assert!(session.rotation().restored());
    assert_eq!(session.rotation().last_presenter(), None);
    assert_eq!(session.ledger().skip_reasons("Tim")[0].reason, "off sick");

    let record = session.skip("Reald", "").unwrap();
    assert!(record.id.parse::<i64>().unwrap() > 1_718_000_000_500);
}

#[test]
fn test_full_day_of_presentations() {
    let temp_dir = TempDir::new().unwrap();
    let names = ["A", "B", "C", "D"];

    {
        let mut session = session(open_store(&temp_dir), &names, 21);

        let first = session.spin().unwrap();
        session.accept(&first).unwrap();

        let second = session.spin().unwrap();
        session.skip(&second, "in a meeting").unwrap();

        let waiting = session.rotation().available()[0].clone();
        session.skip(&waiting, "").unwrap();

        let last = session.spin().unwrap();
        session.accept(&last).unwrap();

        assert!(session.rotation().is_complete());
        assert_eq!(session.spin(), None);
    }

    // Everything is back after a restart
    let session = session(open_store(&temp_dir), &names, 22);
    let stats = session.ledger().state();

    assert!(session.rotation().is_complete());
    assert_eq!(stats.total_presentations, 2);
    assert_eq!(stats.skipped_counts.values().sum::<u64>(), 2);
    assert_eq!(stats.recent_presentations.len(), 4);
    assert!(stats.is_consistent());

    let board = session.ledger().leaderboard(session.rotation().roster());
    assert_eq!(board.iter().map(|e| e.presentations).sum::<u64>(), 2);
    assert_eq!(board[0].presentations, 1);
}
