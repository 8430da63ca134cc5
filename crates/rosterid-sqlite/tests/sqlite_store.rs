use rosterid::{IdentifierGenerator, SequenceKey, SequenceStore};
use rosterid_sqlite::SqliteSequenceStore;
use std::collections::HashSet;
use std::sync::Mutex;
use std::thread::scope;

fn key() -> SequenceKey {
    SequenceKey::new(24, "STD", "WD")
}

#[test]
fn fresh_key_starts_at_one() {
    let store = SqliteSequenceStore::open_in_memory().unwrap();
    assert_eq!(store.current(&key()).unwrap(), 0);
    assert_eq!(store.try_next(&key()).unwrap(), 1);
    assert_eq!(store.try_next(&key()).unwrap(), 2);
    assert_eq!(store.current(&key()).unwrap(), 2);
}

#[test]
fn keys_advance_independently() {
    let store = SqliteSequenceStore::open_in_memory().unwrap();
    let students = key();
    let cohort_b = SequenceKey::with_cohort(24, "STD", "WD", "B");
    let teachers = SequenceKey::new(24, "TCH", "WD");

    for _ in 0..4 {
        store.try_next(&students).unwrap();
    }
    assert_eq!(store.try_next(&cohort_b).unwrap(), 1);
    assert_eq!(store.try_next(&teachers).unwrap(), 1);
    assert_eq!(store.current(&students).unwrap(), 4);
}

#[test]
fn counters_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counters.db");

    {
        let store = SqliteSequenceStore::open(&path).unwrap();
        for _ in 0..3 {
            store.try_next(&key()).unwrap();
        }
    }

    let store = SqliteSequenceStore::open(&path).unwrap();
    assert_eq!(store.current(&key()).unwrap(), 3);
    assert_eq!(store.try_next(&key()).unwrap(), 4);
}

#[test]
fn concurrent_connections_never_collide() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counters.db");
    // Create the schema before the race begins.
    SqliteSequenceStore::open(&path).unwrap();

    let seen = Mutex::new(HashSet::with_capacity(THREADS * PER_THREAD));

    scope(|s| {
        for _ in 0..THREADS {
            let path = path.clone();
            let seen = &seen;
            s.spawn(move || {
                // One connection per thread, as separate worker processes
                // would have.
                let store = SqliteSequenceStore::open(&path).unwrap();
                for _ in 0..PER_THREAD {
                    let value = store.try_next(&key()).unwrap();
                    assert!(
                        seen.lock().unwrap().insert(value),
                        "duplicate sequence value {value}"
                    );
                }
            });
        }
    });

    let seen = seen.into_inner().unwrap();
    let total = (THREADS * PER_THREAD) as u32;
    assert_eq!(seen.len() as u32, total);
    assert!((1..=total).all(|v| seen.contains(&v)));
}

#[test]
fn generator_runs_against_the_durable_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counters.db");

    {
        let generator =
            IdentifierGenerator::new(SqliteSequenceStore::open(&path).unwrap());
        let id = generator
            .generate("Student", Some("Web Development"), Some(24), None)
            .unwrap();
        assert_eq!(id.to_string(), "YCA/24/WD/STD/0001");
    }

    // A later process picks up where the first left off.
    let generator = IdentifierGenerator::new(SqliteSequenceStore::open(&path).unwrap());
    let id = generator
        .generate("Student", Some("Web Development"), Some(24), None)
        .unwrap();
    assert_eq!(id.to_string(), "YCA/24/WD/STD/0002");
}
