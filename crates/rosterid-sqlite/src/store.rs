use rosterid::{Error, Result, SequenceKey, SequenceStore};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::{path::Path, sync::Mutex, time::Duration};

/// How long a connection waits on a locked database before giving up.
///
/// Bounds the blocking window of [`SequenceStore::try_next`]: a caller
/// waits at most this long on a contended counter row before the call
/// fails as retryable.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS sequence_counters (
    year INTEGER NOT NULL,
    role_code TEXT NOT NULL,
    program_code TEXT NOT NULL,
    cohort TEXT NOT NULL,
    current_value INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (year, role_code, program_code, cohort)
) WITHOUT ROWID;";

/// A durable [`SequenceStore`] backed by SQLite.
///
/// The locate-or-create-then-increment is a single upsert statement, so it
/// executes inside one implicit transaction and SQLite's own locking makes
/// it atomic — across threads and across processes sharing the database
/// file. Counter rows are never deleted; values allocated before a restart
/// stay spent after it.
///
/// Each store owns one connection behind a mutex. Open one store per
/// process (or several — cross-connection writes serialize on the database
/// lock, bounded by the busy timeout).
pub struct SqliteSequenceStore {
    conn: Mutex<Connection>,
}

impl SqliteSequenceStore {
    /// Opens (creating if needed) a counter database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(storage)?;
        Self::init(conn)
    }

    /// Opens a private in-memory counter database.
    ///
    /// No durability across drop; mainly useful for tests that want the
    /// real SQL path without touching disk.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT).map_err(storage)?;
        // WAL keeps readers and the single writer out of each other's way;
        // synchronous=NORMAL is durable enough under WAL for counters that
        // are re-read on every allocation.
        conn.execute_batch("PRAGMA journal_mode = wal;").map_err(storage)?;
        conn.execute_batch("PRAGMA synchronous = normal;").map_err(storage)?;
        conn.execute_batch(SCHEMA).map_err(storage)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl SequenceStore for SqliteSequenceStore {
    fn try_next(&self, key: &SequenceKey) -> Result<u32> {
        let conn = self.conn.lock()?;
        conn.query_row(
            "INSERT INTO sequence_counters (year, role_code, program_code, cohort, current_value)
             VALUES (?1, ?2, ?3, ?4, 1)
             ON CONFLICT (year, role_code, program_code, cohort)
             DO UPDATE SET current_value = current_value + 1
             RETURNING current_value",
            params![
                key.year(),
                key.role_code(),
                key.program_code(),
                key.cohort()
            ],
            |row| row.get(0),
        )
        .map_err(storage)
    }

    fn current(&self, key: &SequenceKey) -> Result<u32> {
        let conn = self.conn.lock()?;
        conn.query_row(
            "SELECT current_value FROM sequence_counters
             WHERE year = ?1 AND role_code = ?2 AND program_code = ?3 AND cohort = ?4",
            params![
                key.year(),
                key.role_code(),
                key.program_code(),
                key.cohort()
            ],
            |row| row.get(0),
        )
        .optional()
        .map_err(storage)
        .map(|value| value.unwrap_or(0))
    }
}

fn storage(err: rusqlite::Error) -> Error {
    Error::storage(err.to_string())
}
