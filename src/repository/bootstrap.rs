//! One-time schema bootstrap for the flag store.

use std::path::Path;

use rusqlite::Connection;

/// Open the store with proper concurrency settings.
///
/// WAL mode lets in-flight requests write while the file is being read.
pub fn open_store(db_path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 30000;
    "#,
    )?;
    Ok(conn)
}

/// Create the flagged_images table if it does not exist.
///
/// Safe to re-run at every process start; an already-initialized store is
/// left untouched. The connection is dropped before returning. Any storage
/// error propagates and is fatal to startup.
pub fn ensure_schema(db_path: &Path) -> rusqlite::Result<()> {
    let conn = open_store(db_path)?;
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS flagged_images (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            image_prompt TEXT,
            steps TEXT,
            sampler TEXT,
            cfg_scale TEXT,
            seed TEXT,
            size TEXT,
            model_hash TEXT,
            model_name TEXT,
            seed_resize_from TEXT,
            denoising_strength TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
    "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_table_and_wal_mode() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("flags.db");

        ensure_schema(&db_path).unwrap();

        let conn = open_store(&db_path).unwrap();
        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM flagged_images", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_rerun_is_a_noop() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("flags.db");

        ensure_schema(&db_path).unwrap();
        let conn = open_store(&db_path).unwrap();
        conn.execute(
            "INSERT INTO flagged_images (image_prompt, steps, sampler, cfg_scale, seed, size,
             model_hash, model_name, seed_resize_from, denoising_strength)
             VALUES ('p', '20', 'euler', '7', '42', '512x512', 'h', 'm', '-1', '0.4')",
            [],
        )
        .unwrap();
        drop(conn);

        ensure_schema(&db_path).unwrap();

        let conn = open_store(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM flagged_images", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unwritable_location_is_an_error() {
        assert!(ensure_schema(Path::new("/nonexistent-dir/flags.db")).is_err());
    }
}
