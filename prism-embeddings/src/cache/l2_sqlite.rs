//! L2 SQLite-backed embedding cache.
//!
//! Persists embeddings as `fingerprint → blob` rows so a restarted
//! process keeps its warm cache. Vectors are stored as little-endian
//! f32 blobs with an explicit dimension column; a row whose blob does
//! not match its declared width is dropped and treated as a miss.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, warn};

use prism_core::errors::CacheError;

/// L2 persistent embedding cache backed by a SQLite connection.
pub struct L2SqliteCache {
    conn: Mutex<Connection>,
}

impl L2SqliteCache {
    /// Open (or create) the cache database at the given path.
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        let conn = Connection::open(path).map_err(|e| CacheError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::init(conn, &path.display().to_string())
    }

    /// Open an in-memory cache. Used by tests and cache-less configs
    /// that still want L2 semantics.
    pub fn open_in_memory() -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory().map_err(|e| CacheError::OpenFailed {
            path: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        Self::init(conn, ":memory:")
    }

    fn init(conn: Connection, path: &str) -> Result<Self, CacheError> {
        let open_err = |e: rusqlite::Error| CacheError::OpenFailed {
            path: path.to_string(),
            message: e.to_string(),
        };

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(open_err)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(open_err)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS embedding_cache (
                fingerprint TEXT PRIMARY KEY,
                embedding   BLOB NOT NULL,
                dims        INTEGER NOT NULL,
                created_at  TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )
        .map_err(open_err)?;

        debug!(path, "L2 embedding cache opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|e| CacheError::ReadFailed {
            message: format!("connection lock poisoned: {e}"),
        })
    }

    /// Look up an embedding by fingerprint.
    ///
    /// A corrupt row (blob length disagreeing with its dims column) is
    /// deleted and reported as a miss so the caller recomputes.
    pub fn get(&self, fingerprint: &str) -> Result<Option<Vec<f32>>, CacheError> {
        let conn = self.lock()?;

        let row: Option<(Vec<u8>, usize)> = conn
            .query_row(
                "SELECT embedding, dims FROM embedding_cache WHERE fingerprint = ?1",
                [fingerprint],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|e| CacheError::ReadFailed {
                message: e.to_string(),
            })?;

        let Some((blob, dims)) = row else {
            return Ok(None);
        };

        if blob.len() != dims * 4 {
            warn!(
                fingerprint,
                blob_len = blob.len(),
                dims,
                "corrupt L2 cache row, dropping"
            );
            conn.execute(
                "DELETE FROM embedding_cache WHERE fingerprint = ?1",
                [fingerprint],
            )
            .map_err(|e| CacheError::WriteFailed {
                message: e.to_string(),
            })?;
            return Ok(None);
        }

        Ok(Some(blob_to_vec(&blob)))
    }

    /// Store an embedding keyed by fingerprint.
    pub fn insert(&self, fingerprint: &str, embedding: &[f32]) -> Result<(), CacheError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO embedding_cache (fingerprint, embedding, dims)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![fingerprint, vec_to_blob(embedding), embedding.len()],
        )
        .map_err(|e| CacheError::WriteFailed {
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Check if a fingerprint exists in the cache.
    pub fn contains(&self, fingerprint: &str) -> Result<bool, CacheError> {
        Ok(self.get(fingerprint)?.is_some())
    }

    /// Number of cached embeddings.
    pub fn len(&self) -> Result<usize, CacheError> {
        let conn = self.lock()?;
        conn.query_row("SELECT COUNT(*) FROM embedding_cache", [], |row| row.get(0))
            .map_err(|e| CacheError::ReadFailed {
                message: e.to_string(),
            })
    }

    /// Remove all entries.
    pub fn clear(&self) -> Result<(), CacheError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM embedding_cache", [])
            .map_err(|e| CacheError::WriteFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

fn vec_to_blob(embedding: &[f32]) -> Vec<u8> {
    embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn blob_to_vec(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
