//! Persistence adapter: a key-value store of JSON values.
//!
//! Every write is a whole-value overwrite of one key. There are no
//! transactions across keys; the in-process state is the source of truth and
//! the store only exists for restart recovery.

mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Keys written by the tracker.
pub mod keys {
    pub const XP: &str = "xp";
    pub const LEVEL: &str = "level";
    pub const QUESTS: &str = "quests";
    pub const STATS: &str = "stats";
    pub const AVATAR: &str = "userAvatar";
}

/// Get/set access to JSON values by string key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: &Value) -> Result<()>;
}

/// Typed helpers over any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Load `key` as `T`, falling back to `default` when the key is missing
    /// or its value does not have the expected shape.
    ///
    /// The returned flag is `false` when the key was missing, so callers can
    /// tell a first run from corrupt data.
    fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<(T, bool)> {
        let Some(value) = self.get(key)? else {
            return Ok((default, false));
        };
        match serde_json::from_value(value) {
            Ok(parsed) => Ok((parsed, true)),
            Err(e) => {
                tracing::warn!("Discarding corrupt value for '{}': {}", key, e);
                Ok((default, true))
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to serialize value for '{}'", key))?;
        self.set(key, &value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// SQLite-backed store.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "monarch")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(dirs.data_dir().join("monarch.db"))
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let raw: Option<String> = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            None => Ok(None),
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    tracing::warn!("Stored value for '{}' is not valid JSON: {}", key, e);
                    Ok(None)
                }
            },
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value.to_string(), Utc::now().to_rfc3339()),
        )
        .with_context(|| format!("Failed to write '{}'", key))?;
        Ok(())
    }
}

#[cfg(test)]
impl Database {
    /// Write raw text under `key`, bypassing JSON encoding.
    pub(crate) fn set_raw(&self, key: &str, text: &str) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)",
            (key, text, Utc::now().to_rfc3339()),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setup() -> Database {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    #[test]
    fn test_unparseable_text_reads_as_missing() {
        let db = setup();
        db.set_raw(keys::XP, "{not json").unwrap();
        assert_eq!(db.get(keys::XP).unwrap(), None);
    }

    #[test]
    fn test_load_or_reports_missing_key() {
        let db = setup();
        let (level, found) = db.load_or::<u64>(keys::LEVEL, 1).unwrap();
        assert_eq!(level, 1);
        assert!(!found);
    }

    #[test]
    fn test_load_or_falls_back_on_wrong_shape() {
        let db = setup();
        db.set(keys::LEVEL, &json!("three")).unwrap();
        let (level, found) = db.load_or::<u64>(keys::LEVEL, 1).unwrap();
        assert_eq!(level, 1);
        assert!(found);
    }
}
