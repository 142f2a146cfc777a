//! String-keyed key-value storage.
//!
//! The tracker only ever needs `get_item` / `set_item` on whole string
//! values, so the backend is a trait: SQLite for the CLI, a map for tests
//! and for staging imported data.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::path::Path;

pub const ENTRIES_KEY: &str = "overtimeEntries";
pub const RATE_KEY: &str = "hourlyRate";
pub const DARK_THEME_KEY: &str = "isDarkTheme";
pub const PRIMARY_COLOR_KEY: &str = "primaryColor";

/// Every key the application reads or writes.
pub const KNOWN_KEYS: [&str; 4] = [ENTRIES_KEY, RATE_KEY, DARK_THEME_KEY, PRIMARY_COLOR_KEY];

pub trait Storage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set_item(key, value)
    }
}

/// `storage` table of the application database.
pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open the database at `path`, running pending migrations first.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM storage WHERE key = ?1")?
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool
            .conn
            .prepare_cached(
                "INSERT INTO storage (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )?
            .execute(params![key, value])?;
        Ok(())
    }
}

/// In-memory store. Counts writes so callers can check that a rejected
/// operation never touched storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<K, V, I>(items: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
