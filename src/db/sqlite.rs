use crate::db::schema::SQLITE_INIT;
use crate::error::SiteError;
use crate::service::password;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`, creating the file (and its directory) if
    /// missing, then bootstrap the schema.
    pub async fn open(database_url: &str) -> Result<Self, SiteError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        if let Some(parent) = connect_opts.get_filename().parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        debug!(database_url, "database ready");
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check a connection out of the pool; it goes back when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, SiteError> {
        Ok(self.pool.acquire().await?)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SiteError> {
        // sqlx::query runs a single statement, so split the script
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the admin account unless one with that username exists.
    /// Returns `true` when a row was created. Any other failure is an error.
    pub async fn seed_admin(&self, username: &str, plain: &str) -> Result<bool, SiteError> {
        let hash = password::hash_password(plain)?;
        let done = sqlx::query(
            "INSERT INTO users (username, password) VALUES (?, ?) ON CONFLICT(username) DO NOTHING",
        )
        .bind(username)
        .bind(hash)
        .execute(&self.pool)
        .await?;
        Ok(done.rows_affected() == 1)
    }
}
