use crate::{
    models::UrlMapping,
    store::{StoreError, UrlStore},
};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};

// ── Pool setup ─────────────────────────────────────────────────────────────

/// Open the SQLite pool, creating the file if it doesn't exist yet, and apply
/// the embedded migrations.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()
        .with_context(|| format!("invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("failed to open SQLite database")?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Run embedded migrations (files in migrations/).
pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to apply database migrations")?;
    tracing::info!("Database migrations applied");
    Ok(())
}

// ── Store ──────────────────────────────────────────────────────────────────

/// [`UrlStore`] backed by the `urls` table.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlStore for SqliteStore {
    async fn create(&self, original_url: &str) -> Result<String, StoreError> {
        let mapping = UrlMapping::new(original_url);

        // A repeated URL (or a colliding one) replaces the earlier row.
        sqlx::query(
            "INSERT INTO urls (id, original_url, short_url, created_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                 original_url = excluded.original_url,
                 short_url = excluded.short_url,
                 created_at = excluded.created_at",
        )
        .bind(&mapping.id)
        .bind(&mapping.original_url)
        .bind(&mapping.short_url)
        .bind(mapping.created_at)
        .execute(&self.pool)
        .await?;

        Ok(mapping.short_url)
    }

    async fn lookup(&self, id: &str) -> Result<UrlMapping, StoreError> {
        let mapping: Option<UrlMapping> = sqlx::query_as(
            "SELECT id, original_url, short_url, created_at FROM urls WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        mapping.ok_or(StoreError::NotFound)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
