use crate::domain::PaintingId;
use crate::models::alias::PaintingAlias;
use crate::models::fact::Fact;
use crate::models::painting::Painting;
use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, Statement,
    TransactionTrait,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

use repositories::alias::AliasRepository;
use repositories::fact::FactRepository;
use repositories::painting::PaintingRepository;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Opens the pool and applies pending migrations.
    ///
    /// `sqlite::memory:` URLs hold a single connection that is never recycled;
    /// the data lives only as long as it does. Use them for tests and demos.
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !is_in_memory(db_url) {
            ensure_database_file(db_url).await?;
        }

        let opt = connect_options(db_url, max_connections, min_connections);
        let (min, max) = (
            opt.get_min_connections().unwrap_or_default(),
            opt.get_max_connections().unwrap_or_default(),
        );

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min, max
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// Checks a connection out of the pool for one unit of work.
    ///
    /// The connection goes back to the pool when the transaction is committed
    /// or dropped, whichever comes first.
    pub async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.conn.begin().await?)
    }

    fn painting_repo(&self) -> PaintingRepository<'_, DatabaseConnection> {
        PaintingRepository::new(&self.conn)
    }

    fn fact_repo(&self) -> FactRepository<'_, DatabaseConnection> {
        FactRepository::new(&self.conn)
    }

    fn alias_repo(&self) -> AliasRepository<'_, DatabaseConnection> {
        AliasRepository::new(&self.conn)
    }

    pub async fn get_painting(&self, id: PaintingId) -> Result<Option<Painting>> {
        self.painting_repo().get(id).await
    }

    pub async fn list_paintings(&self) -> Result<Vec<Painting>> {
        self.painting_repo().list_all().await
    }

    pub async fn delete_painting(&self, id: PaintingId) -> Result<bool> {
        self.painting_repo().delete(id).await
    }

    pub async fn get_facts_for_painting(&self, painting_id: PaintingId) -> Result<Vec<Fact>> {
        self.fact_repo().list_for_painting(painting_id).await
    }

    pub async fn count_facts_for_painting(&self, painting_id: PaintingId) -> Result<u64> {
        self.fact_repo().count_for_painting(painting_id).await
    }

    pub async fn get_aliases_for_painting(
        &self,
        painting_id: PaintingId,
    ) -> Result<Vec<PaintingAlias>> {
        self.alias_repo().list_for_painting(painting_id).await
    }
}

/// Idle timeout and lifetime of the single in-memory connection.
///
/// sqlx reaps idle connections even below `min_connections` and adds this
/// period to `Instant::now()`, so it must stay finite.
const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:")
}

fn connect_options(db_url: &str, max_connections: u32, min_connections: u32) -> ConnectOptions {
    let mut opt = ConnectOptions::new(db_url.to_string());

    if is_in_memory(db_url) {
        // Every SQLite connection gets its own in-memory database.
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_KEEPALIVE)
            .max_lifetime(IN_MEMORY_KEEPALIVE);
    } else {
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600));
    }

    opt.connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    opt
}

async fn ensure_database_file(db_url: &str) -> Result<()> {
    let path_str = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path_str = path_str.split('?').next().unwrap_or(path_str);

    if let Some(parent) = Path::new(path_str).parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }
    if !Path::new(path_str).exists() {
        std::fs::File::create(path_str)?;
    }
    Ok(())
}
