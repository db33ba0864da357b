//! Migrate command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_migrate(config: &Config) -> anyhow::Result<()> {
    // Opening the store applies any pending migrations.
    Store::new(&config.general.database_path).await?;
    println!("✓ Database is up to date: {}", config.general.database_path);
    Ok(())
}
