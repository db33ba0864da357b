//! Seed command handler

use std::path::Path;

use crate::config::Config;
use crate::db::Store;
use crate::services::{SeedDataset, SeedService};

pub async fn cmd_seed(config: &Config, file: Option<&Path>) -> anyhow::Result<()> {
    let dataset = match file {
        Some(path) => SeedDataset::from_path(path)?,
        None => SeedDataset::builtin()?,
    };

    let store = Store::new(&config.general.database_path).await?;
    let summary = SeedService::new(store).load(dataset).await?;

    if summary.removed_paintings > 0 {
        println!("Removed {} existing paintings", summary.removed_paintings);
    }
    println!(
        "✓ Loaded {} paintings, {} facts, {} aliases",
        summary.paintings, summary.facts, summary.aliases
    );
    Ok(())
}
