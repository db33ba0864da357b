//! Show command handlers

use crate::api::canonical_path;
use crate::config::Config;
use crate::db::Store;
use crate::domain::SlugPair;
use crate::services::{PaintingService, Resolution, SeaOrmPaintingService};

pub async fn cmd_show(config: &Config, artist_slug: &str, painting_slug: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmPaintingService::new(store);

    let slugs = SlugPair::new(artist_slug, painting_slug);
    match service.resolve(&slugs).await? {
        Resolution::Found(resolved) => {
            let painting = &resolved.painting;
            println!("{}", painting.name);
            println!("{:-<60}", "");
            println!("ID:       {}", painting.id);
            println!("Artist:   {}", painting.artist_name);
            println!("Path:     {}", canonical_path(&slugs));
            if let Some(museum) = &painting.museum_name {
                println!("Museum:   {museum}");
            }
            if let Some(genres) = &painting.genres {
                println!("Genres:   {}", genres.join(", "));
            }
            if let Some(license) = &painting.license_name {
                println!("License:  {license}");
            }
            println!("Facts:    {}", resolved.facts_count);

            for fact in service.facts_for(painting.id).await? {
                println!(
                    "  [{}] {} ({:.2}, {:.2}, {:.2}, {:.2})",
                    fact.order_index, fact.name, fact.bbox.x, fact.bbox.y, fact.bbox.w, fact.bbox.h
                );
            }
        }
        Resolution::Redirect(target) => {
            println!("{slugs} is an alias");
            println!("→ 301 {}", canonical_path(&target));
        }
        Resolution::NotFound => {
            println!("No painting or alias found for {slugs}");
        }
    }

    Ok(())
}

pub async fn cmd_show_combined(config: &Config, slug: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmPaintingService::new(store);

    match service.resolve_combined(slug).await? {
        Some(target) => println!("→ 301 {}", canonical_path(&target)),
        None => println!("No alias found for {slug}"),
    }

    Ok(())
}
