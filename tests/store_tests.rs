//! Datastore constraints, checked below the loader's own validation.

use art_explorer::db::Store;
use art_explorer::domain::SlugPair;
use art_explorer::entities::{facts, painting_aliases, paintings, prelude::*};
use art_explorer::services::{
    PaintingService, Resolution, SeaOrmPaintingService, SeedDataset, SeedService,
};
use chrono::Utc;
use sea_orm::{EntityTrait, Set};
use uuid::Uuid;

async fn seeded_store() -> (Store, Uuid) {
    let store = Store::new("sqlite::memory:").await.unwrap();
    SeedService::new(store.clone())
        .load(SeedDataset::builtin().unwrap())
        .await
        .unwrap();
    let painting_id = store.list_paintings().await.unwrap()[0].id.value();
    (store, painting_id)
}

fn fact(painting_id: Uuid, x: f64, y: f64, w: f64, h: f64) -> facts::ActiveModel {
    let now = Utc::now();
    facts::ActiveModel {
        id: Set(Uuid::new_v4()),
        painting_id: Set(painting_id),
        name: Set("Region".to_string()),
        description_md: Set("text".to_string()),
        geometry_type: Set("rect".to_string()),
        x: Set(x),
        y: Set(y),
        w: Set(w),
        h: Set(h),
        order_index: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

fn alias(
    painting_id: Uuid,
    artist_slug: Option<&str>,
    painting_slug: Option<&str>,
    combined_slug: Option<&str>,
) -> painting_aliases::ActiveModel {
    painting_aliases::ActiveModel {
        id: Set(Uuid::new_v4()),
        painting_id: Set(painting_id),
        artist_slug: Set(artist_slug.map(str::to_string)),
        painting_slug: Set(painting_slug.map(str::to_string)),
        combined_slug: Set(combined_slug.map(str::to_string)),
    }
}

#[tokio::test]
async fn test_bounding_box_is_checked_by_datastore() {
    let (store, painting_id) = seeded_store().await;

    let valid = Facts::insert(fact(painting_id, 0.0, 1.0, 1.0, 0.5))
        .exec(&store.conn)
        .await;
    assert!(valid.is_ok());

    for (x, y, w, h) in [
        (-0.1, 0.5, 0.5, 0.5),
        (0.5, 1.5, 0.5, 0.5),
        (0.5, 0.5, 0.0, 0.5),
        (0.5, 0.5, 0.5, 1.01),
    ] {
        let result = Facts::insert(fact(painting_id, x, y, w, h))
            .exec(&store.conn)
            .await;
        assert!(result.is_err(), "accepted bbox ({x}, {y}, {w}, {h})");
    }
}

#[tokio::test]
async fn test_fact_requires_existing_painting() {
    let (store, _) = seeded_store().await;

    let result = Facts::insert(fact(Uuid::new_v4(), 0.1, 0.1, 0.1, 0.1))
        .exec(&store.conn)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_alias_shape_is_checked_by_datastore() {
    let (store, painting_id) = seeded_store().await;

    let both = alias(painting_id, Some("a"), Some("b"), Some("a-b"));
    assert!(PaintingAliases::insert(both).exec(&store.conn).await.is_err());

    let neither = alias(painting_id, None, None, None);
    assert!(
        PaintingAliases::insert(neither)
            .exec(&store.conn)
            .await
            .is_err()
    );

    let half = alias(painting_id, Some("a"), None, None);
    assert!(PaintingAliases::insert(half).exec(&store.conn).await.is_err());

    let pair = alias(painting_id, Some("v-van-gogh"), Some("starry-night"), None);
    assert!(PaintingAliases::insert(pair).exec(&store.conn).await.is_ok());
}

#[tokio::test]
async fn test_aliases_are_unique() {
    let (store, painting_id) = seeded_store().await;

    // Both already registered by the built-in dataset.
    let pair = alias(
        painting_id,
        Some("vincent-van-gogh"),
        Some("starry-night"),
        None,
    );
    assert!(PaintingAliases::insert(pair).exec(&store.conn).await.is_err());

    let combined = alias(painting_id, None, None, Some("van-gogh-starry-night"));
    assert!(
        PaintingAliases::insert(combined)
            .exec(&store.conn)
            .await
            .is_err()
    );
}

fn painting(artist_slug: &str, painting_slug: &str) -> paintings::ActiveModel {
    let now = Utc::now();
    paintings::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(painting_slug.to_string()),
        artist_name: Set(artist_slug.to_string()),
        artist_slug: Set(artist_slug.to_string()),
        painting_slug: Set(painting_slug.to_string()),
        museum_name: Set(None),
        genre_name: Set(None),
        image_url: Set(format!("https://example.org/{painting_slug}.jpg")),
        source_url: Set(format!("https://example.org/{painting_slug}")),
        license_name: Set(None),
        license_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[tokio::test]
async fn test_canonical_pair_wins_over_colliding_alias() {
    let (store, painting_id) = seeded_store().await;

    // The loader refuses this collision, so plant it directly.
    let sunrise = painting("monet", "sunrise");
    let sunrise_id = sunrise.id.clone().unwrap();
    Paintings::insert(sunrise).exec(&store.conn).await.unwrap();
    let collision = alias(sunrise_id, Some("van-gogh"), Some("starry-night"), None);
    PaintingAliases::insert(collision)
        .exec(&store.conn)
        .await
        .unwrap();

    let service = SeaOrmPaintingService::new(store);
    let resolution = service
        .resolve(&SlugPair::new("van-gogh", "starry-night"))
        .await
        .unwrap();

    let Resolution::Found(resolved) = resolution else {
        panic!("expected canonical painting, got {resolution:?}");
    };
    assert_eq!(resolved.painting.id.value(), painting_id);
    assert_eq!(resolved.facts_count, 4);

    let sunrise = service
        .resolve(&SlugPair::new("monet", "sunrise"))
        .await
        .unwrap();
    assert_eq!(sunrise.outcome(), "found");
}

#[tokio::test]
async fn test_rejected_seed_leaves_data_untouched() {
    let (store, painting_id) = seeded_store().await;

    let bad = SeedDataset::from_toml(
        r#"
        [[paintings]]
        name = "Broken"
        artist_name = "Nobody"
        artist_slug = "nobody"
        painting_slug = "broken"
        image_url = "https://example.org/broken.jpg"
        source_url = "https://example.org/broken"

        [[paintings.facts]]
        name = "Outside"
        description_md = "x"
        x = 1.5
        y = 0.0
        w = 0.1
        h = 0.1
        "#,
    )
    .unwrap();

    assert!(SeedService::new(store.clone()).load(bad).await.is_err());

    let paintings = store.list_paintings().await.unwrap();
    assert_eq!(paintings.len(), 1);
    assert_eq!(paintings[0].id.value(), painting_id);
    assert_eq!(
        store
            .count_facts_for_painting(paintings[0].id)
            .await
            .unwrap(),
        4
    );
}

#[tokio::test]
async fn test_file_backed_store_creates_database() {
    let db_path =
        std::env::temp_dir().join(format!("art-explorer-store-test-{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}", db_path.display());

    let store = Store::with_pool_options(&url, 2, 1).await.unwrap();
    store.ping().await.unwrap();
    assert!(db_path.exists());
    assert!(store.list_paintings().await.unwrap().is_empty());

    drop(store);
    let _ = std::fs::remove_file(&db_path);
}
