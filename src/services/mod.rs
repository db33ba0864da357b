pub mod painting_service;
pub use painting_service::{PaintingError, PaintingService, Resolution, ResolvedPainting};

pub mod painting_service_impl;
pub use painting_service_impl::SeaOrmPaintingService;

pub mod seed;
pub use seed::{SeedDataset, SeedError, SeedService, SeedSummary};
