//! Query helpers over a borrowed connection.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code
//! runs against the pool or inside a request-scoped transaction.

pub mod alias;
pub mod fact;
pub mod painting;
