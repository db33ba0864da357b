pub use super::facts::Entity as Facts;
pub use super::painting_aliases::Entity as PaintingAliases;
pub use super::paintings::Entity as Paintings;
