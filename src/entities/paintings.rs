use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "paintings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub artist_name: String,
    pub artist_slug: String,
    pub painting_slug: String,
    pub museum_name: Option<String>,
    /// JSON array of genre names, in display order.
    pub genre_name: Option<String>,
    pub image_url: String,
    pub source_url: String,
    pub license_name: Option<String>,
    pub license_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::facts::Entity")]
    Facts,
    #[sea_orm(has_many = "super::painting_aliases::Entity")]
    PaintingAliases,
}

impl Related<super::facts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facts.def()
    }
}

impl Related<super::painting_aliases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaintingAliases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
