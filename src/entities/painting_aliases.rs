use sea_orm::entity::prelude::*;

/// Row shape of an alias. Exactly one of the pair columns or `combined_slug`
/// is populated; the table carries a CHECK constraint for it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "painting_aliases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub painting_id: Uuid,
    pub artist_slug: Option<String>,
    pub painting_slug: Option<String>,
    #[sea_orm(unique)]
    pub combined_slug: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::paintings::Entity",
        from = "Column::PaintingId",
        to = "super::paintings::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Painting,
}

impl Related<super::paintings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Painting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
