use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "facts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub painting_id: Uuid,
    pub name: String,
    pub description_md: String,
    pub geometry_type: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub order_index: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
