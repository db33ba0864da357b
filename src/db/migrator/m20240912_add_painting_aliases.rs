use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let combined_shape = Expr::col(PaintingAliases::CombinedSlug)
            .is_not_null()
            .and(Expr::col(PaintingAliases::ArtistSlug).is_null())
            .and(Expr::col(PaintingAliases::PaintingSlug).is_null());
        let pair_shape = Expr::col(PaintingAliases::CombinedSlug)
            .is_null()
            .and(Expr::col(PaintingAliases::ArtistSlug).is_not_null())
            .and(Expr::col(PaintingAliases::PaintingSlug).is_not_null());

        manager
            .create_table(
                Table::create()
                    .table(PaintingAliases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaintingAliases::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PaintingAliases::PaintingId).uuid().not_null())
                    .col(
                        ColumnDef::new(PaintingAliases::ArtistSlug)
                            .string_len(200)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PaintingAliases::PaintingSlug)
                            .string_len(200)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PaintingAliases::CombinedSlug)
                            .string_len(400)
                            .null(),
                    )
                    // Either a slug pair or a combined slug, never both, never neither.
                    .check(combined_shape.or(pair_shape))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_painting_aliases_painting_id")
                            .from(PaintingAliases::Table, PaintingAliases::PaintingId)
                            .to(Paintings::Table, Paintings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULLs are distinct in unique indexes, so combined-shape rows never
        // collide on the pair index and vice versa.
        manager
            .create_index(
                Index::create()
                    .name("uq_painting_alias_pair")
                    .table(PaintingAliases::Table)
                    .col(PaintingAliases::ArtistSlug)
                    .col(PaintingAliases::PaintingSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_painting_alias_combined")
                    .table(PaintingAliases::Table)
                    .col(PaintingAliases::CombinedSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_painting_aliases_painting_id")
                    .table(PaintingAliases::Table)
                    .col(PaintingAliases::PaintingId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaintingAliases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Paintings {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum PaintingAliases {
    Table,
    Id,
    PaintingId,
    ArtistSlug,
    PaintingSlug,
    CombinedSlug,
}
