use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Paintings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Paintings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Paintings::Name).text().not_null())
                    .col(ColumnDef::new(Paintings::ArtistName).text().not_null())
                    .col(
                        ColumnDef::new(Paintings::ArtistSlug)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Paintings::PaintingSlug)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Paintings::MuseumName).text().null())
                    // JSON array, keeps genre order
                    .col(ColumnDef::new(Paintings::GenreName).text().null())
                    .col(ColumnDef::new(Paintings::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Paintings::SourceUrl).text().not_null())
                    .col(ColumnDef::new(Paintings::LicenseName).text().null())
                    .col(ColumnDef::new(Paintings::LicenseUrl).text().null())
                    .col(
                        ColumnDef::new(Paintings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Paintings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_artist_painting_slug")
                    .table(Paintings::Table)
                    .col(Paintings::ArtistSlug)
                    .col(Paintings::PaintingSlug)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Facts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Facts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Facts::PaintingId).uuid().not_null())
                    .col(ColumnDef::new(Facts::Name).text().not_null())
                    .col(ColumnDef::new(Facts::DescriptionMd).text().not_null())
                    .col(ColumnDef::new(Facts::GeometryType).text().not_null())
                    .col(ColumnDef::new(Facts::X).double().not_null())
                    .col(ColumnDef::new(Facts::Y).double().not_null())
                    .col(ColumnDef::new(Facts::W).double().not_null())
                    .col(ColumnDef::new(Facts::H).double().not_null())
                    .col(
                        ColumnDef::new(Facts::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Facts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Facts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // Bounding box is stored as fractions of the image size.
                    .check(Expr::col(Facts::X).gte(0.0).and(Expr::col(Facts::X).lte(1.0)))
                    .check(Expr::col(Facts::Y).gte(0.0).and(Expr::col(Facts::Y).lte(1.0)))
                    .check(Expr::col(Facts::W).gt(0.0).and(Expr::col(Facts::W).lte(1.0)))
                    .check(Expr::col(Facts::H).gt(0.0).and(Expr::col(Facts::H).lte(1.0)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_facts_painting_id")
                            .from(Facts::Table, Facts::PaintingId)
                            .to(Paintings::Table, Paintings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_facts_painting_id")
                    .table(Facts::Table)
                    .col(Facts::PaintingId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Facts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Paintings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Paintings {
    Table,
    Id,
    Name,
    ArtistName,
    ArtistSlug,
    PaintingSlug,
    MuseumName,
    GenreName,
    ImageUrl,
    SourceUrl,
    LicenseName,
    LicenseUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Facts {
    Table,
    Id,
    PaintingId,
    Name,
    DescriptionMd,
    GeometryType,
    X,
    Y,
    W,
    H,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
