use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Movies::Episode)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Movies::ReleaseDate).date().null())
                    .col(ColumnDef::new(Movies::Synopsis).text().null())
                    .col(ColumnDef::new(Movies::Director).string().null())
                    .col(
                        ColumnDef::new(Movies::Favourite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(Movies::CreatedAt))
                    .col(timestamp_col(Movies::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Shows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shows::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shows::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Shows::TotalEpisodes).integer().not_null())
                    .col(
                        ColumnDef::new(Shows::WatchedEpisodes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Shows::ReleaseDate).date().null())
                    .col(ColumnDef::new(Shows::Synopsis).text().null())
                    .col(ColumnDef::new(Shows::Creator).string().null())
                    .col(
                        ColumnDef::new(Shows::Favourite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(Shows::CreatedAt))
                    .col(timestamp_col(Shows::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Novels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Novels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Novels::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Novels::TotalPages).integer().not_null())
                    .col(
                        ColumnDef::new(Novels::PagesRead)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Novels::ReleaseDate).date().null())
                    .col(ColumnDef::new(Novels::Synopsis).text().null())
                    .col(ColumnDef::new(Novels::Author).string().null())
                    .col(
                        ColumnDef::new(Novels::Favourite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(Novels::CreatedAt))
                    .col(timestamp_col(Novels::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Novels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Shows::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Name,
    Episode,
    ReleaseDate,
    Synopsis,
    Director,
    Favourite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Shows {
    Table,
    Id,
    Name,
    TotalEpisodes,
    WatchedEpisodes,
    ReleaseDate,
    Synopsis,
    Creator,
    Favourite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Novels {
    Table,
    Id,
    Name,
    TotalPages,
    PagesRead,
    ReleaseDate,
    Synopsis,
    Author,
    Favourite,
    CreatedAt,
    UpdatedAt,
}
