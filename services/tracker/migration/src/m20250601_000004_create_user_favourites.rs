use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavourites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserFavourites::UserId).integer().not_null())
                    .col(ColumnDef::new(UserFavourites::MediaId).integer().not_null())
                    .col(
                        ColumnDef::new(UserFavourites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserFavourites::UserId)
                            .col(UserFavourites::MediaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserFavourites::Table, UserFavourites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserFavourites::Table, UserFavourites::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavourites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserFavourites {
    Table,
    UserId,
    MediaId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
}
