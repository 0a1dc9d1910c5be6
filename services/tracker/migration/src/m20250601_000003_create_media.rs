use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::UserId).integer().not_null())
                    .col(ColumnDef::new(Media::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Media::ContentId).integer().not_null())
                    .col(ColumnDef::new(Media::DateStarted).date().not_null())
                    .col(
                        ColumnDef::new(Media::Edits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Media::Favourite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Media::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Media::Table, Media::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One wrapper per (user, content).
        manager
            .create_index(
                Index::create()
                    .table(Media::Table)
                    .col(Media::UserId)
                    .col(Media::Kind)
                    .col(Media::ContentId)
                    .unique()
                    .name("uq_media_user_id_kind_content_id")
                    .to_owned(),
            )
            .await?;

        // Edit fan-out and favourite mirror refresh filter on (kind, content_id).
        manager
            .create_index(
                Index::create()
                    .table(Media::Table)
                    .col(Media::Kind)
                    .col(Media::ContentId)
                    .name("idx_media_kind_content_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Media::Table)
                    .col((Media::UpdatedAt, IndexOrder::Desc))
                    .name("idx_media_updated_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    UserId,
    Kind,
    ContentId,
    DateStarted,
    Edits,
    Favourite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
