use sea_orm::entity::prelude::*;

/// Discriminator column: which content table `content_id` points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ContentKind {
    #[sea_orm(string_value = "Movie")]
    Movie,
    #[sea_orm(string_value = "Show")]
    Show,
    #[sea_orm(string_value = "Novel")]
    Novel,
}

/// Per-user tracking record. `(kind, content_id)` has no database foreign key;
/// the application resolves it against `movies`, `shows` or `novels`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: ContentKind,
    pub content_id: i32,
    pub date_started: Date,
    pub edits: i32,
    pub favourite: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::user_favourites::Entity")]
    UserFavourites,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::user_favourites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavourites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
