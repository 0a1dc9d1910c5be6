use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    TransactionError, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use tracing::warn;

use shelf_domain::favourite::{FavouriteToggle, ensure_favourite_capacity};
use shelf_domain::media::{ContentRef, MediaKind};
use shelf_tracker_schema::media::ContentKind;
use shelf_tracker_schema::{media, movies, notes, novels, shows, user_favourites, users};

use crate::domain::repository::{MediaRepository, NoteRepository, UserRepository};
use crate::domain::types::{
    Content, ContentPatch, ContentSelector, ContentSource, MediaWrapper, Movie, NewContent,
    NewUser, Note, Novel, ProfileUpdate, Show, TrackedMedia, User, UserCredentials,
};
use crate::error::TrackerServiceError;

fn content_kind(kind: MediaKind) -> ContentKind {
    match kind {
        MediaKind::Movie => ContentKind::Movie,
        MediaKind::Show => ContentKind::Show,
        MediaKind::Novel => ContentKind::Novel,
    }
}

fn media_kind(kind: ContentKind) -> MediaKind {
    match kind {
        ContentKind::Movie => MediaKind::Movie,
        ContentKind::Show => MediaKind::Show,
        ContentKind::Novel => MediaKind::Novel,
    }
}

fn from_txn_err(err: TransactionError<TrackerServiceError>) -> TrackerServiceError {
    match err {
        TransactionError::Connection(e) => anyhow::Error::new(e).context("transaction").into(),
        TransactionError::Transaction(e) => e,
    }
}

/// Map a unique violation to `conflict`; anything else is a store error.
fn on_unique(
    err: DbErr,
    conflict: TrackerServiceError,
    context: &'static str,
) -> TrackerServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        _ => anyhow::Error::new(err).context(context).into(),
    }
}

// ── Media repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMediaRepository {
    pub db: DatabaseConnection,
}

impl MediaRepository for DbMediaRepository {
    async fn list_all(&self) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
        let models = media::Entity::find()
            .order_by_asc(media::Column::Id)
            .all(&self.db)
            .await
            .context("list media")?;
        load_details(&self.db, models).await
    }

    async fn list_favourites(
        &self,
        user_id: i32,
    ) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
        let models = media::Entity::find()
            .inner_join(user_favourites::Entity)
            .filter(user_favourites::Column::UserId.eq(user_id))
            .order_by_desc(user_favourites::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list favourites")?;
        load_details(&self.db, models).await
    }

    async fn list_recent_edits(
        &self,
        limit: u64,
    ) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
        let models = media::Entity::find()
            .order_by_desc(media::Column::UpdatedAt)
            .order_by_desc(media::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent edits")?;
        load_details(&self.db, models).await
    }

    async fn find_content(
        &self,
        kind: MediaKind,
        selector: &ContentSelector,
    ) -> Result<Option<Content>, TrackerServiceError> {
        Ok(find_content_in(&self.db, kind, selector)
            .await
            .context("find content")?)
    }

    async fn track(
        &self,
        user_id: i32,
        content: &ContentSource,
        date_started: NaiveDate,
    ) -> Result<MediaWrapper, TrackerServiceError> {
        let content = content.clone();
        let model = self
            .db
            .transaction_with_config::<_, media::Model, TrackerServiceError>(
                |txn| {
                    Box::pin(async move {
                        let target = match &content {
                            ContentSource::Existing(target) => *target,
                            ContentSource::New(new) => insert_content(txn, new).await?,
                        };
                        let kind = content_kind(target.kind());

                        let existing = media::Entity::find()
                            .filter(media::Column::UserId.eq(user_id))
                            .filter(media::Column::Kind.eq(kind))
                            .filter(media::Column::ContentId.eq(target.id()))
                            .one(txn)
                            .await
                            .context("find existing wrapper")?;
                        if existing.is_some() {
                            return Err(TrackerServiceError::AlreadyTracked);
                        }

                        let now = Utc::now();
                        media::ActiveModel {
                            user_id: Set(user_id),
                            kind: Set(kind),
                            content_id: Set(target.id()),
                            date_started: Set(date_started),
                            edits: Set(0),
                            favourite: Set(false),
                            created_at: Set(now),
                            updated_at: Set(now),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await
                        .map_err(|e| match e.sql_err() {
                            Some(SqlErr::UniqueConstraintViolation(_)) => {
                                TrackerServiceError::AlreadyTracked
                            }
                            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                                TrackerServiceError::UserNotFound
                            }
                            _ => anyhow::Error::new(e).context("insert wrapper").into(),
                        })
                    })
                },
                Some(IsolationLevel::Serializable),
                None,
            )
            .await
            .map_err(from_txn_err)?;
        Ok(wrapper_from_model(model))
    }

    async fn edit(
        &self,
        target: ContentRef,
        patch: &ContentPatch,
    ) -> Result<u64, TrackerServiceError> {
        let patch = patch.clone();
        self.db
            .transaction_with_config::<_, u64, TrackerServiceError>(
                |txn| {
                    Box::pin(async move {
                        let now = Utc::now();
                        if apply_patch(txn, target, &patch, now).await? == 0 {
                            return Err(TrackerServiceError::ContentNotFound);
                        }

                        let bumped = media::Entity::update_many()
                            .col_expr(media::Column::Edits, Expr::col(media::Column::Edits).add(1))
                            .col_expr(media::Column::UpdatedAt, Expr::value(now))
                            .filter(media::Column::Kind.eq(content_kind(target.kind())))
                            .filter(media::Column::ContentId.eq(target.id()))
                            .exec(txn)
                            .await
                            .context("bump wrapper edits")?;
                        Ok(bumped.rows_affected)
                    })
                },
                Some(IsolationLevel::Serializable),
                None,
            )
            .await
            .map_err(from_txn_err)
    }

    async fn toggle_favourite(
        &self,
        user_id: i32,
        target: ContentRef,
    ) -> Result<FavouriteToggle, TrackerServiceError> {
        self.db
            .transaction_with_config::<_, FavouriteToggle, TrackerServiceError>(
                |txn| {
                    Box::pin(async move {
                        let wrapper = media::Entity::find()
                            .filter(media::Column::UserId.eq(user_id))
                            .filter(media::Column::Kind.eq(content_kind(target.kind())))
                            .filter(media::Column::ContentId.eq(target.id()))
                            .one(txn)
                            .await
                            .context("find wrapper")?
                            .ok_or(TrackerServiceError::MediaWrapperNotFound)?;

                        let existing = user_favourites::Entity::find_by_id((user_id, wrapper.id))
                            .one(txn)
                            .await
                            .context("find favourite")?;

                        let outcome = if existing.is_some() {
                            user_favourites::Entity::delete_by_id((user_id, wrapper.id))
                                .exec(txn)
                                .await
                                .context("delete favourite")?;
                            FavouriteToggle::Unfavourited
                        } else {
                            let current = user_favourites::Entity::find()
                                .filter(user_favourites::Column::UserId.eq(user_id))
                                .count(txn)
                                .await
                                .context("count favourites")?;
                            ensure_favourite_capacity(current)?;
                            user_favourites::Entity::insert(user_favourites::ActiveModel {
                                user_id: Set(user_id),
                                media_id: Set(wrapper.id),
                                created_at: Set(Utc::now()),
                            })
                            .exec_without_returning(txn)
                            .await
                            .context("insert favourite")?;
                            FavouriteToggle::Favourited
                        };

                        media::Entity::update_many()
                            .col_expr(media::Column::Favourite, Expr::value(outcome.is_favourite()))
                            .filter(media::Column::Id.eq(wrapper.id))
                            .exec(txn)
                            .await
                            .context("update wrapper favourite")?;
                        refresh_content_favourite(txn, target).await?;
                        Ok(outcome)
                    })
                },
                Some(IsolationLevel::Serializable),
                None,
            )
            .await
            .map_err(from_txn_err)
    }
}

async fn find_content_in<C: ConnectionTrait>(
    conn: &C,
    kind: MediaKind,
    selector: &ContentSelector,
) -> Result<Option<Content>, DbErr> {
    let content = match kind {
        MediaKind::Movie => {
            let query = match selector {
                ContentSelector::Id(id) => movies::Entity::find_by_id(*id),
                ContentSelector::Name(name) => {
                    movies::Entity::find().filter(movies::Column::Name.eq(name.as_str()))
                }
            };
            query.one(conn).await?.map(|m| Content::Movie(movie_from_model(m)))
        }
        MediaKind::Show => {
            let query = match selector {
                ContentSelector::Id(id) => shows::Entity::find_by_id(*id),
                ContentSelector::Name(name) => {
                    shows::Entity::find().filter(shows::Column::Name.eq(name.as_str()))
                }
            };
            query.one(conn).await?.map(|m| Content::Show(show_from_model(m)))
        }
        MediaKind::Novel => {
            let query = match selector {
                ContentSelector::Id(id) => novels::Entity::find_by_id(*id),
                ContentSelector::Name(name) => {
                    novels::Entity::find().filter(novels::Column::Name.eq(name.as_str()))
                }
            };
            query.one(conn).await?.map(|m| Content::Novel(novel_from_model(m)))
        }
    };
    Ok(content)
}

/// Insert the content row unless the name already exists, then resolve its id.
async fn insert_content<C: ConnectionTrait>(
    conn: &C,
    content: &NewContent,
) -> Result<ContentRef, TrackerServiceError> {
    let now = Utc::now();
    match content {
        NewContent::Movie { name } => {
            movies::Entity::insert(movies::ActiveModel {
                name: Set(name.clone()),
                episode: Set(1),
                release_date: Set(None),
                synopsis: Set(None),
                director: Set(None),
                favourite: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(movies::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .context("insert movie")?;
        }
        NewContent::Show {
            name,
            total_episodes,
            watched_episodes,
        } => {
            shows::Entity::insert(shows::ActiveModel {
                name: Set(name.clone()),
                total_episodes: Set(*total_episodes),
                watched_episodes: Set(*watched_episodes),
                release_date: Set(None),
                synopsis: Set(None),
                creator: Set(None),
                favourite: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(shows::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .context("insert show")?;
        }
        NewContent::Novel {
            name,
            total_pages,
            pages_read,
        } => {
            novels::Entity::insert(novels::ActiveModel {
                name: Set(name.clone()),
                total_pages: Set(*total_pages),
                pages_read: Set(*pages_read),
                release_date: Set(None),
                synopsis: Set(None),
                author: Set(None),
                favourite: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(novels::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .context("insert novel")?;
        }
    }

    let selector = ContentSelector::Name(content.name().to_owned());
    let row = find_content_in(conn, content.kind(), &selector)
        .await
        .context("resolve inserted content")?
        .ok_or(TrackerServiceError::ContentNotFound)?;
    Ok(row.content_ref())
}

/// Write the patch onto the content row. Returns the number of rows updated.
async fn apply_patch<C: ConnectionTrait>(
    conn: &C,
    target: ContentRef,
    patch: &ContentPatch,
    now: chrono::DateTime<Utc>,
) -> Result<u64, TrackerServiceError> {
    let result = match (target, patch) {
        (ContentRef::Movie(id), ContentPatch::Movie(p)) => {
            let mut update = movies::Entity::update_many()
                .col_expr(movies::Column::UpdatedAt, Expr::value(now))
                .filter(movies::Column::Id.eq(id));
            if let Some(name) = &p.name {
                update = update.col_expr(movies::Column::Name, Expr::value(name.clone()));
            }
            if let Some(date) = p.release_date {
                update = update.col_expr(movies::Column::ReleaseDate, Expr::value(date));
            }
            if let Some(synopsis) = &p.synopsis {
                update = update.col_expr(movies::Column::Synopsis, Expr::value(synopsis.clone()));
            }
            if let Some(director) = &p.director {
                update = update.col_expr(movies::Column::Director, Expr::value(director.clone()));
            }
            update.exec(conn).await
        }
        (ContentRef::Show(id), ContentPatch::Show(p)) => {
            let mut update = shows::Entity::update_many()
                .col_expr(shows::Column::UpdatedAt, Expr::value(now))
                .filter(shows::Column::Id.eq(id));
            if let Some(name) = &p.name {
                update = update.col_expr(shows::Column::Name, Expr::value(name.clone()));
            }
            if let Some(date) = p.release_date {
                update = update.col_expr(shows::Column::ReleaseDate, Expr::value(date));
            }
            if let Some(synopsis) = &p.synopsis {
                update = update.col_expr(shows::Column::Synopsis, Expr::value(synopsis.clone()));
            }
            if let Some(creator) = &p.creator {
                update = update.col_expr(shows::Column::Creator, Expr::value(creator.clone()));
            }
            if let Some(total) = p.total_episodes {
                update = update.col_expr(shows::Column::TotalEpisodes, Expr::value(total));
            }
            if let Some(watched) = p.watched_episodes {
                update = update.col_expr(shows::Column::WatchedEpisodes, Expr::value(watched));
            }
            update.exec(conn).await
        }
        (ContentRef::Novel(id), ContentPatch::Novel(p)) => {
            let mut update = novels::Entity::update_many()
                .col_expr(novels::Column::UpdatedAt, Expr::value(now))
                .filter(novels::Column::Id.eq(id));
            if let Some(name) = &p.name {
                update = update.col_expr(novels::Column::Name, Expr::value(name.clone()));
            }
            if let Some(date) = p.release_date {
                update = update.col_expr(novels::Column::ReleaseDate, Expr::value(date));
            }
            if let Some(synopsis) = &p.synopsis {
                update = update.col_expr(novels::Column::Synopsis, Expr::value(synopsis.clone()));
            }
            if let Some(author) = &p.author {
                update = update.col_expr(novels::Column::Author, Expr::value(author.clone()));
            }
            if let Some(total) = p.total_pages {
                update = update.col_expr(novels::Column::TotalPages, Expr::value(total));
            }
            if let Some(read) = p.pages_read {
                update = update.col_expr(novels::Column::PagesRead, Expr::value(read));
            }
            update.exec(conn).await
        }
        _ => return Err(TrackerServiceError::InvalidMediaType),
    };
    let result = result
        .map_err(|e| on_unique(e, TrackerServiceError::ContentNameTaken, "update content"))?;
    Ok(result.rows_affected)
}

/// Content-level `favourite` mirrors "any wrapper of this content is favourited".
async fn refresh_content_favourite<C: ConnectionTrait>(
    conn: &C,
    target: ContentRef,
) -> Result<(), TrackerServiceError> {
    let favourited = media::Entity::find()
        .filter(media::Column::Kind.eq(content_kind(target.kind())))
        .filter(media::Column::ContentId.eq(target.id()))
        .filter(media::Column::Favourite.eq(true))
        .count(conn)
        .await
        .context("count favourited wrappers")?
        > 0;

    let result = match target {
        ContentRef::Movie(id) => movies::Entity::update_many()
            .col_expr(movies::Column::Favourite, Expr::value(favourited))
            .filter(movies::Column::Id.eq(id))
            .exec(conn)
            .await,
        ContentRef::Show(id) => shows::Entity::update_many()
            .col_expr(shows::Column::Favourite, Expr::value(favourited))
            .filter(shows::Column::Id.eq(id))
            .exec(conn)
            .await,
        ContentRef::Novel(id) => novels::Entity::update_many()
            .col_expr(novels::Column::Favourite, Expr::value(favourited))
            .filter(novels::Column::Id.eq(id))
            .exec(conn)
            .await,
    };
    result.context("refresh content favourite")?;
    Ok(())
}

/// Join wrappers with their content rows, one query per kind.
async fn load_details<C: ConnectionTrait>(
    conn: &C,
    models: Vec<media::Model>,
) -> Result<Vec<TrackedMedia>, TrackerServiceError> {
    let ids_of = |kind: ContentKind| -> Vec<i32> {
        models
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.content_id)
            .collect()
    };
    let (movie_rows, show_rows, novel_rows) = futures::try_join!(
        fetch_movies(conn, ids_of(ContentKind::Movie)),
        fetch_shows(conn, ids_of(ContentKind::Show)),
        fetch_novels(conn, ids_of(ContentKind::Novel)),
    )
    .context("load content details")?;

    Ok(models
        .into_iter()
        .map(|model| {
            let wrapper = wrapper_from_model(model);
            let details = match wrapper.content {
                ContentRef::Movie(id) => movie_rows.get(&id),
                ContentRef::Show(id) => show_rows.get(&id),
                ContentRef::Novel(id) => novel_rows.get(&id),
            }
            .cloned();
            if details.is_none() {
                warn!(
                    media_id = wrapper.id,
                    content = ?wrapper.content,
                    "dangling content reference"
                );
            }
            TrackedMedia { wrapper, details }
        })
        .collect())
}

async fn fetch_movies<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, Content>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = movies::Entity::find()
        .filter(movies::Column::Id.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows
        .into_iter()
        .map(|m| (m.id, Content::Movie(movie_from_model(m))))
        .collect())
}

async fn fetch_shows<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, Content>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = shows::Entity::find()
        .filter(shows::Column::Id.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows
        .into_iter()
        .map(|m| (m.id, Content::Show(show_from_model(m))))
        .collect())
}

async fn fetch_novels<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, Content>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = novels::Entity::find()
        .filter(novels::Column::Id.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows
        .into_iter()
        .map(|m| (m.id, Content::Novel(novel_from_model(m))))
        .collect())
}

fn wrapper_from_model(model: media::Model) -> MediaWrapper {
    MediaWrapper {
        id: model.id,
        user_id: model.user_id,
        content: ContentRef::new(media_kind(model.kind), model.content_id),
        date_started: model.date_started,
        edits: model.edits,
        favourite: model.favourite,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: model.id,
        name: model.name,
        episode: model.episode,
        release_date: model.release_date,
        synopsis: model.synopsis,
        director: model.director,
        favourite: model.favourite,
    }
}

fn show_from_model(model: shows::Model) -> Show {
    Show {
        id: model.id,
        name: model.name,
        total_episodes: model.total_episodes,
        watched_episodes: model.watched_episodes,
        release_date: model.release_date,
        synopsis: model.synopsis,
        creator: model.creator,
        favourite: model.favourite,
    }
}

fn novel_from_model(model: novels::Model) -> Novel {
    Novel {
        id: model.id,
        name: model.name,
        total_pages: model.total_pages,
        pages_read: model.pages_read,
        release_date: model.release_date,
        synopsis: model.synopsis,
        author: model.author,
        favourite: model.favourite,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, TrackerServiceError> {
        let now = Utc::now();
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            age: Set(user.age),
            gender: Set(user.gender.clone()),
            country: Set(user.country.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| on_unique(e, TrackerServiceError::UserAlreadyExists, "create user"))?;
        Ok(user_from_model(model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, TrackerServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, TrackerServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(|m| {
            let password_hash = m.password_hash.clone();
            UserCredentials {
                user: user_from_model(m),
                password_hash,
            }
        }))
    }

    async fn update_profile(
        &self,
        id: i32,
        update: &ProfileUpdate,
    ) -> Result<(), TrackerServiceError> {
        let mut query = users::Entity::update_many()
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(users::Column::Id.eq(id));
        if let Some(name) = &update.name {
            query = query.col_expr(users::Column::Name, Expr::value(name.clone()));
        }
        if let Some(age) = update.age {
            query = query.col_expr(users::Column::Age, Expr::value(age));
        }
        if let Some(gender) = &update.gender {
            query = query.col_expr(users::Column::Gender, Expr::value(gender.clone()));
        }
        if let Some(country) = &update.country {
            query = query.col_expr(users::Column::Country, Expr::value(country.clone()));
        }
        let result = query.exec(&self.db).await.context("update user profile")?;
        if result.rows_affected == 0 {
            return Err(TrackerServiceError::UserNotFound);
        }
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        age: model.age,
        gender: model.gender,
        country: model.country,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Note repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNoteRepository {
    pub db: DatabaseConnection,
}

impl NoteRepository for DbNoteRepository {
    async fn create(&self, user_id: i32, body: &str) -> Result<Note, TrackerServiceError> {
        let model = notes::ActiveModel {
            user_id: Set(user_id),
            body: Set(body.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => TrackerServiceError::UserNotFound,
            _ => anyhow::Error::new(e).context("create note").into(),
        })?;
        Ok(note_from_model(model))
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Note>, TrackerServiceError> {
        let models = notes::Entity::find()
            .filter(notes::Column::UserId.eq(user_id))
            .order_by_desc(notes::Column::CreatedAt)
            .order_by_desc(notes::Column::Id)
            .all(&self.db)
            .await
            .context("list notes")?;
        Ok(models.into_iter().map(note_from_model).collect())
    }

    async fn delete_owned(&self, id: i32, user_id: i32) -> Result<bool, TrackerServiceError> {
        let result = notes::Entity::delete_many()
            .filter(notes::Column::Id.eq(id))
            .filter(notes::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete note")?;
        Ok(result.rows_affected > 0)
    }
}

fn note_from_model(model: notes::Model) -> Note {
    Note {
        id: model.id,
        user_id: model.user_id,
        body: model.body,
        created_at: model.created_at,
    }
}
