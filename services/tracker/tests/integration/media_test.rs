use serde_json::{Value, json};

use shelf_domain::favourite::{FAVOURITE_CAP, FavouriteToggle};
use shelf_domain::media::ContentRef;
use shelf_tracker::domain::types::{Content, MediaWrapper};
use shelf_tracker::error::TrackerServiceError;
use shelf_tracker::usecase::media::{
    EditMediaInput, EditMediaUseCase, ListFavouritesUseCase, ListMediaUseCase,
    ListRecentEditsUseCase, ToggleFavouriteInput, ToggleFavouriteUseCase, TrackMediaInput,
    TrackMediaUseCase,
};

use crate::helpers::{InMemoryRepo, show_input, track_input};

async fn track(
    repo: &InMemoryRepo,
    input: TrackMediaInput,
) -> Result<MediaWrapper, TrackerServiceError> {
    TrackMediaUseCase { repo: repo.clone() }
        .execute(input)
        .await
}

async fn toggle(
    repo: &InMemoryRepo,
    kind: &str,
    user_id: i32,
    name: &str,
) -> Result<FavouriteToggle, TrackerServiceError> {
    ToggleFavouriteUseCase { repo: repo.clone() }
        .execute(ToggleFavouriteInput {
            kind: Some(kind.into()),
            user_id: Some(user_id),
            id: None,
            name: Some(name.into()),
        })
        .await
}

async fn edit(
    repo: &InMemoryRepo,
    kind: &str,
    id: Option<i32>,
    fields: Value,
) -> Result<u64, TrackerServiceError> {
    let Value::Object(fields) = fields else {
        panic!("expected object");
    };
    EditMediaUseCase { repo: repo.clone() }
        .execute(EditMediaInput {
            kind: Some(kind.into()),
            id,
            fields,
        })
        .await
}

fn content_favourite(content: &Content) -> bool {
    match content {
        Content::Movie(m) => m.favourite,
        Content::Show(s) => s.favourite,
        Content::Novel(n) => n.favourite,
    }
}

fn assert_mirrors_consistent(repo: &InMemoryRepo) {
    let wrappers = repo.wrappers();
    for wrapper in &wrappers {
        assert_eq!(
            wrapper.favourite,
            repo.is_favourite_row(wrapper.id),
            "wrapper {} flag disagrees with favourite rows",
            wrapper.id
        );
        let content = repo.content(wrapper.content).unwrap();
        let any_favourited = wrappers
            .iter()
            .any(|w| w.content == wrapper.content && w.favourite);
        assert_eq!(content_favourite(&content), any_favourited);
    }
}

// ── Tracking ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_track_content_once_per_user() {
    let repo = InMemoryRepo::with_users(1);

    track(&repo, show_input(1, "Foo", 12)).await.unwrap();
    let second = track(&repo, show_input(1, "Foo", 12)).await;

    assert!(
        matches!(second, Err(TrackerServiceError::AlreadyTracked)),
        "expected AlreadyTracked, got {second:?}"
    );
    assert_eq!(repo.wrappers().len(), 1);
    assert_eq!(repo.show_count(), 1);
}

#[tokio::test]
async fn should_share_show_row_and_fan_out_edits() {
    let repo = InMemoryRepo::with_users(2);

    let first = track(&repo, show_input(1, "Foo", 12)).await.unwrap();
    let Some(Content::Show(show)) = repo.content(first.content) else {
        panic!("expected show row");
    };
    assert_eq!(show.total_episodes, 12);
    assert_eq!(show.watched_episodes, 0);
    assert_eq!(first.edits, 0);

    // Existing content needs no kind-specific fields.
    let second = track(&repo, track_input("Show", 2, "Foo")).await.unwrap();
    assert_eq!(second.content, first.content);
    assert_eq!(repo.show_count(), 1);

    let bumped = edit(&repo, "Show", None, json!({ "name": "Foo", "synopsis": "A show" }))
        .await
        .unwrap();
    assert_eq!(bumped, 2);
    assert_eq!(repo.wrapper(1, first.content).unwrap().edits, 1);
    assert_eq!(repo.wrapper(2, first.content).unwrap().edits, 1);
    let Some(Content::Show(show)) = repo.content(first.content) else {
        panic!("expected show row");
    };
    assert_eq!(show.synopsis.as_deref(), Some("A show"));
    assert_eq!(show.name, "Foo");
}

#[tokio::test]
async fn should_not_create_content_for_unknown_user() {
    let repo = InMemoryRepo::with_users(0);

    let result = track(&repo, show_input(9, "Foo", 12)).await;

    assert!(matches!(result, Err(TrackerServiceError::UserNotFound)));
    assert_eq!(repo.show_count(), 0);
}

#[tokio::test]
async fn should_list_every_wrapper_with_details() {
    let repo = InMemoryRepo::with_users(2);
    track(&repo, show_input(1, "Foo", 12)).await.unwrap();
    track(&repo, track_input("Movie", 2, "Heat")).await.unwrap();

    let media = ListMediaUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();

    assert_eq!(media.len(), 2);
    let names: Vec<_> = media
        .iter()
        .map(|m| m.details.as_ref().unwrap().name().to_owned())
        .collect();
    assert_eq!(names, vec!["Foo", "Heat"]);
}

// ── Favourites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_favourite_beyond_cap() {
    let repo = InMemoryRepo::with_users(1);
    let mut wrappers = Vec::new();
    for i in 0..=FAVOURITE_CAP {
        let name = format!("Movie {i}");
        wrappers.push(track(&repo, track_input("Movie", 1, &name)).await.unwrap());
    }
    for i in 0..FAVOURITE_CAP {
        let outcome = toggle(&repo, "Movie", 1, &format!("Movie {i}")).await.unwrap();
        assert_eq!(outcome, FavouriteToggle::Favourited);
    }

    let eleventh = toggle(&repo, "Movie", 1, &format!("Movie {FAVOURITE_CAP}")).await;

    assert!(
        matches!(eleventh, Err(TrackerServiceError::FavouriteLimitExceeded)),
        "expected FavouriteLimitExceeded, got {eleventh:?}"
    );
    assert_eq!(repo.favourite_count(1), FAVOURITE_CAP as usize);
    let last = wrappers.last().unwrap();
    assert!(!repo.wrapper(1, last.content).unwrap().favourite);
    assert!(!content_favourite(&repo.content(last.content).unwrap()));
    assert_mirrors_consistent(&repo);
}

#[tokio::test]
async fn should_allow_favourite_again_after_unfavouriting_at_cap() {
    let repo = InMemoryRepo::with_users(1);
    let missing_pages = track(&repo, track_input("Novel", 1, "Book 0")).await;
    assert!(matches!(
        missing_pages,
        Err(TrackerServiceError::NovelMissingPages)
    ));
    for i in 0..=FAVOURITE_CAP {
        let input = TrackMediaInput {
            total_pages: Some(100),
            ..track_input("Novel", 1, &format!("Book {i}"))
        };
        track(&repo, input).await.unwrap();
    }
    for i in 0..FAVOURITE_CAP {
        toggle(&repo, "Novel", 1, &format!("Book {i}")).await.unwrap();
    }

    assert_eq!(
        toggle(&repo, "Novel", 1, "Book 0").await.unwrap(),
        FavouriteToggle::Unfavourited
    );
    assert_eq!(
        toggle(&repo, "Novel", 1, &format!("Book {FAVOURITE_CAP}"))
            .await
            .unwrap(),
        FavouriteToggle::Favourited
    );
    assert_eq!(repo.favourite_count(1), FAVOURITE_CAP as usize);
}

#[tokio::test]
async fn should_restore_state_after_double_toggle() {
    let repo = InMemoryRepo::with_users(1);
    let input = TrackMediaInput {
        total_pages: Some(412),
        ..track_input("Novel", 1, "Dune")
    };
    let wrapper = track(&repo, input).await.unwrap();
    let before_wrapper = repo.wrapper(1, wrapper.content).unwrap();
    let before_rows = repo.favourite_rows();
    let before_content = repo.content(wrapper.content).unwrap();

    assert_eq!(
        toggle(&repo, "Novel", 1, "Dune").await.unwrap(),
        FavouriteToggle::Favourited
    );
    assert!(repo.wrapper(1, wrapper.content).unwrap().favourite);
    assert!(content_favourite(&repo.content(wrapper.content).unwrap()));

    assert_eq!(
        toggle(&repo, "Novel", 1, "Dune").await.unwrap(),
        FavouriteToggle::Unfavourited
    );
    assert_eq!(repo.wrapper(1, wrapper.content).unwrap(), before_wrapper);
    assert_eq!(repo.favourite_rows(), before_rows);
    assert_eq!(repo.content(wrapper.content).unwrap(), before_content);
}

#[tokio::test]
async fn should_keep_favourite_mirrors_in_step() {
    let repo = InMemoryRepo::with_users(3);
    for user_id in 1..=3 {
        track(&repo, show_input(user_id, "Foo", 12)).await.unwrap();
        track(&repo, track_input("Movie", user_id, "Heat")).await.unwrap();
    }
    assert_mirrors_consistent(&repo);

    let steps = [
        ("Show", 1, "Foo"),
        ("Show", 2, "Foo"),
        ("Movie", 1, "Heat"),
        ("Show", 2, "Foo"),
        ("Movie", 3, "Heat"),
        ("Show", 1, "Foo"),
        ("Movie", 1, "Heat"),
    ];
    for (kind, user_id, name) in steps {
        toggle(&repo, kind, user_id, name).await.unwrap();
        assert_mirrors_consistent(&repo);
    }
}

#[tokio::test]
async fn should_not_toggle_another_users_wrapper() {
    let repo = InMemoryRepo::with_users(2);
    track(&repo, show_input(1, "Foo", 12)).await.unwrap();

    let result = toggle(&repo, "Show", 2, "Foo").await;

    assert!(matches!(result, Err(TrackerServiceError::MediaWrapperNotFound)));
    assert_eq!(repo.favourite_count(2), 0);
}

#[tokio::test]
async fn should_return_content_not_found_for_unknown_name() {
    let repo = InMemoryRepo::with_users(1);

    let toggled = toggle(&repo, "Movie", 1, "Nope").await;
    let edited = edit(&repo, "Movie", None, json!({ "name": "Nope", "synopsis": "x" })).await;

    assert!(matches!(toggled, Err(TrackerServiceError::ContentNotFound)));
    assert!(matches!(edited, Err(TrackerServiceError::ContentNotFound)));
}

#[tokio::test]
async fn should_list_favourites_with_details() {
    let repo = InMemoryRepo::with_users(1);
    let usecase = ListFavouritesUseCase { repo: repo.clone() };
    assert!(matches!(
        usecase.execute(1).await,
        Err(TrackerServiceError::FavouritesNotFound)
    ));

    track(&repo, show_input(1, "Foo", 12)).await.unwrap();
    track(&repo, track_input("Movie", 1, "Heat")).await.unwrap();
    toggle(&repo, "Show", 1, "Foo").await.unwrap();

    let favourites = usecase.execute(1).await.unwrap();
    assert_eq!(favourites.len(), 1);
    let Some(Content::Show(show)) = &favourites[0].details else {
        panic!("expected show details");
    };
    assert_eq!(show.name, "Foo");
    assert!(show.favourite);
}

// ── Edits ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_bump_only_wrappers_of_edited_content() {
    let repo = InMemoryRepo::with_users(2);
    let heat = track(&repo, track_input("Movie", 1, "Heat")).await.unwrap();
    track(&repo, track_input("Movie", 2, "Heat")).await.unwrap();
    let ronin = track(&repo, track_input("Movie", 1, "Ronin")).await.unwrap();

    for expected in 1..=2 {
        edit(&repo, "Movie", None, json!({ "name": "Heat", "director": "Mann" }))
            .await
            .unwrap();
        assert_eq!(repo.wrapper(1, heat.content).unwrap().edits, expected);
        assert_eq!(repo.wrapper(2, heat.content).unwrap().edits, expected);
        assert_eq!(repo.wrapper(1, ronin.content).unwrap().edits, 0);
    }
}

#[tokio::test]
async fn should_drop_fields_outside_whitelist() {
    let repo = InMemoryRepo::with_users(1);
    let heat = track(&repo, track_input("Movie", 1, "Heat")).await.unwrap();

    edit(
        &repo,
        "Movie",
        None,
        json!({ "name": "Heat", "totalEpisodes": 9, "favourite": true, "synopsis": "" }),
    )
    .await
    .unwrap();

    let Some(Content::Movie(movie)) = repo.content(heat.content) else {
        panic!("expected movie row");
    };
    assert!(!movie.favourite);
    assert_eq!(movie.episode, 1);
    assert_eq!(movie.synopsis, None);
}

#[tokio::test]
async fn should_rename_by_id_and_reject_taken_names() {
    let repo = InMemoryRepo::with_users(1);
    let heat = track(&repo, track_input("Movie", 1, "Heat")).await.unwrap();
    track(&repo, track_input("Movie", 1, "Ronin")).await.unwrap();
    let ContentRef::Movie(heat_id) = heat.content else {
        panic!("expected movie reference");
    };

    edit(&repo, "Movie", Some(heat_id), json!({ "name": "Heat (1995)" }))
        .await
        .unwrap();
    assert_eq!(repo.content(heat.content).unwrap().name(), "Heat (1995)");

    let clash = edit(&repo, "Movie", Some(heat_id), json!({ "name": "Ronin" })).await;
    assert!(matches!(clash, Err(TrackerServiceError::ContentNameTaken)));
    assert_eq!(repo.wrapper(1, heat.content).unwrap().edits, 1);
}

#[tokio::test]
async fn should_list_recent_edits_newest_first() {
    let repo = InMemoryRepo::with_users(1);
    for i in 0..25 {
        track(&repo, track_input("Movie", 1, &format!("Movie {i}")))
            .await
            .unwrap();
    }
    let first = repo
        .wrappers()
        .into_iter()
        .min_by_key(|w| w.id)
        .unwrap();
    edit(&repo, "Movie", None, json!({ "name": "Movie 0", "synopsis": "edited" }))
        .await
        .unwrap();

    let recent = ListRecentEditsUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();

    assert_eq!(recent.len(), 20);
    assert_eq!(recent[0].wrapper.id, first.id);
    assert_eq!(recent[0].wrapper.edits, 1);
    assert!(
        recent
            .windows(2)
            .all(|pair| pair[0].wrapper.updated_at >= pair[1].wrapper.updated_at)
    );
}
