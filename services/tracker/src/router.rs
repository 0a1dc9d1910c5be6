use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower::ServiceBuilder;

use shelf_core::health::healthz;
use shelf_core::middleware::{
    propagate_request_id_layer, request_id_layer, timeout_layer, trace_layer,
};

use crate::handlers::{
    health::readyz,
    media::{
        add_media, edit_media, get_content, list_favourites, list_media, list_recent_edits,
        toggle_favourite,
    },
    note::{create_note, delete_note, list_notes},
    user::{get_user, login, sign_up, update_me},
};
use crate::state::AppState;

pub fn build_router(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Media
        .route("/media", get(list_media))
        .route("/media/edits", get(list_recent_edits))
        .route("/media/favourites/{id}", get(list_favourites))
        .route("/media/{type}/{name}", get(get_content))
        .route("/media/addmedia", post(add_media))
        .route("/media/editmedia", put(edit_media))
        .route("/media/favourite", put(toggle_favourite))
        // Users
        .route("/users/signup", post(sign_up))
        .route("/users/login", post(login))
        .route("/users/@me", patch(update_me))
        .route("/users/{id}", get(get_user))
        // Notes
        .route("/notes", post(create_note))
        .route("/notes", get(list_notes))
        .route("/notes/{id}", delete(delete_note))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer())
                .layer(timeout_layer(request_timeout_secs)),
        )
        .with_state(state)
}
