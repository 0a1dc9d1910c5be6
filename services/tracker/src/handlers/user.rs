use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use shelf_auth_types::identity::Identity;

use crate::domain::types::{ProfileUpdate, User};
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    GetUserUseCase, LoginInput, LoginUseCase, SignUpInput, SignUpUseCase, UpdateProfileUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            gender: user.gender,
            country: user.country,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /users/signup ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<UserResponse>), TrackerServiceError> {
    let usecase = SignUpUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(SignUpInput {
            name: body.name,
            email: body.email,
            password: body.password,
            age: body.age,
            gender: body.gender,
            country: body.country,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /users/login ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: u64,
    pub user: UserResponse,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, TrackerServiceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        token: out.token,
        expires_at: out.expires_at,
        user: out.user.into(),
    }))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user.into()))
}

// ── PATCH /users/@me ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

pub async fn update_me(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<StatusCode, TrackerServiceError> {
    let usecase = UpdateProfileUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            ProfileUpdate {
                name: body.name,
                age: body.age,
                gender: body.gender,
                country: body.country,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
