use anyhow::Context as _;
use tracing::info;

use shelf_auth_types::identity::JwtSecret;
use shelf_auth_types::token::issue_access_token;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, ProfileUpdate, User};
use crate::error::TrackerServiceError;
use crate::usecase::password::{hash_password, verify_password};

fn required(value: Option<String>) -> Result<String, TrackerServiceError> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(TrackerServiceError::MissingData)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn check_age(age: Option<i32>) -> Result<Option<i32>, TrackerServiceError> {
    match age {
        Some(age) if age < 0 => Err(TrackerServiceError::InvalidField("age")),
        other => Ok(other),
    }
}

// ── SignUp ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct SignUpInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

pub struct SignUpUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SignUpUseCase<R> {
    pub async fn execute(&self, input: SignUpInput) -> Result<User, TrackerServiceError> {
        let name = required(input.name)?;
        let email = normalize_email(&required(input.email)?);
        let password = input
            .password
            .filter(|p| !p.is_empty())
            .ok_or(TrackerServiceError::MissingData)?;
        let age = check_age(input.age)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(TrackerServiceError::UserAlreadyExists);
        }
        let user = self
            .repo
            .create(&NewUser {
                name,
                email,
                password_hash: hash_password(&password),
                age,
                gender: input.gender.filter(|g| !g.trim().is_empty()),
                country: input.country.filter(|c| !c.trim().is_empty()),
            })
            .await?;
        info!(user_id = user.id, "user signed up");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct LoginOutput {
    pub token: String,
    pub expires_at: u64,
    pub user: User,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: JwtSecret,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, TrackerServiceError> {
        let email = normalize_email(&required(input.email)?);
        let password = input
            .password
            .filter(|p| !p.is_empty())
            .ok_or(TrackerServiceError::MissingData)?;

        let credentials = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(TrackerServiceError::InvalidCredentials)?;
        if !verify_password(&password, &credentials.password_hash) {
            return Err(TrackerServiceError::InvalidCredentials);
        }

        let (token, expires_at) = issue_access_token(credentials.user.id, self.jwt_secret.as_str())
            .context("issue access token")?;
        info!(user_id = credentials.user.id, "user logged in");
        Ok(LoginOutput {
            token,
            expires_at,
            user: credentials.user,
        })
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, TrackerServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        update: ProfileUpdate,
    ) -> Result<(), TrackerServiceError> {
        if update.is_empty() {
            return Err(TrackerServiceError::MissingData);
        }
        let name = match update.name {
            Some(name) if name.trim().is_empty() => {
                return Err(TrackerServiceError::InvalidField("name"));
            }
            other => other.map(|n| n.trim().to_owned()),
        };
        let update = ProfileUpdate {
            name,
            age: check_age(update.age)?,
            ..update
        };
        self.repo.update_profile(user_id, &update).await
    }
}
