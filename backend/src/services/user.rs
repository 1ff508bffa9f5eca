//! User service for registration, login, and user management
//!
//! Password hashing and verification run on the blocking thread pool so
//! the intentionally slow digest never stalls unrelated requests.

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use scribe_shared::errors::AuthError;
use scribe_shared::models::User;
use scribe_shared::types::{PartialUpdateUserRequest, RegisterRequest, UpdateUserRequest};
use sqlx::PgPool;
use tracing::warn;

const DUPLICATE_IDENTITY: &str = "User with this email or username already exists";

/// User service for authentication and account operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// The request has already passed the registration pipeline, so the
    /// fields are present and well-formed here.
    pub async fn register(pool: &PgPool, req: &RegisterRequest) -> Result<User, ApiError> {
        let username = req.username.as_deref().unwrap_or_default();
        let email = req.email.as_deref().unwrap_or_default();
        let password = req.password.as_deref().unwrap_or_default();

        if UserRepository::identity_taken(pool, Some(username), Some(email), None)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(DUPLICATE_IDENTITY.to_string()));
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, username, email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        Ok(user.into())
    }

    /// Login with email and password, issuing a fresh token
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller; the distinction is only logged.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<(User, String), ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                warn!(error = %AuthError::InvalidCredentials, "login with unknown email");
                ApiError::Unauthorized
            })?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            warn!(error = %AuthError::InvalidCredentials, user_id = user.id, "login with wrong password");
            return Err(ApiError::Unauthorized);
        }

        let token = tokens.issue(user.id).map_err(ApiError::Internal)?;

        Ok((user.into(), token))
    }

    /// List all users
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, ApiError> {
        let users = UserRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get a single user by id
    pub async fn get(pool: &PgPool, id: i64) -> Result<User, ApiError> {
        let user = UserRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Replace a user's identity fields
    ///
    /// Only the account owner may update it; anyone else gets the same
    /// 404 a missing user would produce.
    pub async fn update(
        pool: &PgPool,
        auth_id: i64,
        id: i64,
        req: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        if auth_id != id {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Self::apply_update(pool, id, req.username.as_deref(), req.email.as_deref()).await
    }

    /// Update the provided subset of a user's identity fields
    pub async fn update_partial(
        pool: &PgPool,
        auth_id: i64,
        id: i64,
        req: &PartialUpdateUserRequest,
    ) -> Result<User, ApiError> {
        if auth_id != id {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Self::apply_update(pool, id, req.username.as_deref(), req.email.as_deref()).await
    }

    async fn apply_update(
        pool: &PgPool,
        id: i64,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<User, ApiError> {
        if UserRepository::identity_taken(pool, username, email, Some(id))
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(DUPLICATE_IDENTITY.to_string()));
        }

        let user = UserRepository::update(pool, id, username, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Delete a user account
    pub async fn delete(pool: &PgPool, auth_id: i64, id: i64) -> Result<(), ApiError> {
        if auth_id != id {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        let affected = UserRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if affected == 0 {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
