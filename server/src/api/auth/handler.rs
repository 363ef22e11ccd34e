//! Authentication Handlers
//!
//! Handles registration, login and the profile endpoint

use std::time::Duration;

use axum::{Json, extract::State};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::validation::{
    self, validate_email, validate_optional_text, validate_required_text,
};

// Re-use shared DTOs for API consistency
use soko_shared::client::{AuthResponse, LoginRequest, RegisterRequest};
use soko_shared::models::UserInfo;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Minimum password length accepted at registration
const MIN_PASSWORD_LEN: usize = 8;

/// Register handler
///
/// Creates an account and returns a JWT token so the client is logged in
/// straight away. Duplicate emails answer 409.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate_email(&req.email)?;
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if req.password.len() > validation::MAX_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password is too long (max {} chars)",
            validation::MAX_PASSWORD_LEN
        )));
    }
    validate_required_text(&req.full_name, "full_name", validation::MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.phone, "phone", validation::MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.location, "location", validation::MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.business_name, "business_name", validation::MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(
        &req.business_description,
        "business_description",
        validation::MAX_TEXT_LEN,
    )?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(req).await?;

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.email, user.role.as_str())
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %user_id,
        email = %user.email,
        role = %user.role.as_str(),
        "User registered"
    );

    Ok(Json(AuthResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: user.into(),
    }))
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent
    // account enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.email, user.role.as_str())
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %user_id,
        email = %user.email,
        role = %user.role.as_str(),
        "User logged in successfully"
    );

    Ok(Json(AuthResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: user.into(),
    }))
}

/// Get current user profile
///
/// Reads fresh data from the database rather than trusting stale claims.
pub async fn profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> Result<Json<UserInfo>, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let record = repo
        .find_by_id(&user.id)
        .await?
        // Token subject no longer resolves to an account
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(record.into()))
}
