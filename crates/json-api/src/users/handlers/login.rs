//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use bazaar_app::{auth::verify_password, domain::users::UsersServiceError};

use crate::{extensions::*, state::State};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Login Handler
///
/// Exchanges an email and password for a bearer token.
#[endpoint(
    tags("users"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let user = state
        .app
        .users
        .find_user_by_email(&request.email)
        .await
        .map_err(|error| match error {
            UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
            error => {
                error!("Error logging in: {error}");

                StatusError::internal_server_error().brief("Error logging in")
            }
        })?;

    let password_matches =
        verify_password(&request.password, &user.password_hash).or_500("Error logging in")?;

    if !password_matches {
        return Err(StatusError::bad_request().brief("Invalid credentials"));
    }

    let token = state
        .app
        .tokens
        .issue(user.id, &user.email)
        .or_500("Error logging in")?;

    Ok(Json(LoginResponse { token }))
}
