//! Create User Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::users::data::NewUser;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, handlers::get::UserResponse},
};

/// Create User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password_hash: request.password_hash,
        }
    }
}

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Create User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::CONFLICT, description = "User already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .create_user(json.into_inner().into())
        .await
        .map_err(|error| into_status_error(error, "Error creating user"))?;

    res.add_header(LOCATION, format!("/users/{}", user.id), true)
        .or_500("Error creating user")?
        .status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}
