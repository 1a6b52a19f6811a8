//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::users::data::UserUpdate;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, handlers::get::UserResponse},
};

/// Update User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password_hash: request.password_hash,
        }
    }
}

/// Update User Handler
///
/// Replaces a user's name, email, and password hash.
#[endpoint(
    tags("users"),
    summary = "Update User",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    json: JsonBody<UpdateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .update_user(id.into_inner(), json.into_inner().into())
        .await
        .map_err(|error| into_status_error(error, "Error updating user"))?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::{TEST_USER_EMAIL, make_user, users_service};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_returns_200_with_row() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .withf(|id, update| *id == 3 && update.name == "Renamed")
            .return_once(|_, _| Ok(make_user(3)));

        let mut res = TestClient::put("http://example.com/users/3")
            .json(&json!({
                "name": "Renamed",
                "email": TEST_USER_EMAIL,
                "password_hash": "$2b$12$invalidinvalidinvalidinvalid",
            }))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: UserResponse = res.take_json().await?;

        assert_eq!(body.id, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_404() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .return_once(|_, _| Err(UsersServiceError::NotFound));

        let res = TestClient::put("http://example.com/users/3")
            .json(&json!({
                "name": "Renamed",
                "email": TEST_USER_EMAIL,
                "password_hash": "$2b$12$invalidinvalidinvalidinvalid",
            }))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
