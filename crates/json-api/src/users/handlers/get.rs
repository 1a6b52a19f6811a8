//! Get User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::users::records::UserRecord;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// User Response
///
/// The stored password hash is never echoed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub id: i32,

    /// The user's display name
    pub name: String,

    /// The user's email address
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Get User Handler
///
/// Returns a single user.
#[endpoint(
    tags("users"),
    summary = "Get User",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .get_user(id.into_inner())
        .await
        .map_err(|error| into_status_error(error, "Error retrieving user"))?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::{TEST_USER_EMAIL, make_user, users_service};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .withf(|id| *id == 3)
            .return_once(|_| Ok(make_user(3)));

        let mut res = TestClient::get("http://example.com/users/3")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: UserResponse = res.take_json().await?;

        assert_eq!(body.id, 3);
        assert_eq!(body.email, TEST_USER_EMAIL);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|_| Err(UsersServiceError::NotFound));

        let res = TestClient::get("http://example.com/users/3")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_store_failure_returns_500() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|_| Err(UsersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/users/3")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
