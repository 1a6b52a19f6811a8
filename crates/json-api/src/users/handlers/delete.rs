//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// User Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserDeletedResponse {
    pub message: String,
}

/// Delete User Handler
#[endpoint(
    tags("users"),
    summary = "Delete User",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<UserDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .users
        .delete_user(id.into_inner())
        .await
        .map_err(|error| into_status_error(error, "Error deleting user"))?;

    Ok(Json(UserDeletedResponse {
        message: "User deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::users_service;

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_message() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_delete_user()
            .once()
            .withf(|id| *id == 3)
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete("http://example.com/users/3")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: UserDeletedResponse = res.take_json().await?;

        assert_eq!(body.message, "User deleted");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_user_returns_404() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_delete_user()
            .once()
            .return_once(|_| Err(UsersServiceError::NotFound));

        let res = TestClient::delete("http://example.com/users/3")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
