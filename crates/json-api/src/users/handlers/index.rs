//! List Users Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, handlers::get::UserResponse},
};

/// List Users Handler
///
/// Returns all users.
#[endpoint(
    tags("users"),
    summary = "List Users",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .map_err(|error| into_status_error(error, "Error retrieving users"))?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::{make_user, users_service};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_all_users() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_list_users()
            .once()
            .return_once(|| Ok(vec![make_user(1), make_user(2)]));

        let mut res = TestClient::get("http://example.com/users")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<UserResponse> = res.take_json().await?;

        assert_eq!(body.len(), 2);
        assert_eq!(body[0].id, 1);
        assert_eq!(body[1].id, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_no_users_returns_empty_array() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_list_users().once().return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/users")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_json::<Vec<UserResponse>>().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_failure_returns_500() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_list_users()
            .once()
            .return_once(|| Err(UsersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/users")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
