//! Create Comment Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::comments::data::NewComment;

use crate::{
    comments::{errors::into_status_error, handlers::get::CommentResponse},
    extensions::*,
    state::State,
};

/// Create Comment Request
///
/// The owning user comes from the bearer token, not the body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCommentRequest {
    pub product_id: i32,
    pub content: String,
}

/// Create Comment Handler
#[endpoint(
    tags("comments"),
    summary = "Create Comment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Comment created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid Token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCommentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CommentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;
    let request = json.into_inner();

    let comment = state
        .app
        .comments
        .create_comment(NewComment {
            user_id: user.id,
            product_id: request.product_id,
            content: request.content,
        })
        .await
        .map_err(|error| into_status_error(error, "Comment not found", "Error creating comment"))?;

    res.add_header(
        LOCATION,
        format!("/comments/{}/{}", comment.product_id, comment.id),
        true,
    )
    .or_500("Error creating comment")?
    .status_code(StatusCode::CREATED);

    Ok(Json(comment.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::comments::{CommentsServiceError, MockCommentsService};

    use crate::test_helpers::{TEST_USER_ID, comments_service, make_comment};

    use super::*;

    fn make_service(comments: MockCommentsService) -> Service {
        comments_service(comments, Router::with_path("comments").post(handler))
    }

    #[tokio::test]
    async fn test_create_uses_token_user_as_owner() -> TestResult {
        let mut comments = MockCommentsService::new();

        comments
            .expect_create_comment()
            .once()
            .withf(|new| {
                *new == NewComment {
                    user_id: TEST_USER_ID,
                    product_id: 1,
                    content: "Does it ship?".to_owned(),
                }
            })
            .return_once(|_| Ok(make_comment(3)));

        let mut res = TestClient::post("http://example.com/comments")
            .json(&json!({ "product_id": 1, "content": "Does it ship?" }))
            .send(&make_service(comments))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/comments/1/3"));

        let body: CommentResponse = res.take_json().await?;

        assert_eq!(body.id, 3);
        assert_eq!(body.user_id, TEST_USER_ID);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_unknown_product_returns_400() -> TestResult {
        let mut comments = MockCommentsService::new();

        comments
            .expect_create_comment()
            .once()
            .return_once(|_| Err(CommentsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/comments")
            .json(&json!({ "product_id": 999, "content": "Does it ship?" }))
            .send(&make_service(comments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_store_failure_returns_500() -> TestResult {
        let mut comments = MockCommentsService::new();

        comments
            .expect_create_comment()
            .once()
            .return_once(|_| Err(CommentsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/comments")
            .json(&json!({ "product_id": 1, "content": "Does it ship?" }))
            .send(&make_service(comments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
