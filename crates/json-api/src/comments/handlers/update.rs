//! Update Comment Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::comments::data::CommentUpdate;

use crate::{
    comments::{errors::into_status_error, handlers::get::CommentResponse},
    extensions::*,
    state::State,
};

/// Update Comment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCommentRequest {
    pub content: String,
}

/// Update Comment Handler
///
/// Only the comment's owner can update it; anyone else sees a 404.
#[endpoint(
    tags("comments"),
    summary = "Update Comment",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product_id: PathParam<i32>,
    comment_id: PathParam<i32>,
    json: JsonBody<UpdateCommentRequest>,
    depot: &mut Depot,
) -> Result<Json<CommentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let comment = state
        .app
        .comments
        .update_comment(
            product_id.into_inner(),
            comment_id.into_inner(),
            user.id,
            CommentUpdate {
                content: json.into_inner().content,
            },
        )
        .await
        .map_err(|error| {
            into_status_error(
                error,
                "Comment not found or unauthorized",
                "Error updating comment",
            )
        })?;

    Ok(Json(comment.into()))
}
