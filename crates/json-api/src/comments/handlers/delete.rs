//! Delete Comment Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{comments::errors::into_status_error, extensions::*, state::State};

/// Comment Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommentDeletedResponse {
    pub message: String,
}

/// Delete Comment Handler
///
/// Only the comment's owner can delete it; anyone else sees a 404.
#[endpoint(
    tags("comments"),
    summary = "Delete Comment",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product_id: PathParam<i32>,
    comment_id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<CommentDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    state
        .app
        .comments
        .delete_comment(product_id.into_inner(), comment_id.into_inner(), user.id)
        .await
        .map_err(|error| {
            into_status_error(
                error,
                "Comment not found or unauthorized",
                "Error deleting comment",
            )
        })?;

    Ok(Json(CommentDeletedResponse {
        message: "Comment deleted".to_string(),
    }))
}
