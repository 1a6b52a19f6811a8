//! Get Comment Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::comments::records::CommentRecord;

use crate::{comments::errors::into_status_error, extensions::*, state::State};

/// Comment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommentResponse {
    /// The unique identifier of the comment
    pub id: i32,

    /// The commenting user
    pub user_id: i32,

    /// The commented product
    pub product_id: i32,

    /// The comment body
    pub content: String,

    /// The date and time the comment was created
    pub created_at: String,

    /// The date and time the comment was last updated
    pub updated_at: String,
}

impl From<CommentRecord> for CommentResponse {
    fn from(comment: CommentRecord) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            product_id: comment.product_id,
            content: comment.content,
            created_at: comment.created_at.to_string(),
            updated_at: comment.updated_at.to_string(),
        }
    }
}

/// Get Comment Handler
///
/// Returns a single comment scoped to a product.
#[endpoint(
    tags("comments"),
    summary = "Get Comment",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product_id: PathParam<i32>,
    comment_id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<CommentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let comment = state
        .app
        .comments
        .get_comment(product_id.into_inner(), comment_id.into_inner())
        .await
        .map_err(|error| into_status_error(error, "Comment not found", "Error retrieving comment"))?;

    Ok(Json(comment.into()))
}
