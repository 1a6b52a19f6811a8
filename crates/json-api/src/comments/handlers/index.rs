//! List Comments Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    comments::{errors::into_status_error, handlers::get::CommentResponse},
    extensions::*,
    state::State,
};

/// List Comments Handler
///
/// Returns all comments for a product. A product with no comments yields
/// an empty array.
#[endpoint(
    tags("comments"),
    summary = "List Comments",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product_id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<Vec<CommentResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let comments = state
        .app
        .comments
        .list_comments(product_id.into_inner())
        .await
        .map_err(|error| {
            into_status_error(error, "Comment not found", "Error retrieving comments")
        })?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
