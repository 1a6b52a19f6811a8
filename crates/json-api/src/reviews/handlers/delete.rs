//! Delete Review Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// Review Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewDeletedResponse {
    pub message: String,
}

/// Delete Review Handler
#[endpoint(tags("reviews"), summary = "Delete Review")]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<ReviewDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .reviews
        .delete_review(id.into_inner())
        .await
        .map_err(|error| into_status_error(error, "Error deleting review"))?;

    Ok(Json(ReviewDeletedResponse {
        message: "Review deleted".to_string(),
    }))
}
