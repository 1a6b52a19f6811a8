//! Get Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::reviews::records::ReviewRecord;

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

/// Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub id: i32,

    /// The reviewing user
    pub user_id: i32,

    /// The reviewed product
    pub product_id: i32,

    /// The star rating
    pub rating: i32,

    /// The review body
    pub content: String,

    /// The date and time the review was created
    pub created_at: String,

    /// The date and time the review was last updated
    pub updated_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            product_id: review.product_id,
            rating: review.rating,
            content: review.content,
            created_at: review.created_at.to_string(),
            updated_at: review.updated_at.to_string(),
        }
    }
}

/// Get Review Handler
///
/// Returns a single review.
#[endpoint(tags("reviews"), summary = "Get Review")]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let review = state
        .app
        .reviews
        .get_review(id.into_inner())
        .await
        .map_err(|error| into_status_error(error, "Error retrieving review"))?;

    Ok(Json(review.into()))
}
