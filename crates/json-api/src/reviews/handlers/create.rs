//! Create Review Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::reviews::data::NewReview;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, handlers::get::ReviewResponse},
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub content: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        Self {
            user_id: request.user_id,
            product_id: request.product_id,
            rating: request.rating,
            content: request.content,
        }
    }
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let review = state
        .app
        .reviews
        .create_review(json.into_inner().into())
        .await
        .map_err(|error| into_status_error(error, "Error creating"))?;

    res.add_header(LOCATION, format!("/reviews/{}", review.id), true)
        .or_500("Error creating")?
        .status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}
