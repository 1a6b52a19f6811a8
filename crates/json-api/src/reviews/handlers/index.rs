//! List Reviews Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, handlers::get::ReviewResponse},
    state::State,
};

/// List Reviews Handler
///
/// Returns all reviews.
#[endpoint(tags("reviews"), summary = "List Reviews")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ReviewResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews()
        .await
        .map_err(|error| into_status_error(error, "Error retrieving"))?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
