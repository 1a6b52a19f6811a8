//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError, context: &'static str) -> StatusError {
    match error {
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Review not found"),
        ReviewsServiceError::InvalidReference
        | ReviewsServiceError::MissingRequiredData
        | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::Sql(source) => {
            error!("{context}: {source}");

            StatusError::internal_server_error().brief(context)
        }
    }
}
