//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::comments::CommentsServiceError;

/// Owner-scoped routes report a different not-found message, so the
/// caller picks it.
pub(crate) fn into_status_error(
    error: CommentsServiceError,
    not_found: &'static str,
    context: &'static str,
) -> StatusError {
    match error {
        CommentsServiceError::NotFound => StatusError::not_found().brief(not_found),
        CommentsServiceError::InvalidReference
        | CommentsServiceError::MissingRequiredData
        | CommentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid comment payload")
        }
        CommentsServiceError::Sql(source) => {
            error!("{context}: {source}");

            StatusError::internal_server_error().brief(context)
        }
    }
}
