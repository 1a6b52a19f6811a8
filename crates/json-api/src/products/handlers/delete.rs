//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub message: String,
}

/// Delete Product Handler
#[endpoint(tags("products"), summary = "Delete Product")]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(id.into_inner())
        .await
        .map_err(|error| into_status_error(error, "Error deleting product"))?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted".to_string(),
    }))
}
