//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::get::ProductResponse},
    state::State,
};

/// List Products Handler
///
/// Returns all products.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(|error| into_status_error(error, "Error retrieving products"))?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}
