//! App Router

use salvo::Router;

use crate::{auth, comments, products, reviews, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("users")
                .push(Router::with_path("login").post(users::login::handler))
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .get(users::index::handler)
                        .post(users::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .get(users::get::handler)
                                .put(users::update::handler)
                                .delete(users::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("reviews")
                .get(reviews::index::handler)
                .post(reviews::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(reviews::get::handler)
                        .delete(reviews::delete::handler),
                ),
        )
        .push(
            Router::new().hoop(auth::middleware::handler).push(
                Router::with_path("comments")
                    .post(comments::create::handler)
                    .push(
                        Router::with_path("{product_id}")
                            .get(comments::index::handler)
                            .push(
                                Router::with_path("{comment_id}")
                                    .get(comments::get::handler)
                                    .put(comments::update::handler)
                                    .delete(comments::delete::handler),
                            ),
                    ),
            ),
        )
}
