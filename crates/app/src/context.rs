//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::TokenSigner,
    database,
    domain::{
        comments::{CommentsService, PgCommentsService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The shared store client and token signer handed to every handler.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub comments: Arc<dyn CommentsService>,
    pub tokens: TokenSigner,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, tokens: TokenSigner) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            users: Arc::new(PgUsersService::new(pool.clone())),
            products: Arc::new(PgProductsService::new(pool.clone())),
            reviews: Arc::new(PgReviewsService::new(pool.clone())),
            comments: Arc::new(PgCommentsService::new(pool)),
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        comments::MockCommentsService, products::MockProductsService, reviews::MockReviewsService,
        users::MockUsersService,
    };

    use super::*;

    #[tokio::test]
    async fn services_are_reachable_through_trait_objects() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_list_users().once().return_once(|| Ok(vec![]));

        let context = AppContext {
            users: Arc::new(users),
            products: Arc::new(MockProductsService::new()),
            reviews: Arc::new(MockReviewsService::new()),
            comments: Arc::new(MockCommentsService::new()),
            tokens: TokenSigner::new("test-secret"),
        };

        assert!(context.users.list_users().await?.is_empty());

        Ok(())
    }
}
