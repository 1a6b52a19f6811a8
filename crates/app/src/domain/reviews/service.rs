//! Reviews service.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::reviews::{
    data::NewReview, errors::ReviewsServiceError, records::ReviewRecord,
};

const LIST_REVIEWS_SQL: &str = "SELECT id, user_id, product_id, rating, content, created_at, updated_at \
     FROM reviews ORDER BY id";

const GET_REVIEW_SQL: &str = "SELECT id, user_id, product_id, rating, content, created_at, updated_at \
     FROM reviews WHERE id = $1";

const CREATE_REVIEW_SQL: &str = "INSERT INTO reviews (user_id, product_id, rating, content) \
     VALUES ($1, $2, $3, $4) \
     RETURNING id, user_id, product_id, rating, content, created_at, updated_at";

const DELETE_REVIEW_SQL: &str = "DELETE FROM reviews WHERE id = $1";

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    pool: PgPool,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            product_id: row.try_get("product_id")?,
            rating: row.try_get("rating")?,
            content: row.try_get("content")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        query_as::<Postgres, ReviewRecord>(LIST_REVIEWS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(ReviewsServiceError::from)
    }

    async fn get_review(&self, id: i32) -> Result<ReviewRecord, ReviewsServiceError> {
        query_as::<Postgres, ReviewRecord>(GET_REVIEW_SQL)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(ReviewsServiceError::from)
    }

    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, ReviewsServiceError> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(review.user_id)
            .bind(review.product_id)
            .bind(review.rating)
            .bind(review.content)
            .fetch_one(&self.pool)
            .await
            .map_err(ReviewsServiceError::from)
    }

    async fn delete_review(&self, id: i32) -> Result<(), ReviewsServiceError> {
        let rows_affected = query(DELETE_REVIEW_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(ReviewsServiceError::from)?
            .rows_affected();

        if rows_affected == 0 {
            return Err(ReviewsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Retrieves all reviews.
    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, ReviewsServiceError>;

    /// Retrieve a single review by id.
    async fn get_review(&self, id: i32) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Creates a new review referencing an existing user and product.
    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Deletes a review by id.
    async fn delete_review(&self, id: i32) -> Result<(), ReviewsServiceError>;
}
